use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoverageError>;

#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Dataset fetch failed (status {status}): {url}")]
    Status { url: String, status: u16 },

    #[error("GeoJSON decode error: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for CoverageError {
    fn from(err: reqwest::Error) -> Self {
        CoverageError::Network(err.to_string())
    }
}

impl From<geojson::Error> for CoverageError {
    fn from(err: geojson::Error) -> Self {
        CoverageError::Decode(err.to_string())
    }
}
