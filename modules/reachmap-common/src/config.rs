use std::env;
use std::path::PathBuf;

/// Host serving the three GeoJSON datasets. Any static file server over the
/// repository's data directory works.
pub const DEFAULT_DATA_URL: &str = "http://localhost:8080";

/// Application configuration loaded from environment variables.
/// Every variable has a default; loading never fails.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL the dataset resource paths are joined onto.
    pub data_url: String,
    /// On-disk cache for map tiles.
    pub tile_cache_dir: PathBuf,
    /// Where dataset downloads are saved.
    pub download_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            data_url: env::var("REACHMAP_DATA_URL")
                .unwrap_or_else(|_| DEFAULT_DATA_URL.to_string()),
            tile_cache_dir: env::var("REACHMAP_TILE_CACHE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_tile_cache_dir()),
            download_dir: env::var("REACHMAP_DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// The platform cache directory when the system exposes one, a local
/// `.tile-cache` otherwise.
fn default_tile_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("reachmap").join("tiles"))
        .unwrap_or_else(|| PathBuf::from(".tile-cache"))
}
