use geojson::{FeatureCollection, GeoJson};

use crate::error::{CoverageError, Result};

/// Thin HTTP client for the host serving the GeoJSON datasets.
pub struct CoverageClient {
    client: reqwest::Client,
    base_url: String,
}

impl CoverageClient {
    /// No request timeout: a dataset load runs to completion or failure.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for a dataset resource path.
    pub fn resource_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetch and parse one GeoJSON feature collection.
    pub async fn fetch_collection(&self, path: &str) -> Result<FeatureCollection> {
        let url = self.resource_url(path);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoverageError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        match body.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(collection) => Ok(collection),
            GeoJson::Feature(_) => Err(CoverageError::Decode(format!(
                "{url}: expected a FeatureCollection, got a bare Feature"
            ))),
            GeoJson::Geometry(_) => Err(CoverageError::Decode(format!(
                "{url}: expected a FeatureCollection, got a bare Geometry"
            ))),
        }
    }

    /// Fetch a resource as raw bytes. Used for downloads.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoverageError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_urls_join_cleanly() {
        let client = CoverageClient::new("http://localhost:8080/");
        assert_eq!(
            client.resource_url("data/5g_map.geojson"),
            "http://localhost:8080/data/5g_map.geojson"
        );
        assert_eq!(
            client.resource_url("/data/5g_map.geojson"),
            "http://localhost:8080/data/5g_map.geojson"
        );
    }
}
