//! Saving dataset resources to disk.

use std::path::{Path, PathBuf};

use tracing::info;
use url::Url;

use crate::client::CoverageClient;
use crate::error::{CoverageError, Result};

/// Fetch `url` and save it into `dest_dir`, named after the last path
/// segment of the URL. Returns the written path.
pub async fn download_file(
    client: &CoverageClient,
    url: &str,
    dest_dir: &Path,
) -> Result<PathBuf> {
    let name = file_name_for(url)?;
    let bytes = client.fetch_bytes(url).await?;

    tokio::fs::create_dir_all(dest_dir).await?;
    let dest = dest_dir.join(name);
    tokio::fs::write(&dest, &bytes).await?;

    info!(url, dest = %dest.display(), bytes = bytes.len(), "Saved download");
    Ok(dest)
}

/// The same file name a browser save-as would pick.
fn file_name_for(url: &str) -> Result<String> {
    let parsed =
        Url::parse(url).map_err(|e| CoverageError::InvalidUrl(format!("{url}: {e}")))?;
    let name = parsed
        .path_segments()
        .and_then(|segments| segments.last())
        .filter(|segment| !segment.is_empty())
        .unwrap_or("download");
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_the_last_path_segment() {
        assert_eq!(
            file_name_for("http://localhost:8080/data/5g_map.geojson").unwrap(),
            "5g_map.geojson"
        );
    }

    #[test]
    fn query_strings_do_not_leak_into_the_name() {
        assert_eq!(
            file_name_for("https://host/data/map.geojson?v=2").unwrap(),
            "map.geojson"
        );
    }

    #[test]
    fn bare_host_or_trailing_slash_falls_back() {
        assert_eq!(file_name_for("https://host/").unwrap(), "download");
        assert_eq!(file_name_for("https://host/data/").unwrap(), "download");
    }

    #[test]
    fn invalid_urls_are_rejected() {
        assert!(matches!(
            file_name_for("not a url"),
            Err(CoverageError::InvalidUrl(_))
        ));
    }
}
