use std::path::Path;

use async_trait::async_trait;

use crate::core::models::{Coordinate, SatelliteImage, ScoutError};

/// Fetches satellite raster imagery for a coordinate at a zoom level.
///
/// Success is signaled solely by the upstream answering HTTP 200; `Ok(None)`
/// covers every other response without distinguishing the cause.
#[async_trait]
pub trait SatelliteImageryService: Send + Sync {
    async fn download_to_memory(
        &self,
        api_key: &str,
        center: Coordinate,
        zoom: u8,
    ) -> Result<Option<SatelliteImage>, ScoutError>;

    /// File variant of the same request. Writes `path` only when the fetch
    /// succeeds; `Ok(false)` reports an upstream failure with nothing written.
    async fn download_to_file(
        &self,
        api_key: &str,
        center: Coordinate,
        zoom: u8,
        path: &Path,
    ) -> Result<bool, ScoutError> {
        match self.download_to_memory(api_key, center, zoom).await? {
            Some(image) => {
                tokio::fs::write(path, image.as_bytes())
                    .await
                    .map_err(|error| ScoutError::Io(error.to_string()))?;
                log::info!("[IMAGERY] Image successfully downloaded: {}", path.display());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
