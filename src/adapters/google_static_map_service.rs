use async_trait::async_trait;

use crate::core::interfaces::adapters::SatelliteImageryService;
use crate::core::models::{Coordinate, SatelliteImage, ScoutError};
use crate::global_constants;

pub struct GoogleStaticMapService {
    endpoint: String,
    client: reqwest::Client,
}

impl GoogleStaticMapService {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    fn build_query_params(
        api_key: &str,
        center: Coordinate,
        zoom: u8,
    ) -> [(&'static str, String); 5] {
        [
            ("center", center.as_query_value()),
            ("zoom", zoom.to_string()),
            ("size", global_constants::STATIC_MAP_SIZE.to_string()),
            ("maptype", global_constants::STATIC_MAP_TYPE.to_string()),
            ("key", api_key.to_string()),
        ]
    }
}

#[async_trait]
impl SatelliteImageryService for GoogleStaticMapService {
    async fn download_to_memory(
        &self,
        api_key: &str,
        center: Coordinate,
        zoom: u8,
    ) -> Result<Option<SatelliteImage>, ScoutError> {
        log::info!("[IMAGERY] Fetching satellite image for {} at zoom {}", center, zoom);

        let params = Self::build_query_params(api_key, center, zoom);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            log::warn!(
                "[IMAGERY] Static map request failed with status {}",
                response.status()
            );
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        Ok(Some(SatelliteImage::from_bytes(bytes.to_vec())))
    }
}
