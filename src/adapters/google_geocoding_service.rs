use async_trait::async_trait;
use serde::Deserialize;

use crate::core::interfaces::adapters::GeocodingService;
use crate::core::models::{Coordinate, ScoutError};
use crate::global_constants;

pub struct GoogleGeocodingService {
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinate,
}

impl GoogleGeocodingService {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    // Any non-OK status (zero results, bad key, quota) collapses to None; the
    // upstream does not let callers tell them apart.
    fn first_location(response: GeocodeResponse) -> Result<Option<Coordinate>, ScoutError> {
        if response.status != global_constants::GEOCODE_STATUS_OK {
            log::warn!("[GEOCODER] Geocoding returned status: {}", response.status);
            return Ok(None);
        }

        let result = response.results.into_iter().next().ok_or_else(|| {
            ScoutError::MalformedResponse("geocoding status OK but results list is empty".to_string())
        })?;

        Ok(Some(result.geometry.location))
    }
}

#[async_trait]
impl GeocodingService for GoogleGeocodingService {
    async fn resolve_address(
        &self,
        api_key: &str,
        address: &str,
    ) -> Result<Option<Coordinate>, ScoutError> {
        log::info!("[GEOCODER] Resolving address");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("address", address), ("key", api_key)])
            .send()
            .await?;

        let body = response.text().await?;
        let parsed: GeocodeResponse = serde_json::from_str(&body)?;

        Self::first_location(parsed)
    }
}
