use async_trait::async_trait;
use serde::Deserialize;

use crate::core::interfaces::adapters::PlaceSearchService;
use crate::core::models::{Coordinate, Place, ScoutError};

pub struct GooglePlaceSearchService {
    endpoint: String,
    client: reqwest::Client,
}

// A missing `results` field is a contract violation and fails the parse; an
// empty array is the normal "nothing nearby" answer.
#[derive(Debug, Deserialize)]
struct PlaceSearchResponse {
    results: Vec<PlaceResult>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    name: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinate,
}

impl GooglePlaceSearchService {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    fn build_query_params(
        api_key: &str,
        query: &str,
        center: Coordinate,
        radius_meters: u32,
    ) -> [(&'static str, String); 4] {
        [
            ("query", query.to_string()),
            ("location", center.as_query_value()),
            ("radius", radius_meters.to_string()),
            ("key", api_key.to_string()),
        ]
    }

    fn places_from(response: PlaceSearchResponse) -> Vec<Place> {
        response
            .results
            .into_iter()
            .map(|result| Place::new(result.name, result.geometry.location))
            .collect()
    }
}

#[async_trait]
impl PlaceSearchService for GooglePlaceSearchService {
    async fn search_places(
        &self,
        api_key: &str,
        query: &str,
        center: Coordinate,
        radius_meters: u32,
    ) -> Result<Vec<Place>, ScoutError> {
        log::info!("[PLACES] Searching for \"{}\" near {}", query, center);

        let params = Self::build_query_params(api_key, query, center, radius_meters);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?;

        let body = response.text().await?;
        let parsed: PlaceSearchResponse = serde_json::from_str(&body)?;

        let places = Self::places_from(parsed);
        log::info!("[PLACES] Found {} place(s)", places.len());

        Ok(places)
    }
}
