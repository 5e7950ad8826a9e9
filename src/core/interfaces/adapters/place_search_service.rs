use async_trait::async_trait;

use crate::core::models::{Coordinate, Place, ScoutError};

/// Text search for places around a center point.
///
/// An empty result list is a valid outcome, not an error.
#[async_trait]
pub trait PlaceSearchService: Send + Sync {
    async fn search_places(
        &self,
        api_key: &str,
        query: &str,
        center: Coordinate,
        radius_meters: u32,
    ) -> Result<Vec<Place>, ScoutError>;
}
