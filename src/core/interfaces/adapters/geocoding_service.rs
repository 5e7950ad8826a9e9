use async_trait::async_trait;

use crate::core::models::{Coordinate, ScoutError};

/// Resolves a free-text address to coordinates.
///
/// `Ok(None)` means the upstream reported anything other than a successful
/// lookup; invalid keys, zero results and exhausted quotas are indistinguishable
/// there and are deliberately not separated.
#[async_trait]
pub trait GeocodingService: Send + Sync {
    async fn resolve_address(
        &self,
        api_key: &str,
        address: &str,
    ) -> Result<Option<Coordinate>, ScoutError>;
}
