mod geocoding_service;
mod imagery_service;
mod place_search_service;

pub use geocoding_service::GeocodingService;
pub use imagery_service::SatelliteImageryService;
pub use place_search_service::PlaceSearchService;
