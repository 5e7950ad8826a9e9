mod google_geocoding_service;
mod google_place_search_service;
mod google_static_map_service;

pub use google_geocoding_service::GoogleGeocodingService;
pub use google_place_search_service::GooglePlaceSearchService;
pub use google_static_map_service::GoogleStaticMapService;
