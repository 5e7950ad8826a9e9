pub const APPLICATION_TITLE: &str = "CampRecon";

pub const GEOCODING_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const PLACE_SEARCH_API_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";
pub const STATIC_MAP_API_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";

pub const GEOCODE_STATUS_OK: &str = "OK";

pub const STATIC_MAP_SIZE: &str = "600x600";
pub const STATIC_MAP_TYPE: &str = "satellite";

pub const DEFAULT_SEARCH_QUERY: &str = "camp sites";
pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 5000;

pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 21;
pub const DEFAULT_ZOOM: u8 = 12;

// Placeholder zoom stored on every search result. The imagery step ignores it
// and re-reads the zoom slider instead.
pub const PLACE_LIST_ZOOM: u8 = 12;

pub const PROMPT_MISSING_INPUT: &str = "Please enter a valid API key and address.";
pub const MESSAGE_LOCATION_NOT_FOUND: &str = "Location not found.";
pub const MESSAGE_NO_PLACES_FOUND: &str = "No places found.";
pub const ERROR_IMAGE_DOWNLOAD: &str = "Failed to download the image. Check your API key and quota.";
