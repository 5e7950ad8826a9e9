use std::sync::Arc;

use crate::core::interfaces::adapters::{
    GeocodingService, PlaceSearchService, SatelliteImageryService,
};
use crate::core::models::{Coordinate, Place, SatelliteImage, ScoutError};
use crate::global_constants;

/// The three upstream collaborators a scout cycle talks to.
#[derive(Clone)]
pub struct ScoutServices {
    pub geocoding: Arc<dyn GeocodingService>,
    pub place_search: Arc<dyn PlaceSearchService>,
    pub imagery: Arc<dyn SatelliteImageryService>,
}

/// Immutable snapshot of the form state at the moment a cycle starts.
///
/// The cycle never reads live UI state; a newer snapshot simply supersedes the
/// whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoutRequest {
    pub api_key: String,
    pub address: String,
    pub query: String,
    pub zoom: u8,
    pub selected_place: Option<Place>,
}

/// What one completed cycle tells the view to render.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    MissingInput,
    LocationNotFound,
    Located {
        origin: Coordinate,
    },
    NoPlacesFound {
        origin: Coordinate,
    },
    Imagery {
        origin: Coordinate,
        places: Vec<Place>,
        selected: Place,
        image: SatelliteImage,
    },
    ImageryUnavailable {
        origin: Coordinate,
        places: Vec<Place>,
        selected: Place,
    },
    Failed(ScoutError),
}

/// Runs the full address -> geocode -> place search -> imagery sequence.
///
/// Each gate stops the cycle with the outcome the view should show; nothing is
/// memoized between cycles.
pub async fn run_scout_cycle(request: ScoutRequest, services: ScoutServices) -> RenderOutcome {
    if request.api_key.trim().is_empty() || request.address.trim().is_empty() {
        return RenderOutcome::MissingInput;
    }

    let origin = match services
        .geocoding
        .resolve_address(&request.api_key, &request.address)
        .await
    {
        Ok(Some(origin)) => origin,
        Ok(None) => return RenderOutcome::LocationNotFound,
        Err(error) => {
            log::error!("[PIPELINE] Geocoding failed: {}", error);
            return RenderOutcome::Failed(error);
        }
    };

    log::info!("[PIPELINE] Address resolved to {}", origin);

    if request.query.trim().is_empty() {
        return RenderOutcome::Located { origin };
    }

    let places = match services
        .place_search
        .search_places(
            &request.api_key,
            &request.query,
            origin,
            global_constants::DEFAULT_SEARCH_RADIUS_METERS,
        )
        .await
    {
        Ok(places) => places,
        Err(error) => {
            log::error!("[PIPELINE] Place search failed: {}", error);
            return RenderOutcome::Failed(error);
        }
    };

    if places.is_empty() {
        return RenderOutcome::NoPlacesFound { origin };
    }

    // A prior selection survives only while it is still in the result list;
    // otherwise the first result is shown, like a freshly populated selector.
    let selected = request
        .selected_place
        .filter(|place| places.contains(place))
        .unwrap_or_else(|| places[0].clone());

    match services
        .imagery
        .download_to_memory(&request.api_key, selected.coordinate, request.zoom)
        .await
    {
        Ok(Some(image)) => {
            if let Some((width, height)) = image.dimensions() {
                log::debug!("[PIPELINE] Fetched {}x{} satellite image", width, height);
            }
            RenderOutcome::Imagery {
                origin,
                places,
                selected,
                image,
            }
        }
        Ok(None) => RenderOutcome::ImageryUnavailable {
            origin,
            places,
            selected,
        },
        Err(error) => {
            log::error!("[PIPELINE] Imagery fetch failed: {}", error);
            RenderOutcome::Failed(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockGeocodingService {
        outcome: Result<Option<Coordinate>, ScoutError>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl MockGeocodingService {
        fn resolving_to(coordinate: Coordinate) -> Self {
            Self {
                outcome: Ok(Some(coordinate)),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn not_found() -> Self {
            Self {
                outcome: Ok(None),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: ScoutError) -> Self {
            Self {
                outcome: Err(error),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GeocodingService for MockGeocodingService {
        async fn resolve_address(
            &self,
            api_key: &str,
            address: &str,
        ) -> Result<Option<Coordinate>, ScoutError> {
            self.calls
                .lock()
                .unwrap()
                .push((api_key.to_string(), address.to_string()));
            self.outcome.clone()
        }
    }

    struct MockPlaceSearchService {
        places: Vec<Place>,
        calls: Mutex<Vec<(String, String, u32)>>,
    }

    impl MockPlaceSearchService {
        fn returning(places: Vec<Place>) -> Self {
            Self {
                places,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn last_call(&self) -> Option<(String, String, u32)> {
            self.calls.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl PlaceSearchService for MockPlaceSearchService {
        async fn search_places(
            &self,
            _api_key: &str,
            query: &str,
            center: Coordinate,
            radius_meters: u32,
        ) -> Result<Vec<Place>, ScoutError> {
            self.calls.lock().unwrap().push((
                query.to_string(),
                center.as_query_value(),
                radius_meters,
            ));
            Ok(self.places.clone())
        }
    }

    struct MockImageryService {
        image: Option<SatelliteImage>,
        calls: Mutex<Vec<(String, u8)>>,
    }

    impl MockImageryService {
        fn returning(image: Option<SatelliteImage>) -> Self {
            Self {
                image,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn last_call(&self) -> Option<(String, u8)> {
            self.calls.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl SatelliteImageryService for MockImageryService {
        async fn download_to_memory(
            &self,
            _api_key: &str,
            center: Coordinate,
            zoom: u8,
        ) -> Result<Option<SatelliteImage>, ScoutError> {
            self.calls
                .lock()
                .unwrap()
                .push((center.as_query_value(), zoom));
            Ok(self.image.clone())
        }
    }

    fn services(
        geocoding: Arc<MockGeocodingService>,
        place_search: Arc<MockPlaceSearchService>,
        imagery: Arc<MockImageryService>,
    ) -> ScoutServices {
        ScoutServices {
            geocoding,
            place_search,
            imagery,
        }
    }

    fn request(api_key: &str, address: &str, query: &str, zoom: u8) -> ScoutRequest {
        ScoutRequest {
            api_key: api_key.to_string(),
            address: address.to_string(),
            query: query.to_string(),
            zoom,
            selected_place: None,
        }
    }

    fn pine_camp() -> Place {
        Place::new("Pine Camp".to_string(), Coordinate::new(45.01, -71.01))
    }

    #[tokio::test]
    async fn test_blank_api_key_or_address_stops_before_geocoding() {
        let geocoding = Arc::new(MockGeocodingService::resolving_to(Coordinate::new(
            45.0, -71.0,
        )));
        let place_search = Arc::new(MockPlaceSearchService::returning(vec![pine_camp()]));
        let imagery = Arc::new(MockImageryService::returning(None));

        let outcome = run_scout_cycle(
            request("", "1 Camp Rd", "camp sites", 12),
            services(geocoding.clone(), place_search, imagery),
        )
        .await;

        assert_eq!(outcome, RenderOutcome::MissingInput);
        assert_eq!(geocoding.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unresolved_address_reports_location_not_found() {
        let geocoding = Arc::new(MockGeocodingService::not_found());
        let place_search = Arc::new(MockPlaceSearchService::returning(vec![pine_camp()]));
        let imagery = Arc::new(MockImageryService::returning(None));

        let outcome = run_scout_cycle(
            request("key", "nowhere at all", "camp sites", 12),
            services(geocoding, place_search.clone(), imagery),
        )
        .await;

        assert_eq!(outcome, RenderOutcome::LocationNotFound);
        assert_eq!(place_search.last_call(), None);
    }

    #[tokio::test]
    async fn test_blank_query_stops_after_geocoding() {
        let origin = Coordinate::new(45.0, -71.0);
        let geocoding = Arc::new(MockGeocodingService::resolving_to(origin));
        let place_search = Arc::new(MockPlaceSearchService::returning(vec![pine_camp()]));
        let imagery = Arc::new(MockImageryService::returning(None));

        let outcome = run_scout_cycle(
            request("key", "1 Camp Rd", "  ", 12),
            services(geocoding, place_search.clone(), imagery),
        )
        .await;

        assert_eq!(outcome, RenderOutcome::Located { origin });
        assert_eq!(place_search.last_call(), None);
    }

    #[tokio::test]
    async fn test_search_centers_on_resolved_coordinates_with_default_radius() {
        let geocoding = Arc::new(MockGeocodingService::resolving_to(Coordinate::new(
            45.0, -71.0,
        )));
        let place_search = Arc::new(MockPlaceSearchService::returning(vec![pine_camp()]));
        let imagery = Arc::new(MockImageryService::returning(Some(
            SatelliteImage::from_bytes(b"PNGDATA".to_vec()),
        )));

        run_scout_cycle(
            request("key", "1 Camp Rd", "camp sites", 12),
            services(geocoding, place_search.clone(), imagery),
        )
        .await;

        assert_eq!(
            place_search.last_call(),
            Some(("camp sites".to_string(), "45.0,-71.0".to_string(), 5000))
        );
    }

    #[tokio::test]
    async fn test_empty_place_list_reports_no_places_found() {
        let origin = Coordinate::new(45.0, -71.0);
        let geocoding = Arc::new(MockGeocodingService::resolving_to(origin));
        let place_search = Arc::new(MockPlaceSearchService::returning(Vec::new()));
        let imagery = Arc::new(MockImageryService::returning(None));

        let outcome = run_scout_cycle(
            request("key", "1 Camp Rd", "camp sites", 12),
            services(geocoding, place_search, imagery.clone()),
        )
        .await;

        assert_eq!(outcome, RenderOutcome::NoPlacesFound { origin });
        assert_eq!(imagery.last_call(), None);
    }

    #[tokio::test]
    async fn test_imagery_fetched_for_selected_place_at_requested_zoom() {
        let geocoding = Arc::new(MockGeocodingService::resolving_to(Coordinate::new(
            45.0, -71.0,
        )));
        let place_search = Arc::new(MockPlaceSearchService::returning(vec![pine_camp()]));
        let imagery = Arc::new(MockImageryService::returning(Some(
            SatelliteImage::from_bytes(b"PNGDATA".to_vec()),
        )));

        let outcome = run_scout_cycle(
            request("key", "1 Camp Rd", "camp sites", 14),
            services(geocoding, place_search, imagery.clone()),
        )
        .await;

        assert_eq!(imagery.last_call(), Some(("45.01,-71.01".to_string(), 14)));
        match outcome {
            RenderOutcome::Imagery {
                selected, image, ..
            } => {
                assert_eq!(selected, pine_camp());
                assert_eq!(image.as_bytes(), b"PNGDATA");
            }
            other => panic!("expected imagery outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_first_place_is_selected_when_no_prior_selection() {
        let second = Place::new("Birch Camp".to_string(), Coordinate::new(45.02, -71.02));
        let geocoding = Arc::new(MockGeocodingService::resolving_to(Coordinate::new(
            45.0, -71.0,
        )));
        let place_search = Arc::new(MockPlaceSearchService::returning(vec![
            pine_camp(),
            second.clone(),
        ]));
        let imagery = Arc::new(MockImageryService::returning(Some(
            SatelliteImage::from_bytes(b"PNGDATA".to_vec()),
        )));

        let outcome = run_scout_cycle(
            request("key", "1 Camp Rd", "camp sites", 12),
            services(geocoding, place_search, imagery),
        )
        .await;

        match outcome {
            RenderOutcome::Imagery { selected, .. } => assert_eq!(selected, pine_camp()),
            other => panic!("expected imagery outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_stale_selection_falls_back_to_first_result() {
        let geocoding = Arc::new(MockGeocodingService::resolving_to(Coordinate::new(
            45.0, -71.0,
        )));
        let place_search = Arc::new(MockPlaceSearchService::returning(vec![pine_camp()]));
        let imagery = Arc::new(MockImageryService::returning(Some(
            SatelliteImage::from_bytes(b"PNGDATA".to_vec()),
        )));

        let mut stale_request = request("key", "1 Camp Rd", "camp sites", 12);
        stale_request.selected_place = Some(Place::new(
            "Gone Camp".to_string(),
            Coordinate::new(44.0, -70.0),
        ));

        let outcome = run_scout_cycle(
            stale_request,
            services(geocoding, place_search, imagery.clone()),
        )
        .await;

        assert_eq!(imagery.last_call(), Some(("45.01,-71.01".to_string(), 12)));
        match outcome {
            RenderOutcome::Imagery { selected, .. } => assert_eq!(selected, pine_camp()),
            other => panic!("expected imagery outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_imagery_fetch_reports_unavailable() {
        let geocoding = Arc::new(MockGeocodingService::resolving_to(Coordinate::new(
            45.0, -71.0,
        )));
        let place_search = Arc::new(MockPlaceSearchService::returning(vec![pine_camp()]));
        let imagery = Arc::new(MockImageryService::returning(None));

        let outcome = run_scout_cycle(
            request("key", "1 Camp Rd", "camp sites", 12),
            services(geocoding, place_search, imagery),
        )
        .await;

        match outcome {
            RenderOutcome::ImageryUnavailable { selected, .. } => {
                assert_eq!(selected, pine_camp());
            }
            other => panic!("expected imagery-unavailable outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_geocoding_error_surfaces_as_failed_outcome() {
        let error = ScoutError::MalformedResponse("missing field `results`".to_string());
        let geocoding = Arc::new(MockGeocodingService::failing(error.clone()));
        let place_search = Arc::new(MockPlaceSearchService::returning(vec![pine_camp()]));
        let imagery = Arc::new(MockImageryService::returning(None));

        let outcome = run_scout_cycle(
            request("key", "1 Camp Rd", "camp sites", 12),
            services(geocoding, place_search, imagery),
        )
        .await;

        assert_eq!(outcome, RenderOutcome::Failed(error));
    }
}
