use std::sync::Arc;

use iced::{Element, Task, Theme};

use crate::adapters::{GoogleGeocodingService, GooglePlaceSearchService, GoogleStaticMapService};
use crate::core::orchestrators::pipeline::ScoutServices;
use crate::core::orchestrators::scout_orchestrator::{OrchestratorMessage, ScoutOrchestrator};
use crate::global_constants;
use crate::presentation::app_theme;

pub struct CampReconApp {
    orchestrator: ScoutOrchestrator,
}

impl CampReconApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let services = ScoutServices {
            geocoding: Arc::new(GoogleGeocodingService::new(
                global_constants::GEOCODING_API_URL.to_string(),
            )),
            place_search: Arc::new(GooglePlaceSearchService::new(
                global_constants::PLACE_SEARCH_API_URL.to_string(),
            )),
            imagery: Arc::new(GoogleStaticMapService::new(
                global_constants::STATIC_MAP_API_URL.to_string(),
            )),
        };

        (
            Self {
                orchestrator: ScoutOrchestrator::build(services),
            },
            Task::none(),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn current_theme(&self) -> Theme {
        app_theme::get_theme(self.orchestrator.theme_mode())
    }
}
