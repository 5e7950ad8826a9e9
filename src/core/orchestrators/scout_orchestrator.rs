use std::path::PathBuf;

use iced::widget::{button, column, container, image, pick_list, row, scrollable, slider, text,
    text_input};
use iced::{Alignment, Element, Length, Task};

use crate::core::models::{Place, ThemeMode};
use crate::core::orchestrators::pipeline::{
    run_scout_cycle, RenderOutcome, ScoutRequest, ScoutServices,
};
use crate::global_constants;
use crate::presentation::app_theme;

/// Owns the live form state and re-runs the scout pipeline on every change.
///
/// Cycles are tagged with a revision; a completed cycle older than the latest
/// input change is dropped, so the freshest snapshot always wins.
pub struct ScoutOrchestrator {
    services: ScoutServices,
    api_key: String,
    address: String,
    query: String,
    zoom: u8,
    selected_place: Option<Place>,
    theme_mode: ThemeMode,
    revision: u64,
    cycle_in_flight: bool,
    outcome: RenderOutcome,
    save_status: Option<String>,
}

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    ApiKeyChanged(String),
    AddressChanged(String),
    QueryChanged(String),
    ZoomChanged(u8),
    PlaceSelected(Place),
    CycleComplete(u64, RenderOutcome),
    SaveImage,
    ImageSaved(Result<String, String>),
    ToggleTheme,
}

impl ScoutOrchestrator {
    pub fn build(services: ScoutServices) -> Self {
        Self {
            services,
            api_key: String::new(),
            address: String::new(),
            query: global_constants::DEFAULT_SEARCH_QUERY.to_string(),
            zoom: global_constants::DEFAULT_ZOOM,
            selected_place: None,
            theme_mode: ThemeMode::default(),
            revision: 0,
            cycle_in_flight: false,
            outcome: RenderOutcome::MissingInput,
            save_status: None,
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        match message {
            OrchestratorMessage::ApiKeyChanged(api_key) => {
                self.api_key = api_key;
                self.start_cycle()
            }
            OrchestratorMessage::AddressChanged(address) => {
                self.address = address;
                self.selected_place = None;
                self.start_cycle()
            }
            OrchestratorMessage::QueryChanged(query) => {
                self.query = query;
                self.selected_place = None;
                self.start_cycle()
            }
            OrchestratorMessage::ZoomChanged(zoom) => {
                self.zoom = zoom.clamp(global_constants::MIN_ZOOM, global_constants::MAX_ZOOM);
                self.start_cycle()
            }
            OrchestratorMessage::PlaceSelected(place) => {
                log::info!("[ORCHESTRATOR] Place selected: {}", place);
                self.selected_place = Some(place);
                self.start_cycle()
            }
            OrchestratorMessage::CycleComplete(revision, outcome) => {
                self.handle_cycle_complete(revision, outcome)
            }
            OrchestratorMessage::SaveImage => self.handle_save_image(),
            OrchestratorMessage::ImageSaved(result) => {
                self.save_status = Some(match result {
                    Ok(path) => {
                        log::info!("[ORCHESTRATOR] Image saved to {}", path);
                        format!("Image saved to {}", path)
                    }
                    Err(message) => {
                        log::error!("[ORCHESTRATOR] Image save failed: {}", message);
                        message
                    }
                });
                Task::none()
            }
            OrchestratorMessage::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                log::debug!("[ORCHESTRATOR] Theme switched to {}", self.theme_mode);
                Task::none()
            }
        }
    }

    fn snapshot(&self) -> ScoutRequest {
        ScoutRequest {
            api_key: self.api_key.clone(),
            address: self.address.clone(),
            query: self.query.clone(),
            zoom: self.zoom,
            selected_place: self.selected_place.clone(),
        }
    }

    fn start_cycle(&mut self) -> Task<OrchestratorMessage> {
        self.revision += 1;
        self.cycle_in_flight = true;
        self.save_status = None;

        let revision = self.revision;
        let request = self.snapshot();
        let services = self.services.clone();

        log::debug!("[ORCHESTRATOR] Starting scout cycle {}", revision);

        Task::future(async move {
            let outcome = run_scout_cycle(request, services).await;
            OrchestratorMessage::CycleComplete(revision, outcome)
        })
    }

    fn handle_cycle_complete(
        &mut self,
        revision: u64,
        outcome: RenderOutcome,
    ) -> Task<OrchestratorMessage> {
        if revision != self.revision {
            log::debug!(
                "[ORCHESTRATOR] Dropping stale cycle {} (current is {})",
                revision,
                self.revision
            );
            return Task::none();
        }

        self.cycle_in_flight = false;

        // Record the effective selection so the picker reflects what is shown.
        match &outcome {
            RenderOutcome::Imagery { selected, .. }
            | RenderOutcome::ImageryUnavailable { selected, .. } => {
                self.selected_place = Some(selected.clone());
            }
            _ => {}
        }

        self.outcome = outcome;
        Task::none()
    }

    fn handle_save_image(&mut self) -> Task<OrchestratorMessage> {
        let Some(place) = self.selected_place.clone() else {
            return Task::none();
        };

        let path = match resolve_save_path(&place, self.zoom) {
            Ok(path) => path,
            Err(error) => {
                self.save_status = Some(error.to_string());
                return Task::none();
            }
        };

        log::info!("[ORCHESTRATOR] Saving satellite image to {}", path.display());

        let services = self.services.clone();
        let api_key = self.api_key.clone();
        let zoom = self.zoom;

        Task::future(async move {
            let result = match services
                .imagery
                .download_to_file(&api_key, place.coordinate, zoom, &path)
                .await
            {
                Ok(true) => Ok(path.display().to_string()),
                Ok(false) => Err(global_constants::ERROR_IMAGE_DOWNLOAD.to_string()),
                Err(error) => Err(error.to_string()),
            };
            OrchestratorMessage::ImageSaved(result)
        })
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        let theme_button = button(text(format!("Theme: {}", self.theme_mode)).size(14))
            .padding([6, 12])
            .on_press(OrchestratorMessage::ToggleTheme);

        let header = row![
            text(global_constants::APPLICATION_TITLE)
                .size(28)
                .width(Length::Fill),
            theme_button,
        ]
        .align_y(Alignment::Center);

        let api_key_input = text_input("Enter your Google API Key", &self.api_key)
            .on_input(OrchestratorMessage::ApiKeyChanged)
            .padding(10)
            .size(16);

        let address_input = text_input("Enter an address or location", &self.address)
            .on_input(OrchestratorMessage::AddressChanged)
            .padding(10)
            .size(16);

        let zoom_row = row![
            text(format!("Zoom Level: {}", self.zoom)).size(16),
            slider(
                global_constants::MIN_ZOOM..=global_constants::MAX_ZOOM,
                self.zoom,
                OrchestratorMessage::ZoomChanged,
            )
            .step(1u8),
        ]
        .spacing(15)
        .align_y(Alignment::Center);

        let mut content = column![header, api_key_input, address_input, zoom_row]
            .spacing(15)
            .padding(20)
            .width(Length::Fill);

        if self.cycle_in_flight {
            content = content.push(text("Searching...").size(14));
        }

        content = content.push(self.render_outcome());

        if let Some(status) = &self.save_status {
            content = content.push(text(status.clone()).size(14));
        }

        scrollable(container(content).width(Length::Fill)).into()
    }

    fn render_outcome(&self) -> Element<'_, OrchestratorMessage> {
        match &self.outcome {
            RenderOutcome::MissingInput => text(global_constants::PROMPT_MISSING_INPUT)
                .size(16)
                .into(),
            RenderOutcome::LocationNotFound => text(global_constants::MESSAGE_LOCATION_NOT_FOUND)
                .size(16)
                .into(),
            RenderOutcome::Located { origin } => column![
                coordinates_line(origin),
                self.query_input(),
            ]
            .spacing(15)
            .into(),
            RenderOutcome::NoPlacesFound { origin } => column![
                coordinates_line(origin),
                self.query_input(),
                text(global_constants::MESSAGE_NO_PLACES_FOUND).size(16),
            ]
            .spacing(15)
            .into(),
            RenderOutcome::Imagery {
                origin,
                places,
                image: satellite_image,
                ..
            } => {
                let handle = image::Handle::from_bytes(satellite_image.as_bytes().to_vec());

                let save_button = button(text("Save image").size(14))
                    .padding([8, 16])
                    .style(app_theme::primary_button_style)
                    .on_press(OrchestratorMessage::SaveImage);

                column![
                    coordinates_line(origin),
                    self.query_input(),
                    self.place_selector(places),
                    image(handle).width(Length::Fill),
                    text("Satellite Image").size(14),
                    save_button,
                ]
                .spacing(15)
                .align_x(Alignment::Center)
                .into()
            }
            RenderOutcome::ImageryUnavailable { origin, places, .. } => column![
                coordinates_line(origin),
                self.query_input(),
                self.place_selector(places),
                text(global_constants::ERROR_IMAGE_DOWNLOAD).size(16),
            ]
            .spacing(15)
            .into(),
            RenderOutcome::Failed(error) => text(error.to_string()).size(16).into(),
        }
    }

    fn query_input(&self) -> Element<'_, OrchestratorMessage> {
        text_input("Enter search query for nearby places", &self.query)
            .on_input(OrchestratorMessage::QueryChanged)
            .padding(10)
            .size(16)
            .into()
    }

    fn place_selector(&self, places: &[Place]) -> Element<'_, OrchestratorMessage> {
        row![
            text("Select a place to view").size(16),
            pick_list(
                places.to_vec(),
                self.selected_place.clone(),
                OrchestratorMessage::PlaceSelected,
            )
            .padding(8),
        ]
        .spacing(15)
        .align_y(Alignment::Center)
        .into()
    }
}

fn coordinates_line(origin: &crate::core::models::Coordinate) -> Element<'static, OrchestratorMessage> {
    text(format!(
        "Latitude: {:?}, Longitude: {:?}",
        origin.latitude, origin.longitude
    ))
    .size(16)
    .into()
}

fn resolve_save_path(place: &Place, zoom: u8) -> anyhow::Result<PathBuf> {
    let directory = dirs::download_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine a directory to save the image"))?;

    let slug: String = place
        .name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    Ok(directory.join(format!("{}_z{}.png", slug, zoom)))
}
