mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;


use iced::window;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting CampRecon");

    iced::application(
        app::CampReconApp::build,
        app::CampReconApp::handle_update,
        app::CampReconApp::render_view,
    )
    .title(global_constants::APPLICATION_TITLE)
    .theme(app::CampReconApp::current_theme)
    .window(window::Settings {
        size: iced::Size::new(700.0, 900.0),
        ..window::Settings::default()
    })
    .run()
}
