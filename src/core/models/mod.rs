mod coordinate;
mod place;
mod satellite_image;
mod scout_error;
mod theme_mode;

pub use coordinate::Coordinate;
pub use place::Place;
pub use satellite_image::SatelliteImage;
pub use scout_error::ScoutError;
pub use theme_mode::ThemeMode;
