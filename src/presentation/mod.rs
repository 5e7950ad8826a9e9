pub mod app_theme;
