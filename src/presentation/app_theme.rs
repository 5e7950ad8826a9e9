use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::core::models::ThemeMode;

pub fn get_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.07, 0.09, 0.07),
                text: Color::from_rgb(0.92, 0.94, 0.9),
                primary: Color::from_rgb(0.35, 0.65, 0.4),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.96, 0.93),
                text: Color::from_rgb(0.1, 0.12, 0.1),
                primary: Color::from_rgb(0.15, 0.45, 0.25),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.098, 0.529, 0.329))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.098, 0.529, 0.329),
                width: 2.0,
                radius: 12.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 8.0,
            },
            snap: false,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.122, 0.655, 0.408))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.122, 0.655, 0.408),
                width: 2.0,
                radius: 12.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 8.0,
            },
            snap: false,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.078, 0.42, 0.26))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.078, 0.42, 0.26),
                width: 2.0,
                radius: 12.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.5, 0.5, 0.5))),
            text_color: Color::from_rgba(1.0, 1.0, 1.0, 0.6),
            border: Border {
                color: Color::from_rgb(0.5, 0.5, 0.5),
                width: 2.0,
                radius: 12.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
    }
}
