//! The application theme.
//!
//! Widgets pick their look through small style enums ([`Action`], [`Tone`], [`Surface`]) passed
//! with `.class(..)`; every enum resolves its colors from the single [`Palette`] below.

mod button;
mod container;
mod text;
mod text_input;

pub use button::Action;
pub use container::Surface;
pub use text::Tone;

use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    /// Window background.
    pub background: iced::Color,
    /// Cards and disabled fields.
    pub surface: iced::Color,
    pub divider: iced::Color,
    pub field: iced::Color,
    pub text: iced::Color,
    pub muted: iced::Color,
    pub faint: iced::Color,
    pub accent: iced::Color,
    pub accent_strong: iced::Color,
    pub disabled: iced::Color,
    pub danger: iced::Color,
    pub danger_tint: iced::Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: color::NIGHT,
            surface: color::CHARCOAL,
            divider: color::GRAPHITE,
            field: color::GRAPHITE,
            text: color::WHITE,
            muted: color::SILVER,
            faint: color::ASH,
            accent: color::TEAL,
            accent_strong: color::DEEP_TEAL,
            disabled: color::SLATE,
            danger: color::RED,
            danger_tint: color::RED_TINT,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Theme {
    pub palette: Palette,
}

impl iced::application::DefaultStyle for Theme {
    fn default_style(&self) -> iced::application::Appearance {
        iced::application::Appearance {
            background_color: self.palette.background,
            text_color: self.palette.text,
        }
    }
}
