use iced::widget::container::{Catalog, Style};
use iced::{Background, Border, Color};

use super::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surface {
    #[default]
    Transparent,
    /// Fills the whole window.
    Window,
    /// One pixel rule between sections.
    Divider,
    Card,
    /// Error banner.
    Alert,
}

impl Catalog for Theme {
    type Class<'a> = Surface;

    fn default<'a>() -> Self::Class<'a> {
        Surface::Transparent
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        let p = &self.palette;
        let filled = |fill: Color| Style {
            background: Some(Background::Color(fill)),
            ..Style::default()
        };
        let framed = |fill: Color, edge: Color| Style {
            background: Some(Background::Color(fill)),
            border: Border {
                radius: 5.0.into(),
                width: 1.0,
                color: edge,
            },
            ..Style::default()
        };
        match class {
            Surface::Transparent => Style::default(),
            Surface::Window => filled(p.background),
            Surface::Divider => filled(p.divider),
            Surface::Card => framed(p.surface, p.divider),
            Surface::Alert => Style {
                text_color: Some(p.danger),
                ..framed(p.danger_tint, p.danger)
            },
        }
    }
}
