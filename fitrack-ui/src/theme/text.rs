use iced::widget::text::{Catalog, Style};

use super::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Inherits the window text color.
    #[default]
    Normal,
    Muted,
    Danger,
}

impl Catalog for Theme {
    type Class<'a> = Tone;

    fn default<'a>() -> Self::Class<'a> {
        Tone::Normal
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        let color = match class {
            Tone::Normal => None,
            Tone::Muted => Some(self.palette.muted),
            Tone::Danger => Some(self.palette.danger),
        };
        Style { color }
    }
}
