use iced::widget::text_input::{Catalog, Status, Style};
use iced::{Background, Border};

use super::Theme;

// All fields of the app look the same, so there is no class to pick from.
impl Catalog for Theme {
    type Class<'a> = ();

    fn default<'a>() -> Self::Class<'a> {}

    fn style(&self, _class: &Self::Class<'_>, status: Status) -> Style {
        let p = &self.palette;
        let (background, value, border) = match status {
            Status::Active | Status::Hovered => (p.field, p.muted, p.field),
            Status::Focused { .. } => (p.field, p.text, p.accent),
            Status::Disabled => (p.surface, p.faint, p.surface),
        };
        Style {
            background: Background::Color(background),
            border: Border {
                radius: 5.0.into(),
                width: 1.0,
                color: border,
            },
            icon: p.faint,
            placeholder: p.faint,
            value,
            selection: p.accent,
        }
    }
}
