use iced::widget::button::{Catalog, Status, Style};
use iced::{Background, Border, Color};

use super::Theme;

/// What a button does, which decides how loud it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// The one action a screen is about, such as submitting a form.
    #[default]
    Primary,
    /// Text-only navigation to another screen.
    Link,
    /// Borderless control next to a field, like the password visibility toggle.
    Toggle,
}

impl Catalog for Theme {
    type Class<'a> = Action;

    fn default<'a>() -> Self::Class<'a> {
        Action::Primary
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        let p = &self.palette;
        match class {
            Action::Primary => {
                let fill = match status {
                    Status::Active => p.accent,
                    Status::Hovered | Status::Pressed => p.accent_strong,
                    Status::Disabled => p.disabled,
                };
                let text_color = if status == Status::Disabled {
                    Color { a: 0.2, ..p.muted }
                } else {
                    p.background
                };
                Style {
                    background: Some(Background::Color(fill)),
                    text_color,
                    border: Border {
                        radius: 20.0.into(),
                        width: 1.0,
                        color: fill,
                    },
                    ..Style::default()
                }
            }
            Action::Link | Action::Toggle => {
                let (resting, hovered) = if *class == Action::Link {
                    (p.muted, p.accent)
                } else {
                    (p.faint, p.text)
                };
                Style {
                    background: None,
                    text_color: if status == Status::Hovered {
                        hovered
                    } else {
                        resting
                    },
                    ..Style::default()
                }
            }
        }
    }
}
