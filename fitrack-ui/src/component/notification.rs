use iced::Length;

use super::text::{text, Size};
use crate::{
    theme::{Surface, Tone},
    widget::*,
};

/// Banner showing an error message verbatim.
pub fn error<'a, M: 'a>(message: &str) -> Container<'a, M> {
    Container::new(text(message, Size::Small).class(Tone::Danger))
        .padding(10)
        .width(Length::Fill)
        .class(Surface::Alert)
}
