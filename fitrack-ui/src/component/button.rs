use iced::Length;

use super::text::{styled, text, Size};
use crate::{font, theme::Action, widget::*};

pub fn primary<'a, M: 'a>(label: &str) -> Button<'a, M> {
    Button::new(
        Container::new(styled(label, Size::Body, font::MEDIUM))
            .center_x(Length::Fill)
            .padding(5),
    )
    .class(Action::Primary)
}

pub fn link<'a, M: 'a>(label: &str) -> Button<'a, M> {
    Button::new(Container::new(text(label, Size::Body)).center_x(Length::Fill))
        .class(Action::Link)
}

pub fn toggle<'a, M: 'a>(label: &str) -> Button<'a, M> {
    Button::new(text(label, Size::Small))
        .padding(5)
        .class(Action::Toggle)
}
