pub mod button;
pub mod form;
pub mod notification;
pub mod text;

use iced::Length;

use crate::{theme::Surface, widget::*};

pub fn separation<'a, M: 'a>() -> Container<'a, M> {
    Container::new(Column::new())
        .height(Length::Fixed(1.0))
        .width(Length::Fill)
        .class(Surface::Divider)
}
