use std::fmt::Display;

use iced::{advanced::text::Shaping, Font};

use crate::{font, widget::Text};

/// Type scale of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Title,
    Heading,
    Body,
    Small,
    Caption,
}

impl Size {
    pub const fn px(self) -> u16 {
        match self {
            Size::Title => 29,
            Size::Heading => 24,
            Size::Body => 16,
            Size::Small => 14,
            Size::Caption => 12,
        }
    }
}

pub fn styled<'a>(content: impl Display, size: Size, font: Font) -> Text<'a> {
    iced::widget::text(content.to_string())
        .shaping(Shaping::Advanced)
        .font(font)
        .size(size.px())
}

pub fn text<'a>(content: impl Display, size: Size) -> Text<'a> {
    styled(content, size, font::REGULAR)
}

pub fn bold<'a>(content: impl Display, size: Size) -> Text<'a> {
    styled(content, size, font::BOLD)
}
