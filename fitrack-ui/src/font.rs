use iced::{font::Weight, Font};

const fn sans(weight: Weight) -> Font {
    Font {
        weight,
        ..Font::DEFAULT
    }
}

pub const REGULAR: Font = sans(Weight::Normal);
pub const MEDIUM: Font = sans(Weight::Medium);
pub const BOLD: Font = sans(Weight::Bold);
