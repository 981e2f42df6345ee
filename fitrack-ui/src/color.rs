//! Named colors of the dark theme, darkest first.

use iced::Color;

pub const NIGHT: Color = Color::from_rgb(0.078, 0.078, 0.078);
pub const CHARCOAL: Color = Color::from_rgb(0.125, 0.125, 0.125);
pub const GRAPHITE: Color = Color::from_rgb(0.153, 0.153, 0.153);
pub const SLATE: Color = Color::from_rgb(0.259, 0.259, 0.259);
pub const ASH: Color = Color::from_rgb(0.443, 0.443, 0.443);
pub const SILVER: Color = Color::from_rgb(0.8, 0.8, 0.8);
pub const PEARL: Color = Color::from_rgb(0.902, 0.902, 0.902);
pub const WHITE: Color = Color::WHITE;

pub const TEAL: Color = Color::from_rgb(0.102, 0.737, 0.612);
pub const DEEP_TEAL: Color = Color::from_rgb(0.078, 0.561, 0.467);

pub const RED: Color = Color::from_rgb(0.886, 0.306, 0.106);
pub const RED_TINT: Color = Color::from_rgba(0.886, 0.306, 0.106, 0.15);
