use super::text::Size;
use crate::widget::TextInput;

/// Single-line text field. The value is passed through exactly as typed.
pub fn input<'a, M: Clone + 'a>(
    placeholder: &str,
    value: &str,
    on_change: impl Fn(String) -> M + 'a,
) -> TextInput<'a, M> {
    TextInput::new(placeholder, value)
        .on_input(on_change)
        .size(Size::Body.px())
        .padding(10)
}
