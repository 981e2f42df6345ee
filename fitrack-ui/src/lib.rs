pub mod color;
pub mod component;
pub mod font;
pub mod theme;

/// iced widgets bound to the application [`theme::Theme`].
pub mod widget {
    use crate::theme::Theme;

    pub type Element<'a, M> = iced::Element<'a, M, Theme>;
    pub type Container<'a, M> = iced::widget::Container<'a, M, Theme>;
    pub type Column<'a, M> = iced::widget::Column<'a, M, Theme>;
    pub type Row<'a, M> = iced::widget::Row<'a, M, Theme>;
    pub type Button<'a, M> = iced::widget::Button<'a, M, Theme>;
    pub type Text<'a> = iced::widget::Text<'a, Theme>;
    pub type TextInput<'a, M> = iced::widget::TextInput<'a, M, Theme>;
}
