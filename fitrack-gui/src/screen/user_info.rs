use iced::{Alignment, Length, Task};

use fitrack_ui::{
    component::{
        separation,
        text::{bold, text, Size},
    },
    theme::{Surface, Tone},
    widget::*,
};

use crate::store::{Store, UserProfile};

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Option<UserProfile>, Option<u64>),
}

pub struct UserInfo {
    loading: bool,
    profile: Option<UserProfile>,
    user_id: Option<u64>,
}

impl UserInfo {
    pub fn new(store: Store) -> (Self, Task<Message>) {
        (
            Self {
                loading: true,
                profile: None,
                user_id: None,
            },
            Task::perform(
                async move { (store.user_profile().await, store.user_id().await) },
                |(profile, user_id)| Message::Loaded(profile, user_id),
            ),
        )
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(profile, user_id) => {
                self.loading = false;
                self.profile = profile;
                self.user_id = user_id;
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        let content = if self.loading {
            Column::new().push(text("Loading...", Size::Body).class(Tone::Muted))
        } else {
            let details = match &self.profile {
                Some(profile) => profile_details(profile),
                None => Column::new().push(
                    text("Your profile has not been set up yet.", Size::Body).class(Tone::Muted),
                ),
            };
            Column::new()
                .spacing(10)
                .push_maybe(
                    self.profile
                        .as_ref()
                        .map(|p| bold(format!("Welcome, {}", p.name), Size::Heading)),
                )
                .push_maybe(self.user_id.map(|id| {
                    text(format!("Account #{}", id), Size::Caption).class(Tone::Muted)
                }))
                .push(separation())
                .push(
                    Container::new(details)
                        .padding(15)
                        .width(Length::Fill)
                        .class(Surface::Card),
                )
        };

        Container::new(
            content
                .max_width(500)
                .width(Length::Fill)
                .align_x(Alignment::Start),
        )
        .padding(50)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}

fn profile_details<'a>(profile: &UserProfile) -> Column<'a, Message> {
    [
        ("Sex", profile.sex.to_string()),
        ("Age", profile.age.to_string()),
        ("Height", format!("{} cm", profile.height)),
        ("Weight", format!("{} kg", profile.weight)),
        ("Activity", profile.activity.to_string()),
        ("Goal", profile.goal.to_string()),
        ("Target", format!("{} kg", profile.target)),
    ]
    .into_iter()
    .fold(Column::new().spacing(5), |col, (label, value)| {
        col.push(
            Row::new()
                .push(
                    text(label, Size::Body)
                        .class(Tone::Muted)
                        .width(Length::Fixed(120.0)),
                )
                .push(bold(value, Size::Body)),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::mock::MockBackend;
    use std::sync::Arc;

    #[test]
    fn shows_loaded_profile() {
        let store = Store::new(Arc::new(MockBackend::succeeding(1)));
        let (mut screen, _) = UserInfo::new(store);
        assert!(screen.profile().is_none());

        let _ = screen.update(Message::Loaded(
            Some(UserProfile::placeholder("Ana")),
            Some(42),
        ));
        assert_eq!(screen.profile().map(|p| p.name.as_str()), Some("Ana"));
        assert_eq!(screen.user_id, Some(42));
    }
}
