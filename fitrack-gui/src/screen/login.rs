use iced::{Alignment, Length, Task};
use tracing::{debug, info, warn};

use fitrack_ui::{
    component::{
        button, form, notification,
        text::{bold, Size},
    },
    widget::*,
};

use super::ScreenId;
use crate::{services::auth::AuthError, store::Store};

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    LoggedIn(ScreenId, Result<(), AuthError>),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    EmailEdited(String),
    PasswordEdited(String),
    TogglePasswordVisibility,
    SignIn,
    // redirect to the sign up screen, handled by the upper level.
    SignUp,
}

pub struct Login {
    id: ScreenId,
    store: Store,

    email: String,
    password: String,

    hide_password: bool,
    processing: bool,
    error: Option<String>,
}

impl Login {
    pub fn new(store: Store) -> Self {
        Self {
            id: ScreenId::fresh(),
            store,
            email: String::new(),
            password: String::new(),
            hide_password: true,
            processing: false,
            error: None,
        }
    }

    pub fn id(&self) -> ScreenId {
        self.id
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::EmailEdited(value)) => self.email = value,
            Message::View(ViewMessage::PasswordEdited(value)) => self.password = value,
            Message::View(ViewMessage::TogglePasswordVisibility) => {
                self.hide_password = !self.hide_password;
            }
            Message::View(ViewMessage::SignIn) => {
                if self.processing {
                    return Task::none();
                }
                self.error = None;
                self.processing = true;
                let (id, store) = (self.id, self.store.clone());
                let (email, password) = (self.email.clone(), self.password.clone());
                info!("Signing in {}", email);
                return Task::perform(
                    async move { store.login(&email, &password).await },
                    move |res| Message::LoggedIn(id, res),
                );
            }
            Message::LoggedIn(id, _) if id != self.id => {
                debug!("Ignoring the result of a login from a previous screen");
            }
            Message::LoggedIn(_, res) => {
                self.processing = false;
                // Message::LoggedIn(Ok) is handled by the upper level.
                if let Err(e) = res {
                    warn!("Login failed: {}", e);
                    self.error = Some(e.to_string());
                }
            }
            Message::View(ViewMessage::SignUp) => {}
        }
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        let content = Column::new()
            .spacing(20)
            .align_x(Alignment::Center)
            .max_width(500)
            .width(Length::Fill)
            .push(bold("Welcome back", Size::Title))
            .push(form::input("Email", &self.email, ViewMessage::EmailEdited))
            .push(
                Row::new()
                    .spacing(10)
                    .align_y(Alignment::Center)
                    .push(
                        form::input("Password", &self.password, ViewMessage::PasswordEdited)
                            .secure(self.hide_password)
                            .on_submit(ViewMessage::SignIn),
                    )
                    .push(
                        button::toggle(if self.hide_password { "Show" } else { "Hide" })
                            .on_press(ViewMessage::TogglePasswordVisibility),
                    ),
            )
            .push_maybe(self.error.as_deref().map(notification::error))
            .push(
                button::primary("Sign In")
                    .width(Length::Fill)
                    .on_press_maybe((!self.processing).then_some(ViewMessage::SignIn)),
            )
            .push(
                button::link("Don't have an account? Sign up")
                    .width(Length::Fill)
                    .on_press(ViewMessage::SignUp),
            );

        Element::from(
            Container::new(content)
                .padding(50)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .map(Message::View)
    }
}
