use std::sync::Arc;

use iced::{Alignment, Length, Task};
use tracing::{debug, info, warn};

use fitrack_ui::{
    component::{
        button, form, notification,
        text::{bold, text, Size},
    },
    theme::Tone,
    widget::*,
};

use super::ScreenId;
use crate::{
    services::auth::{AuthBackend, AuthError},
    store::Store,
};

const SUBTITLE: &str =
    "We are pretty sure you will use this thing to become better and better every day";

/// Fields captured from the sign-up screen when a submission starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    Registered(ScreenId, Result<(), AuthError>),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    NameEdited(String),
    EmailEdited(String),
    PasswordEdited(String),
    TogglePasswordVisibility,
    Register,
    // redirect to the login screen, handled by the upper level.
    SignIn,
}

pub struct SignUp {
    id: ScreenId,
    backend: Arc<dyn AuthBackend>,
    store: Store,

    form: RegistrationForm,

    hide_password: bool,
    processing: bool,
    error: Option<String>,
}

impl SignUp {
    pub fn new(backend: Arc<dyn AuthBackend>, store: Store) -> Self {
        Self {
            id: ScreenId::fresh(),
            backend,
            store,
            form: RegistrationForm::default(),
            hide_password: true,
            processing: false,
            error: None,
        }
    }

    pub fn id(&self) -> ScreenId {
        self.id
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn hide_password(&self) -> bool {
        self.hide_password
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::NameEdited(value)) => self.form.name = value,
            Message::View(ViewMessage::EmailEdited(value)) => self.form.email = value,
            Message::View(ViewMessage::PasswordEdited(value)) => self.form.password = value,
            Message::View(ViewMessage::TogglePasswordVisibility) => {
                self.hide_password = !self.hide_password;
            }
            Message::View(ViewMessage::Register) => {
                if self.processing {
                    debug!("Registration already in progress, ignoring submission");
                    return Task::none();
                }
                self.error = None;
                self.processing = true;
                let id = self.id;
                info!("Registering account for {}", self.form.email);
                return Task::perform(
                    register_user(self.backend.clone(), self.store.clone(), self.form.clone()),
                    move |res| Message::Registered(id, res),
                );
            }
            Message::Registered(id, _) if id != self.id => {
                debug!("Ignoring the result of a submission from a previous screen");
            }
            Message::Registered(_, res) => {
                self.processing = false;
                // Message::Registered(Ok) also moves the upper level to the next screen.
                if let Err(e) = res {
                    warn!("Registration failed: {}", e);
                    self.error = Some(e.to_string());
                }
            }
            Message::View(ViewMessage::SignIn) => {}
        }
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        let password = Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(
                form::input("Password", &self.form.password, ViewMessage::PasswordEdited)
                    .secure(self.hide_password)
                    .on_submit(ViewMessage::Register),
            )
            .push(
                button::toggle(if self.hide_password { "Show" } else { "Hide" })
                    .on_press(ViewMessage::TogglePasswordVisibility),
            );

        let content = Column::new()
            .spacing(20)
            .align_x(Alignment::Center)
            .max_width(500)
            .width(Length::Fill)
            .push(bold("Sign up\n and jump right in", Size::Title).align_x(Alignment::Center))
            .push(
                text(SUBTITLE, Size::Body)
                    .class(Tone::Muted)
                    .align_x(Alignment::Center),
            )
            .push(form::input("Name", &self.form.name, ViewMessage::NameEdited))
            .push(form::input("Email", &self.form.email, ViewMessage::EmailEdited))
            .push(password)
            .push_maybe(self.error.as_deref().map(notification::error))
            .push(
                button::primary("Register")
                    .width(Length::Fill)
                    .on_press_maybe((!self.processing).then_some(ViewMessage::Register)),
            )
            .push(
                button::link("Got an account? Sign In!")
                    .width(Length::Fill)
                    .on_press(ViewMessage::SignIn),
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

/// Creates the account, then sets up the local profile and session.
///
/// Steps run in order and each waits for the previous one. A failing login still leaves the
/// profile and user id in the store.
pub async fn register_user(
    backend: Arc<dyn AuthBackend>,
    store: Store,
    form: RegistrationForm,
) -> Result<(), AuthError> {
    let response = backend.register(&form.email, &form.password).await?;
    info!("Account {} created", response.id);

    store.create_default_profile(&form.name).await;
    store.set_user_id(response.id).await;
    store.login(&form.email, &form.password).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{ApiConfig, Endpoints},
        services::auth::{mock::MockBackend, AuthClient, LoginResponse, RegisterResponse},
        store::UserProfile,
    };
    use httpmock::prelude::*;
    use serde_json::json;

    fn form() -> RegistrationForm {
        RegistrationForm {
            name: "Ana".to_string(),
            email: "a@b.com".to_string(),
            password: "pw".to_string(),
        }
    }

    fn screen(backend: Arc<MockBackend>) -> SignUp {
        let store = Store::new(backend.clone());
        SignUp::new(backend, store)
    }

    #[tokio::test]
    async fn successful_registration_sets_up_profile_and_session() {
        let backend = Arc::new(MockBackend::succeeding(42));
        let store = Store::new(backend.clone());

        register_user(backend.clone(), store.clone(), form())
            .await
            .unwrap();

        let profile = store.user_profile().await.unwrap();
        assert_eq!(profile, UserProfile::placeholder("Ana"));
        assert_eq!(profile.user_id, 0);
        assert_eq!(store.user_id().await, Some(42));
        assert!(store.session().await.is_some());
        assert_eq!(
            backend.register_calls(),
            vec![("a@b.com".to_string(), "pw".to_string())]
        );
        assert_eq!(
            backend.login_calls(),
            vec![("a@b.com".to_string(), "pw".to_string())]
        );
    }

    #[tokio::test]
    async fn rejected_registration_leaves_store_untouched() {
        let backend = Arc::new(MockBackend::new(
            Err(AuthError::Server {
                status: 409,
                message: Some("Email taken".to_string()),
            }),
            Ok(LoginResponse::default()),
        ));
        let store = Store::new(backend.clone());

        let error = register_user(backend.clone(), store.clone(), form())
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "Email taken");
        assert_eq!(store.user_profile().await, None);
        assert_eq!(store.user_id().await, None);
        assert!(backend.login_calls().is_empty());
    }

    #[tokio::test]
    async fn failed_login_keeps_profile_and_user_id() {
        let backend = Arc::new(MockBackend::new(
            Ok(RegisterResponse { id: 42 }),
            Err(AuthError::Transport("Network request failed".to_string())),
        ));
        let store = Store::new(backend.clone());

        let error = register_user(backend.clone(), store.clone(), form())
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "Network request failed");
        assert_eq!(
            store.user_profile().await,
            Some(UserProfile::placeholder("Ana"))
        );
        assert_eq!(store.user_id().await, Some(42));
        assert_eq!(store.session().await, None);
    }

    #[tokio::test]
    async fn empty_name_is_not_an_error() {
        let backend = Arc::new(MockBackend::succeeding(3));
        let store = Store::new(backend.clone());

        register_user(
            backend,
            store.clone(),
            RegistrationForm {
                name: String::new(),
                ..form()
            },
        )
        .await
        .unwrap();

        assert_eq!(store.user_profile().await.unwrap().name, "");
    }

    #[tokio::test]
    async fn name_never_reaches_the_server() {
        for name in ["Ana", ""] {
            let server = MockServer::start_async().await;
            let register = server
                .mock_async(|when, then| {
                    when.method(POST)
                        .path("/auth/register")
                        .json_body(json!({ "email": "a@b.com", "password": "pw" }));
                    then.status(201).json_body(json!({ "id": 42 }));
                })
                .await;
            let login = server
                .mock_async(|when, then| {
                    when.method(POST)
                        .path("/auth/login")
                        .json_body(json!({ "email": "a@b.com", "password": "pw" }));
                    then.status(200).json_body(json!({ "token": "abc" }));
                })
                .await;

            let backend: Arc<dyn AuthBackend> = Arc::new(AuthClient::new(&ApiConfig {
                base_url: server.base_url(),
                endpoints: Endpoints::default(),
            }));
            let store = Store::new(backend.clone());
            let form = RegistrationForm {
                name: name.to_string(),
                ..form()
            };

            register_user(backend, store.clone(), form).await.unwrap();

            register.assert_async().await;
            login.assert_async().await;
            assert_eq!(store.user_profile().await.unwrap().name, name);
        }
    }

    #[test]
    fn edits_fill_the_form_as_typed() {
        let mut screen = screen(Arc::new(MockBackend::succeeding(1)));
        let _ = screen.update(Message::View(ViewMessage::NameEdited(" Ana ".to_string())));
        let _ = screen.update(Message::View(ViewMessage::EmailEdited(
            "a@b.com ".to_string(),
        )));
        let _ = screen.update(Message::View(ViewMessage::PasswordEdited("pw".to_string())));
        assert_eq!(
            screen.form(),
            &RegistrationForm {
                name: " Ana ".to_string(),
                email: "a@b.com ".to_string(),
                password: "pw".to_string(),
            }
        );
    }

    #[test]
    fn failures_are_shown_verbatim() {
        let mut screen = screen(Arc::new(MockBackend::succeeding(1)));
        let id = screen.id();

        let _ = screen.update(Message::View(ViewMessage::Register));
        let _ = screen.update(Message::Registered(
            id,
            Err(AuthError::Server {
                status: 409,
                message: Some("Email taken".to_string()),
            }),
        ));
        assert_eq!(screen.error(), Some("Email taken"));

        let _ = screen.update(Message::View(ViewMessage::Register));
        let _ = screen.update(Message::Registered(
            id,
            Err(AuthError::Transport("Network request failed".to_string())),
        ));
        assert_eq!(screen.error(), Some("Network request failed"));
    }

    #[test]
    fn submission_clears_previous_error() {
        let mut screen = screen(Arc::new(MockBackend::succeeding(1)));
        let id = screen.id();
        let _ = screen.update(Message::Registered(
            id,
            Err(AuthError::Transport("Network request failed".to_string())),
        ));
        assert!(screen.error().is_some());

        let _ = screen.update(Message::View(ViewMessage::Register));
        assert_eq!(screen.error(), None);
        assert!(screen.is_processing());

        let _ = screen.update(Message::Registered(id, Ok(())));
        assert_eq!(screen.error(), None);
        assert!(!screen.is_processing());
    }

    #[test]
    fn submission_in_flight_ignores_new_presses() {
        let mut screen = screen(Arc::new(MockBackend::succeeding(1)));
        let _ = screen.update(Message::View(ViewMessage::Register));
        assert!(screen.is_processing());

        // An error arriving from elsewhere is not cleared by an ignored press.
        screen.error = Some("stale".to_string());
        let _ = screen.update(Message::View(ViewMessage::Register));
        assert_eq!(screen.error(), Some("stale"));
        assert!(screen.is_processing());
    }

    #[test]
    fn results_of_another_screen_are_ignored() {
        let backend = Arc::new(MockBackend::succeeding(1));
        let previous = screen(backend.clone());
        let mut current = screen(backend);
        assert_ne!(previous.id(), current.id());

        let _ = current.update(Message::View(ViewMessage::Register));
        let _ = current.update(Message::Registered(
            previous.id(),
            Err(AuthError::Transport("Network request failed".to_string())),
        ));

        assert_eq!(current.error(), None);
        assert!(current.is_processing());
    }

    #[test]
    fn toggling_visibility_twice_restores_mask() {
        let mut screen = screen(Arc::new(MockBackend::succeeding(1)));
        let _ = screen.update(Message::View(ViewMessage::PasswordEdited("pw".to_string())));
        assert!(screen.hide_password());

        let _ = screen.update(Message::View(ViewMessage::TogglePasswordVisibility));
        assert!(!screen.hide_password());
        let _ = screen.update(Message::View(ViewMessage::TogglePasswordVisibility));
        assert!(screen.hide_password());

        assert_eq!(screen.form().password, "pw");
    }
}
