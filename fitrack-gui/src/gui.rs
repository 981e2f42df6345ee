use std::sync::Arc;

use iced::{Length, Task};
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;

use fitrack_ui::{theme::Surface, widget::*};

use crate::{
    config::{Config as FileConfig, ConfigError},
    dir::FitrackDirectory,
    logger::setup_logger,
    screen::{
        login::{self, Login},
        signup::{self, SignUp},
        user_info::{self, UserInfo},
        Route,
    },
    services::auth::{AuthBackend, AuthClient},
    store::Store,
    VERSION,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub fitrack_directory: FitrackDirectory,
}

impl Config {
    pub fn new(fitrack_directory: FitrackDirectory) -> Self {
        Self { fitrack_directory }
    }
}

pub enum State {
    SignUp(Box<SignUp>),
    Login(Box<Login>),
    UserInfo(Box<UserInfo>),
}

#[derive(Debug, Clone)]
pub enum Message {
    CtrlC,
    SignUp(signup::Message),
    Login(login::Message),
    UserInfo(user_info::Message),
}

pub struct GUI {
    backend: Arc<dyn AuthBackend>,
    store: Store,
    state: State,
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

fn load_config(directory: &FitrackDirectory) -> Result<FileConfig, ConfigError> {
    if !directory.exists() {
        directory
            .init()
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;
    }
    FileConfig::load_or_create(&directory.config_file())
}

impl GUI {
    pub fn title(&self) -> String {
        format!("Fitrack v{}", VERSION)
    }

    pub fn new((config, log_level): (Config, Option<LevelFilter>)) -> (GUI, Task<Message>) {
        let config_path = config.fitrack_directory.config_file();
        let first_run = !config_path.exists();
        let loaded = load_config(&config.fitrack_directory);
        let file_config = loaded.clone().unwrap_or_default();

        let log_level = log_level
            .or_else(|| file_config.log_level().ok())
            .unwrap_or(LevelFilter::INFO);
        if let Err(e) = setup_logger(log_level, &config.fitrack_directory) {
            eprintln!("Error while setting up logger: {}", e);
        }

        // Loading happens before logs can be written, report it now.
        match loaded {
            Ok(_) if first_run => info!("Wrote default configuration to {}", config_path.display()),
            Ok(_) => info!("Loaded configuration from {}", config_path.display()),
            Err(e) => warn!("Failed to load configuration, using defaults: {}", e),
        }
        info!("Using account service at {}", file_config.api.base_url);

        let backend: Arc<dyn AuthBackend> = Arc::new(AuthClient::new(&file_config.api));
        let (gui, task) = Self::start(backend);
        (
            gui,
            Task::batch(vec![Task::perform(ctrl_c(), |_| Message::CtrlC), task]),
        )
    }

    /// Opens the sign up screen with a fresh store.
    pub fn start(backend: Arc<dyn AuthBackend>) -> (GUI, Task<Message>) {
        let store = Store::new(backend.clone());
        (
            Self {
                state: State::SignUp(Box::new(SignUp::new(backend.clone(), store.clone()))),
                backend,
                store,
            },
            Task::none(),
        )
    }

    pub fn route(&self) -> Route {
        match self.state {
            State::SignUp(_) => Route::SignUp,
            State::Login(_) => Route::Login,
            State::UserInfo(_) => Route::UserInfo,
        }
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        info!("Navigating to {}", route);
        match route {
            Route::SignUp => {
                let screen = SignUp::new(self.backend.clone(), self.store.clone());
                self.state = State::SignUp(Box::new(screen));
                Task::none()
            }
            Route::Login => {
                self.state = State::Login(Box::new(Login::new(self.store.clone())));
                Task::none()
            }
            Route::UserInfo => {
                let (screen, task) = UserInfo::new(self.store.clone());
                self.state = State::UserInfo(Box::new(screen));
                task.map(Message::UserInfo)
            }
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match (&mut self.state, message) {
            (_, Message::CtrlC) => iced::exit(),
            // Once either flow succeeds the account and session exist, whichever screen
            // started it and whichever screen is displayed now.
            (State::UserInfo(_), Message::SignUp(signup::Message::Registered(_, Ok(()))))
            | (State::UserInfo(_), Message::Login(login::Message::LoggedIn(_, Ok(())))) => {
                Task::none()
            }
            (_, Message::SignUp(signup::Message::Registered(_, Ok(()))))
            | (_, Message::Login(login::Message::LoggedIn(_, Ok(())))) => {
                self.navigate(Route::UserInfo)
            }
            (
                State::SignUp(_),
                Message::SignUp(signup::Message::View(signup::ViewMessage::SignIn)),
            ) => self.navigate(Route::Login),
            (
                State::Login(_),
                Message::Login(login::Message::View(login::ViewMessage::SignUp)),
            ) => self.navigate(Route::SignUp),
            (State::SignUp(s), Message::SignUp(msg)) => s.update(msg).map(Message::SignUp),
            (State::Login(l), Message::Login(msg)) => l.update(msg).map(Message::Login),
            (State::UserInfo(u), Message::UserInfo(msg)) => u.update(msg).map(Message::UserInfo),
            // Failures of a screen that is no longer displayed.
            _ => Task::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        let content = match &self.state {
            State::SignUp(s) => s.view().map(Message::SignUp),
            State::Login(l) => l.view().map(Message::Login),
            State::UserInfo(u) => u.view().map(Message::UserInfo),
        };
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .class(Surface::Window)
            .into()
    }
}
