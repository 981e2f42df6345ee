//! Session-wide state shared between screens.
//!
//! The [`Store`] is a cheap handle: every screen holding a clone sees the same profile, user id
//! and session. It is handed to screens when they are created.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::services::auth::{AuthBackend, AuthError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    LoseWeight,
    MaintainWeight,
    GainWeight,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => write!(f, "Female"),
            Self::Male => write!(f, "Male"),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoseWeight => write!(f, "Lose weight"),
            Self::MaintainWeight => write!(f, "Maintain weight"),
            Self::GainWeight => write!(f, "Gain weight"),
        }
    }
}

/// Fitness attributes of a user, distinct from their credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub sex: Sex,
    pub height: u32,
    pub weight: u32,
    pub age: u32,
    pub activity: ActivityLevel,
    pub goal: Goal,
    pub target: u32,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

impl UserProfile {
    /// Profile of a freshly registered user: only the name is known, the rest is filled in
    /// during onboarding.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sex: Sex::Female,
            height: 0,
            weight: 0,
            age: 0,
            activity: ActivityLevel::Low,
            goal: Goal::LoseWeight,
            target: 0,
            user_id: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub token: Option<String>,
}

#[derive(Debug, Default)]
struct State {
    user_profile: Option<UserProfile>,
    user_id: Option<u64>,
    session: Option<Session>,
}

#[derive(Debug, Clone)]
pub struct Store {
    backend: Arc<dyn AuthBackend>,
    state: Arc<RwLock<State>>,
}

impl Store {
    pub fn new(backend: Arc<dyn AuthBackend>) -> Self {
        Self {
            backend,
            state: Arc::new(RwLock::new(State::default())),
        }
    }

    pub async fn create_default_profile(&self, name: &str) {
        self.set_user_profile(UserProfile::placeholder(name)).await;
    }

    pub async fn set_user_profile(&self, profile: UserProfile) {
        self.state.write().await.user_profile = Some(profile);
    }

    pub async fn user_profile(&self) -> Option<UserProfile> {
        self.state.read().await.user_profile.clone()
    }

    pub async fn set_user_id(&self, id: u64) {
        self.state.write().await.user_id = Some(id);
    }

    pub async fn user_id(&self) -> Option<u64> {
        self.state.read().await.user_id
    }

    pub async fn session(&self) -> Option<Session> {
        self.state.read().await.session.clone()
    }

    /// Authenticates against the account service and keeps the resulting session.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let response = self.backend.login(email, password).await?;
        self.state.write().await.session = Some(Session {
            email: email.to_string(),
            token: response.token,
        });
        tracing::info!("Session established for {}", email);
        Ok(())
    }
}
