pub mod login;
pub mod signup;
pub mod user_info;

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

/// Screens the application can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignUp,
    Login,
    UserInfo,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignUp => write!(f, "sign up"),
            Self::Login => write!(f, "login"),
            Self::UserInfo => write!(f, "user info"),
        }
    }
}

/// Identity of one screen instance.
///
/// Background results carry the id of the screen that started them, so a screen opened later
/// can tell them apart from its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenId(u64);

impl ScreenId {
    pub fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}
