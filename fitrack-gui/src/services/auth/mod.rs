pub mod client;
#[cfg(test)]
pub(crate) mod mock;

pub use client::*;

use std::fmt::Debug;

use async_trait::async_trait;

use super::http::{NotSuccessResponseInfo, ResponseError};

/// Account service the screens and the store talk to.
#[async_trait]
pub trait AuthBackend: Debug + Send + Sync {
    async fn register(&self, email: &str, password: &str) -> Result<RegisterResponse, AuthError>;
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The server answered with a non-success status.
    Server {
        status: u16,
        message: Option<String>,
    },
    /// The request did not complete.
    Transport(String),
    /// The response body could not be decoded.
    Parse(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } => write!(f, "{}", message),
            Self::Server {
                status,
                message: None,
            } => write!(f, "Request failed with status {}", status),
            Self::Transport(e) => write!(f, "{}", e),
            Self::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Parse(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}

impl From<NotSuccessResponseInfo> for AuthError {
    fn from(info: NotSuccessResponseInfo) -> Self {
        Self::Server {
            status: info.status_code,
            message: info.message().map(str::to_string),
        }
    }
}

impl From<ResponseError> for AuthError {
    fn from(error: ResponseError) -> Self {
        match error {
            ResponseError::Reqwest(e) => e.into(),
            ResponseError::Decode(e) => Self::Parse(e.to_string()),
            ResponseError::NotSuccess(info) => info.into(),
        }
    }
}
