use std::sync::Mutex;

use async_trait::async_trait;

use super::{AuthBackend, AuthError, LoginResponse, RegisterResponse};

/// Backend answering with canned results and recording every call.
#[derive(Debug)]
pub struct MockBackend {
    register: Result<RegisterResponse, AuthError>,
    login: Result<LoginResponse, AuthError>,
    register_calls: Mutex<Vec<(String, String)>>,
    login_calls: Mutex<Vec<(String, String)>>,
}

impl MockBackend {
    pub fn new(
        register: Result<RegisterResponse, AuthError>,
        login: Result<LoginResponse, AuthError>,
    ) -> Self {
        Self {
            register,
            login,
            register_calls: Mutex::new(Vec::new()),
            login_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding(id: u64) -> Self {
        Self::new(
            Ok(RegisterResponse { id }),
            Ok(LoginResponse {
                token: Some("token".to_string()),
            }),
        )
    }

    pub fn register_calls(&self) -> Vec<(String, String)> {
        self.register_calls.lock().unwrap().clone()
    }

    pub fn login_calls(&self) -> Vec<(String, String)> {
        self.login_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthBackend for MockBackend {
    async fn register(&self, email: &str, password: &str) -> Result<RegisterResponse, AuthError> {
        self.register_calls
            .lock()
            .unwrap()
            .push((email.to_string(), password.to_string()));
        self.register.clone()
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        self.login_calls
            .lock()
            .unwrap()
            .push((email.to_string(), password.to_string()));
        self.login.clone()
    }
}
