use async_trait::async_trait;
use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::{
    config::{ApiConfig, Endpoints},
    services::http::ResponseExt,
};

use super::{AuthBackend, AuthError};

/// Body of the registration request. The display name is not part of it.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Success body of the registration endpoint.
///
/// `id` must be an unsigned integer: a success body where it is missing or of another JSON type
/// is reported as [`AuthError::Parse`] and nothing is written to the store. Other fields are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: u64,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    endpoints: Endpoints,
}

impl AuthClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            endpoints: config.endpoints.clone(),
        }
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, AuthError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        Ok(response)
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, AuthError> {
        let request = RegisterRequest { email, password };
        let response = self
            .post_json(&self.endpoints.register, &request)
            .await?
            .json_checked()
            .await?;
        Ok(response)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let request = LoginRequest { email, password };
        let response = self
            .post_json(&self.endpoints.login, &request)
            .await?
            .json_checked()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl AuthBackend for AuthClient {
    async fn register(&self, email: &str, password: &str) -> Result<RegisterResponse, AuthError> {
        AuthClient::register(self, email, password).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        AuthClient::login(self, email, password).await
    }
}
