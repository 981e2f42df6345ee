use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Information about an unsuccessful response.
#[derive(Debug, Clone)]
pub struct NotSuccessResponseInfo {
    pub status_code: u16,
    pub body: serde_json::Value,
}

impl NotSuccessResponseInfo {
    /// The `message` field the server puts in its error bodies, if any.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(serde_json::Value::as_str)
    }
}

#[derive(Debug)]
pub enum ResponseError {
    /// Reading the body failed, or it was not JSON.
    Reqwest(reqwest::Error),
    /// The body was JSON but did not have the expected shape.
    Decode(serde_json::Error),
    NotSuccess(NotSuccessResponseInfo),
}

#[async_trait]
pub trait ResponseExt {
    /// Parses the body as JSON whatever the status, then fails with the parsed body if the
    /// status is not a success.
    async fn json_checked<T: DeserializeOwned + Send>(self) -> Result<T, ResponseError>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn json_checked<T: DeserializeOwned + Send>(self) -> Result<T, ResponseError> {
        let status = self.status();
        let body: serde_json::Value = self.json().await.map_err(ResponseError::Reqwest)?;
        if !status.is_success() {
            return Err(ResponseError::NotSuccess(NotSuccessResponseInfo {
                status_code: status.as_u16(),
                body,
            }));
        }
        serde_json::from_value(body).map_err(ResponseError::Decode)
    }
}
