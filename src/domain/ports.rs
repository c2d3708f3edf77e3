use crate::utils::error::{Result, TransportError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> std::result::Result<T, TransportError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Fails with [`TransportError::Status`] unless the status is 2xx.
    pub fn error_for_status(self) -> std::result::Result<Self, TransportError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(TransportError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// Outbound HTTP capability shared by the API clients.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> std::result::Result<HttpResponse, TransportError>;

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        auth: Option<&BasicAuth>,
    ) -> std::result::Result<HttpResponse, TransportError>;
}

/// Sink for every line the assistant shows the user.
pub trait Console: Send + Sync {
    fn say(&self, line: &str);
}

/// Source of user answers.
#[async_trait]
pub trait Prompter: Console {
    /// Show `question` and return the raw answer without the trailing newline.
    async fn ask(&self, question: &str) -> Result<String>;
}

/// Picks an index in `0..len`; `len` is always at least 1.
pub trait RecipePicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}
