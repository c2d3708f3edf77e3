use crate::domain::ports::{BasicAuth, HttpResponse, HttpTransport};
use crate::utils::error::TransportError;
use async_trait::async_trait;
use reqwest::Client;

/// [`HttpTransport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn into_response(
        response: reqwest::Response,
    ) -> Result<HttpResponse, TransportError> {
        let status = response.status().as_u16();
        tracing::debug!("API response status: {}", status);
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        tracing::debug!("Making GET request to: {}", url);
        let response = self.client.get(url).query(query).send().await?;
        Self::into_response(response).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        auth: Option<&BasicAuth>,
    ) -> Result<HttpResponse, TransportError> {
        tracing::debug!("Making POST request to: {}", url);
        // .json() 會一併設定 Content-Type: application/json
        let mut request = self.client.post(url).json(body);
        if let Some(auth) = auth {
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }
        let response = request.send().await?;
        Self::into_response(response).await
    }
}
