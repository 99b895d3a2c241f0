use crate::{
    error::{GenerationError, Result},
    models::{ApiKey, GenerationPayload},
};
use async_trait::async_trait;
use reqwest::{header, Client};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST and hands back the raw status and body.
#[async_trait]
pub trait ImageTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        api_key: &ApiKey,
        payload: &GenerationPayload,
    ) -> Result<TransportResponse>;
}

#[derive(Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageTransport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        api_key: &ApiKey,
        payload: &GenerationPayload,
    ) -> Result<TransportResponse> {
        let response = self
            .client
            .post(url)
            .bearer_auth(api_key.expose())
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                GenerationError::RequestError(api_key.redact(&format!(
                    "Stability request failed: {}",
                    e.without_url()
                )))
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            GenerationError::ResponseError(format!("failed to read response body: {}", e))
        })?;

        Ok(TransportResponse { status, body })
    }
}
