//! `reqwest` transport for the answering service.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;
use serde_json::Value;
use vidchat::{AskRequest, AskResponse, Backend, BackendError};

pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    #[must_use]
    pub fn new(endpoint: &str) -> Self {
        Self { client: reqwest::Client::new(), endpoint: endpoint.trim().to_owned() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, BackendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|error| BackendError::Transport(error.to_string()))?;

        let status = response.status();
        let value = response
            .json::<Value>()
            .await
            .map_err(|error| BackendError::Decode(error.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body = %value, "answering service returned an error status");
        }
        Ok(AskResponse::from_value(&value))
    }
}
