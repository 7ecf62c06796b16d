//! HTTP implementation of the generation contract.
//!
//! `POST {base_url}/generate-story` with `{"user_input": "..."}` as JSON.
//! No auth, no streaming, no retries, no timeout.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::generation::{GenerationPayload, GenerationRequest, GenerationService, ServiceError};

/// Path of the generation endpoint, relative to the base URL.
pub const GENERATE_PATH: &str = "/generate-story";

/// Generation backend reached over plain HTTP.
pub struct HttpGenerationService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGenerationService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GENERATE_PATH)
    }
}

#[async_trait]
impl GenerationService for HttpGenerationService {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationPayload, ServiceError> {
        let endpoint = self.endpoint();
        info!(
            "Generation request: endpoint={}, input_len={}",
            endpoint,
            request.user_input.len()
        );

        // reqwest's .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Generation response status: {}", status);

        if !status.is_success() {
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Generation API error: {} - {}", status.as_u16(), err_body);
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        debug!("Generation response body: {} bytes", body.len());

        GenerationPayload::from_json(&body).map_err(|e| {
            warn!("Malformed generation payload: {}", e);
            ServiceError::Parse(e.to_string())
        })
    }
}
