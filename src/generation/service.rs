use std::fmt;

use async_trait::async_trait;

use super::types::{GenerationPayload, GenerationRequest};

/// Reasons a generation call can fail.
/// All of them collapse into the same user-facing message; the variant is only logged.
#[derive(Debug)]
pub enum ServiceError {
    /// No response at all (connection refused, DNS, dropped socket).
    Network(String),
    /// The service answered with a non-2xx status.
    Api { status: u16, message: String },
    /// A 2xx response whose body is not a usable JSON object.
    Parse(String),
    /// The service implementation panicked mid-call.
    Panicked(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Network(msg) => write!(f, "network error: {msg}"),
            ServiceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ServiceError::Parse(msg) => write!(f, "parse error: {msg}"),
            ServiceError::Panicked(msg) => write!(f, "service panicked: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// A remote screenplay generator. One request, one response.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Returns the name of the service, for logs and the title bar.
    fn name(&self) -> &str;

    /// Sends the request and waits for it to settle.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationPayload, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_for_api_errors() {
        let err = ServiceError::Api {
            status: 503,
            message: "busy".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 503): busy");
    }

    #[test]
    fn display_prefixes_each_variant() {
        assert!(ServiceError::Network("refused".into()).to_string().starts_with("network error"));
        assert!(ServiceError::Parse("eof".into()).to_string().starts_with("parse error"));
        assert!(ServiceError::Panicked("boom".into()).to_string().contains("boom"));
    }
}
