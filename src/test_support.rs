//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::core::state::App;
use crate::generation::{GenerationPayload, GenerationRequest, GenerationService, ServiceError};

pub fn comedy_payload() -> GenerationPayload {
    GenerationPayload {
        genre: Some("Comedy".to_string()),
        tone: Some("Light".to_string()),
        outline: Some("Two rival chefs are forced to share a food truck.".to_string()),
        scene: None,
        dialogue: None,
    }
}

/// Always answers with the same payload.
pub struct StaticService {
    payload: GenerationPayload,
}

impl StaticService {
    pub fn new(payload: GenerationPayload) -> Self {
        Self { payload }
    }
}

#[async_trait]
impl GenerationService for StaticService {
    fn name(&self) -> &str {
        "static"
    }

    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GenerationPayload, ServiceError> {
        Ok(self.payload.clone())
    }
}

/// Answers with a payload and remembers every prompt it was sent.
pub struct RecordingService {
    payload: GenerationPayload,
    requests: Mutex<Vec<String>>,
}

impl RecordingService {
    pub fn new(payload: GenerationPayload) -> Self {
        Self {
            payload,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests().len()
    }
}

#[async_trait]
impl GenerationService for RecordingService {
    fn name(&self) -> &str {
        "recording"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationPayload, ServiceError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.user_input.clone());
        }
        Ok(self.payload.clone())
    }
}

/// Fails every call, either at the transport or the HTTP level.
pub enum FailingService {
    Network,
    Api(u16),
}

impl FailingService {
    pub fn network() -> Self {
        FailingService::Network
    }

    pub fn api(status: u16) -> Self {
        FailingService::Api(status)
    }
}

#[async_trait]
impl GenerationService for FailingService {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GenerationPayload, ServiceError> {
        match self {
            FailingService::Network => {
                Err(ServiceError::Network("connection refused".to_string()))
            }
            FailingService::Api(status) => Err(ServiceError::Api {
                status: *status,
                message: "backend unavailable".to_string(),
            }),
        }
    }
}

/// Panics inside `generate`.
pub struct PanickingService;

#[async_trait]
impl GenerationService for PanickingService {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GenerationPayload, ServiceError> {
        panic!("model exploded");
    }
}

/// Holds every call until `release()` is called, so tests can observe `Loading`.
pub struct GatedService {
    payload: GenerationPayload,
    gate: Notify,
    calls: AtomicUsize,
}

impl GatedService {
    pub fn new(payload: GenerationPayload) -> Self {
        Self {
            payload,
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Lets one pending (or the next) call through.
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationService for GatedService {
    fn name(&self) -> &str {
        "gated"
    }

    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GenerationPayload, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(self.payload.clone())
    }
}

/// Creates a test App backed by a StaticService.
pub fn test_app() -> App {
    App::new(Arc::new(StaticService::new(comedy_payload())), Vec::new())
}
