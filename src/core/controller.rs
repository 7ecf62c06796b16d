//! # Generation Controller
//!
//! Owns the request lifecycle and the last settled result.
//!
//! ```text
//!          submit (blank or busy)
//!            ┌──────┐
//!            ▼      │
//!         ┌──────┐──┘  submit (valid)   ┌─────────┐
//!         │ Idle │ ────────────────────▶ │ Loading │
//!         └──────┘ ◀──────────────────── └─────────┘
//!                   settle (ok / error)
//! ```
//!
//! `begin_submit()` is the check-and-set: it re-evaluates the submittable
//! predicate and flips to `Loading` in the same `&mut self` call, so rapid or
//! programmatic callers can never get two requests in flight. The previous
//! result stays in place until `settle()` replaces it.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use log::{debug, info, warn};

use crate::core::input::InputState;
use crate::generation::{
    FAILURE_MESSAGE, GenerationPayload, GenerationRequest, GenerationResult, GenerationService,
    ServiceError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    Loading,
}

pub struct GenerationController {
    service: Arc<dyn GenerationService>,
    input: InputState,
    lifecycle: Lifecycle,
    result: GenerationResult,
}

impl GenerationController {
    pub fn new(service: Arc<dyn GenerationService>) -> Self {
        Self {
            service,
            input: InputState::new(),
            lifecycle: Lifecycle::Idle,
            result: GenerationResult::Empty,
        }
    }

    pub fn service(&self) -> Arc<dyn GenerationService> {
        self.service.clone()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Edits are allowed while loading; they never touch the in-flight request.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle == Lifecycle::Loading
    }

    pub fn result(&self) -> &GenerationResult {
        &self.result
    }

    pub fn is_submittable(&self) -> bool {
        self.input.is_submittable(self.lifecycle)
    }

    /// Check-and-set half of `submit()`.
    ///
    /// Returns `None` without touching any state when the prompt is blank or a
    /// request is already in flight. Otherwise moves to `Loading` and returns
    /// the request to dispatch.
    pub fn begin_submit(&mut self) -> Option<GenerationRequest> {
        if self.lifecycle == Lifecycle::Loading {
            debug!("Submit ignored: request already in flight");
            return None;
        }
        if !self.input.has_content() {
            debug!("Submit ignored: prompt is blank");
            return None;
        }

        self.lifecycle = Lifecycle::Loading;
        let request = GenerationRequest::new(self.input.text());
        info!(
            "Lifecycle Idle -> Loading (input_len={}, origin={:?})",
            request.user_input.len(),
            self.input.origin()
        );
        Some(request)
    }

    /// Settlement half of `submit()`. Replaces the result and returns to `Idle`.
    ///
    /// Returns `false` (and changes nothing) if no request was in flight.
    pub fn settle(&mut self, outcome: Result<GenerationPayload, ServiceError>) -> bool {
        if self.lifecycle != Lifecycle::Loading {
            warn!("Settlement received while idle; ignoring");
            return false;
        }

        self.result = match outcome {
            Ok(payload) => {
                debug!("Generation succeeded: {:?}", payload);
                GenerationResult::Success(payload)
            }
            Err(e) => {
                warn!("Generation failed: {}", e);
                GenerationResult::Failure(FAILURE_MESSAGE.to_string())
            }
        };
        self.lifecycle = Lifecycle::Idle;
        info!("Lifecycle Loading -> Idle");
        true
    }

    /// Runs a full submission: check-and-set, dispatch, settle.
    ///
    /// Returns `true` if a request was dispatched.
    pub async fn submit(&mut self) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let outcome = dispatch(self.service.clone(), request).await;
        self.settle(outcome);
        true
    }
}

/// Calls the service, turning a panic inside it into `ServiceError::Panicked`.
///
/// Every dispatched request therefore produces an outcome, and `settle()` is
/// always reached.
pub async fn dispatch(
    service: Arc<dyn GenerationService>,
    request: GenerationRequest,
) -> Result<GenerationPayload, ServiceError> {
    debug!("Dispatching to {}", service.name());
    let call = async { service.generate(&request).await };
    match AssertUnwindSafe(call).catch_unwind().await {
        Ok(outcome) => outcome,
        Err(panic) => Err(ServiceError::Panicked(panic_message(panic.as_ref()))),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        FailingService, PanickingService, RecordingService, StaticService, comedy_payload,
    };

    fn controller_with(service: Arc<dyn GenerationService>) -> GenerationController {
        GenerationController::new(service)
    }

    #[test]
    fn starts_idle_and_empty() {
        let controller = controller_with(Arc::new(StaticService::new(comedy_payload())));
        assert_eq!(controller.lifecycle(), Lifecycle::Idle);
        assert_eq!(controller.result(), &GenerationResult::Empty);
        assert!(!controller.is_submittable());
    }

    #[tokio::test]
    async fn blank_prompt_is_a_noop() {
        let service = Arc::new(RecordingService::new(comedy_payload()));
        let mut controller = controller_with(service.clone());
        controller.input_mut().set_text("   \n\t ");

        assert!(!controller.submit().await);
        assert_eq!(controller.lifecycle(), Lifecycle::Idle);
        assert_eq!(controller.result(), &GenerationResult::Empty);
        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn success_replaces_result_and_returns_to_idle() {
        let service = Arc::new(RecordingService::new(comedy_payload()));
        let mut controller = controller_with(service.clone());
        controller.input_mut().set_text("  Two rival chefs  ");

        assert!(controller.submit().await);
        assert_eq!(controller.lifecycle(), Lifecycle::Idle);
        assert_eq!(controller.result(), &GenerationResult::Success(comedy_payload()));
        assert_eq!(service.requests(), vec!["Two rival chefs".to_string()]);
    }

    #[tokio::test]
    async fn failure_uses_fixed_message() {
        let mut controller = controller_with(Arc::new(FailingService::api(500)));
        controller.input_mut().set_text("A thriller");

        controller.submit().await;
        assert_eq!(
            controller.result(),
            &GenerationResult::Failure(FAILURE_MESSAGE.to_string())
        );
        assert_eq!(controller.lifecycle(), Lifecycle::Idle);
    }

    #[tokio::test]
    async fn network_and_api_failures_are_indistinguishable() {
        let mut via_network = controller_with(Arc::new(FailingService::network()));
        let mut via_api = controller_with(Arc::new(FailingService::api(404)));
        via_network.input_mut().set_text("Mars");
        via_api.input_mut().set_text("Mars");

        via_network.submit().await;
        via_api.submit().await;
        assert_eq!(via_network.result(), via_api.result());
    }

    #[tokio::test]
    async fn panicking_service_still_returns_to_idle() {
        let mut controller = controller_with(Arc::new(PanickingService));
        controller.input_mut().set_text("A horror story");

        assert!(controller.submit().await);
        assert_eq!(controller.lifecycle(), Lifecycle::Idle);
        assert!(controller.result().is_failure());
    }

    #[test]
    fn begin_submit_is_single_flight() {
        let mut controller = controller_with(Arc::new(StaticService::new(comedy_payload())));
        controller.input_mut().set_text("Family secrets");

        let first = controller.begin_submit();
        let second = controller.begin_submit();
        assert_eq!(first, Some(GenerationRequest::new("Family secrets")));
        assert_eq!(second, None);
        assert_eq!(controller.lifecycle(), Lifecycle::Loading);
    }

    #[test]
    fn previous_result_survives_until_settlement() {
        let mut controller = controller_with(Arc::new(StaticService::new(comedy_payload())));
        controller.input_mut().set_text("first");
        controller.begin_submit();
        controller.settle(Ok(comedy_payload()));

        controller.input_mut().set_text("second");
        controller.begin_submit();
        assert_eq!(controller.result(), &GenerationResult::Success(comedy_payload()));

        controller.settle(Err(ServiceError::Network("refused".into())));
        assert!(controller.result().is_failure());
    }

    #[test]
    fn failure_is_replaced_not_merged() {
        let mut controller = controller_with(Arc::new(StaticService::new(comedy_payload())));
        controller.input_mut().set_text("again");
        controller.begin_submit();
        controller.settle(Err(ServiceError::Parse("eof".into())));
        controller.begin_submit();
        controller.settle(Ok(GenerationPayload::default()));
        assert_eq!(
            controller.result(),
            &GenerationResult::Success(GenerationPayload::default())
        );
    }

    #[test]
    fn settle_while_idle_is_ignored() {
        let mut controller = controller_with(Arc::new(StaticService::new(comedy_payload())));
        assert!(!controller.settle(Ok(comedy_payload())));
        assert_eq!(controller.result(), &GenerationResult::Empty);
    }

    #[test]
    fn edits_while_loading_do_not_change_the_request() {
        let mut controller = controller_with(Arc::new(StaticService::new(comedy_payload())));
        controller.input_mut().set_text("original");
        let request = controller.begin_submit();

        controller.input_mut().set_text("edited mid-flight");
        assert_eq!(request.map(|r| r.user_input), Some("original".to_string()));
        assert_eq!(controller.input().text(), "edited mid-flight");
        assert!(!controller.is_submittable());
    }

    #[test]
    fn dispatch_converts_panics() {
        let request = GenerationRequest::new("x");
        let outcome = tokio_test::block_on(dispatch(Arc::new(PanickingService), request));
        assert!(matches!(outcome, Err(ServiceError::Panicked(msg)) if msg.contains("exploded")));
    }
}
