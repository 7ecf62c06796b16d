//! # Application State
//!
//! Core business state for scriptgen. Domain logic only, no TUI types.
//! Presentation state (focus, scroll, cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── controller: GenerationController   // input + lifecycle + last result
//! ├── samples: Vec<String>                // sample prompt catalog
//! ├── service_name: String                // where requests go
//! ├── status_message: String              // status bar text
//! ├── submitted_at: Option<Instant>       // start of the in-flight request
//! └── last_settlement: Option<Settlement> // when/how long the last one took
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::core::config::ResolvedConfig;
use crate::core::controller::GenerationController;
use crate::core::samples::default_samples;
use crate::generation::GenerationService;

/// Timing of the most recent settlement.
#[derive(Debug, Clone, Copy)]
pub struct Settlement {
    pub at: DateTime<Local>,
    pub elapsed: Duration,
    pub failed: bool,
}

impl Settlement {
    pub fn summary(&self) -> String {
        let verb = if self.failed { "Failed" } else { "Generated" };
        format!(
            "{} at {} in {:.1}s",
            verb,
            self.at.format("%H:%M:%S"),
            self.elapsed.as_secs_f32()
        )
    }
}

pub struct App {
    pub controller: GenerationController,
    pub samples: Vec<String>,
    pub service_name: String,
    pub status_message: String,
    pub submitted_at: Option<Instant>,
    pub last_settlement: Option<Settlement>,
}

impl App {
    /// An empty `samples` list falls back to the built-in catalog.
    pub fn new(service: Arc<dyn GenerationService>, samples: Vec<String>) -> Self {
        let service_name = service.name().to_string();
        let samples = if samples.is_empty() {
            default_samples()
        } else {
            samples
        };
        Self {
            controller: GenerationController::new(service),
            samples,
            service_name,
            status_message: String::from("Pick a sample or type a prompt"),
            submitted_at: None,
            last_settlement: None,
        }
    }

    pub fn from_config(service: Arc<dyn GenerationService>, config: &ResolvedConfig) -> Self {
        Self::new(service, config.samples.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::Lifecycle;
    use crate::core::samples::SAMPLE_PROMPTS;
    use crate::generation::GenerationResult;
    use crate::test_support::{StaticService, comedy_payload, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Pick a sample or type a prompt");
        assert_eq!(app.controller.lifecycle(), Lifecycle::Idle);
        assert_eq!(app.controller.result(), &GenerationResult::Empty);
        assert_eq!(app.service_name, "static");
        assert_eq!(app.samples.len(), SAMPLE_PROMPTS.len());
    }

    #[test]
    fn custom_samples_replace_the_catalog() {
        let app = App::new(
            Arc::new(StaticService::new(comedy_payload())),
            vec!["A western on a train.".to_string()],
        );
        assert_eq!(app.samples, vec!["A western on a train.".to_string()]);
    }

    #[test]
    fn settlement_summary_mentions_outcome() {
        let ok = Settlement {
            at: Local::now(),
            elapsed: Duration::from_millis(3400),
            failed: false,
        };
        assert!(ok.summary().starts_with("Generated at "));
        assert!(ok.summary().ends_with("in 3.4s"));

        let failed = Settlement { failed: true, ..ok };
        assert!(failed.summary().starts_with("Failed at "));
    }
}
