//! # One-shot Mode
//!
//! `scriptgen --prompt "..."` runs a single submission without the terminal UI
//! and hands back the rendered sections as plain text.

use std::sync::Arc;

use log::info;

use crate::core::controller::GenerationController;
use crate::core::render::{render, to_plain_text};
use crate::generation::GenerationService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShotOutcome {
    Generated,
    Failed,
    /// Prompt was blank; nothing was sent.
    Skipped,
}

impl OneShotOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            OneShotOutcome::Generated => 0,
            OneShotOutcome::Failed => 1,
            OneShotOutcome::Skipped => 2,
        }
    }
}

/// Submits `prompt` once and returns the outcome with the rendered text.
pub async fn generate_once(
    service: Arc<dyn GenerationService>,
    prompt: &str,
) -> (OneShotOutcome, String) {
    let mut controller = GenerationController::new(service);
    controller.input_mut().set_text(prompt);

    if !controller.submit().await {
        info!("One-shot prompt was blank, nothing sent");
        return (OneShotOutcome::Skipped, String::new());
    }

    let outcome = if controller.result().is_failure() {
        OneShotOutcome::Failed
    } else {
        OneShotOutcome::Generated
    };
    (outcome, to_plain_text(&render(controller.result())))
}
