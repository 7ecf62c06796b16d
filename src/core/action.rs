//! # Actions
//!
//! Everything that can happen in scriptgen becomes an `Action`.
//! User presses Enter on a sample? That's `Action::ApplySample(i)`.
//! The backend answers? That's `Action::GenerationSettled(outcome)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the event loop has to carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Submission is split across two actions so the loop never blocks:
//! `Submit` does the check-and-set and asks for the request to be spawned,
//! `GenerationSettled` applies whatever came back.

use std::time::Instant;

use chrono::Local;
use log::{debug, info, warn};

use crate::core::state::{App, Settlement};
use crate::generation::{GenerationPayload, GenerationRequest, ServiceError};

#[derive(Debug)]
pub enum Action {
    /// Prompt text replaced by typing (full new text).
    EditPrompt(String),
    /// Sample at this catalog index copied into the prompt.
    ApplySample(usize),
    Submit,
    GenerationSettled(Result<GenerationPayload, ServiceError>),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnRequest(GenerationRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::EditPrompt(text) => {
            app.controller.input_mut().set_text(text);
            Effect::None
        }
        Action::ApplySample(index) => {
            let Some(sample) = app.samples.get(index) else {
                warn!("Sample index {} out of range ({} samples)", index, app.samples.len());
                return Effect::None;
            };
            debug!("Applying sample {}", index);
            app.controller.input_mut().apply_sample(index, sample);
            Effect::None
        }
        Action::Submit => match app.controller.begin_submit() {
            Some(request) => {
                app.submitted_at = Some(Instant::now());
                app.status_message = String::from("Generating...");
                Effect::SpawnRequest(request)
            }
            None => Effect::None,
        },
        Action::GenerationSettled(outcome) => {
            if !app.controller.settle(outcome) {
                return Effect::None;
            }
            let settlement = Settlement {
                at: Local::now(),
                elapsed: app
                    .submitted_at
                    .take()
                    .map(|t| t.elapsed())
                    .unwrap_or_default(),
                failed: app.controller.result().is_failure(),
            };
            app.status_message = settlement.summary();
            info!("{}", app.status_message);
            app.last_settlement = Some(settlement);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
