//! # Prompt Input
//!
//! Holds the prompt text exactly as the user left it. Writes are verbatim;
//! trimming only happens when the text is read for submission.

use crate::core::controller::Lifecycle;

/// Where the current prompt text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputOrigin {
    #[default]
    Typed,
    /// Filled in from the sample catalog (index into the catalog).
    Sample(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    text: String,
    origin: InputOrigin,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn origin(&self) -> InputOrigin {
        self.origin
    }

    /// Replaces the prompt text. No trimming, no appending.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.origin = InputOrigin::Typed;
    }

    /// Same overwrite as `set_text`, but remembers which sample was picked.
    pub fn apply_sample(&mut self, index: usize, sample: &str) {
        self.text = sample.to_string();
        self.origin = InputOrigin::Sample(index);
    }

    pub fn has_content(&self) -> bool {
        !self.trimmed().is_empty()
    }

    /// True iff the trimmed text is non-empty and nothing is in flight.
    pub fn is_submittable(&self, lifecycle: Lifecycle) -> bool {
        self.has_content() && lifecycle == Lifecycle::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::samples::SAMPLE_PROMPTS;

    #[test]
    fn set_text_stores_verbatim() {
        let mut input = InputState::new();
        input.set_text("  padded prompt \n");
        assert_eq!(input.text(), "  padded prompt \n");
        assert_eq!(input.trimmed(), "padded prompt");
        assert_eq!(input.origin(), InputOrigin::Typed);
    }

    #[test]
    fn apply_sample_overwrites_instead_of_appending() {
        let mut input = InputState::new();
        input.set_text("something typed");
        input.apply_sample(1, SAMPLE_PROMPTS[1]);
        assert_eq!(input.text(), SAMPLE_PROMPTS[1]);
        assert_eq!(input.origin(), InputOrigin::Sample(1));
    }

    #[test]
    fn every_sample_round_trips_exactly() {
        let mut input = InputState::new();
        for (i, sample) in SAMPLE_PROMPTS.iter().enumerate() {
            input.apply_sample(i, sample);
            assert_eq!(input.text(), *sample);
        }
    }

    #[test]
    fn editing_after_sample_resets_origin() {
        let mut input = InputState::new();
        input.apply_sample(0, SAMPLE_PROMPTS[0]);
        input.set_text(format!("{} With a twist.", SAMPLE_PROMPTS[0]));
        assert_eq!(input.origin(), InputOrigin::Typed);
    }

    #[test]
    fn whitespace_only_is_never_submittable() {
        let mut input = InputState::new();
        for blank in ["", " ", "\n", "\t \r\n", "\u{3000}"] {
            input.set_text(blank);
            assert!(!input.is_submittable(Lifecycle::Idle), "{blank:?}");
        }
    }

    #[test]
    fn loading_blocks_submission() {
        let mut input = InputState::new();
        input.set_text("A drama about family secrets.");
        assert!(input.is_submittable(Lifecycle::Idle));
        assert!(!input.is_submittable(Lifecycle::Loading));
    }
}
