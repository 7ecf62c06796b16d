//! Domain types for the screenplay generation contract.
//!
//! ```text
//! GenerationRequest ──POST /generate-story──▶ GenerationPayload
//!                                                    │
//!                                                    ▼
//!                                  GenerationResult::{Empty, Success, Failure}
//! ```

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

/// User-visible message for every failed generation, regardless of cause.
pub const FAILURE_MESSAGE: &str =
    "Failed to generate screenplay. Make sure the backend server is running on port 8000.";

/// Body of `POST /generate-story`. Built right before dispatch and never mutated.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub user_input: String,
}

impl GenerationRequest {
    /// Builds a request from prompt text, trimming surrounding whitespace.
    pub fn new(prompt: &str) -> Self {
        Self {
            user_input: prompt.trim().to_string(),
        }
    }
}

/// Successful response body. Every field is optional; unknown keys are ignored.
///
/// `null`, `""` and non-string values all deserialize to `None`, so presence
/// is the only signal downstream code has to look at.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationPayload {
    #[serde(default, deserialize_with = "present_string")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub tone: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub outline: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub scene: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub dialogue: Option<String>,
}

impl GenerationPayload {
    /// Parses a response body. Anything other than a JSON object is rejected,
    /// including arrays that serde would otherwise map onto the fields positionally.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value)
    }

    /// True when none of the recognized fields are present.
    pub fn is_empty(&self) -> bool {
        self.genre.is_none()
            && self.tone.is_none()
            && self.outline.is_none()
            && self.scene.is_none()
            && self.dialogue.is_none()
    }
}

fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) if !s.is_empty() => Ok(Some(s)),
        serde_json::Value::String(_) | serde_json::Value::Null => Ok(None),
        other => {
            debug!("Dropping non-string field value ({})", json_kind(&other));
            Ok(None)
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// The last settled outcome. Replaced wholesale on each settlement, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationResult {
    /// Nothing has been requested yet.
    #[default]
    Empty,
    Success(GenerationPayload),
    Failure(String),
}

impl GenerationResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, GenerationResult::Failure(_))
    }
}
