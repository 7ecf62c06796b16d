//! # Response Rendering
//!
//! Turns a `GenerationResult` into an ordered list of display sections.
//! Pure: no I/O, no styling types. The TUI and the one-shot CLI both draw
//! from the same `Vec<Section>`.
//!
//! | Result                | Sections                                        |
//! |-----------------------|-------------------------------------------------|
//! | `Empty`               | one placeholder                                 |
//! | `Failure(msg)`        | one error section with `msg` verbatim           |
//! | `Success(payload)`    | 0..=4 of Genre & Tone, Plot Outline, Key Scene, |
//! |                       | Dialogue, in that order                         |
//!
//! An empty `Success` yields no sections at all, not the placeholder.

use crate::generation::{GenerationPayload, GenerationResult};

pub const PLACEHOLDER_TEXT: &str = "Your screenplay will appear here...";

pub const GENRE_TONE_HEADING: &str = "Genre & Tone";
pub const OUTLINE_HEADING: &str = "Plot Outline";
pub const SCENE_HEADING: &str = "Key Scene";
pub const DIALOGUE_HEADING: &str = "Dialogue";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Placeholder,
    Error,
    GenreTone,
    Outline,
    Scene,
    Dialogue,
}

/// How a section should be presented, independent of any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTone {
    Muted,
    Error,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    /// Flowing prose; may be re-wrapped.
    Text(String),
    /// Labelled single-line values, e.g. `Genre: Comedy`.
    Fields(Vec<(&'static str, String)>),
    /// Line breaks are significant and must be kept as-is.
    Preformatted(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: Option<&'static str>,
    pub body: SectionBody,
}

impl Section {
    pub fn tone(&self) -> SectionTone {
        match self.kind {
            SectionKind::Placeholder => SectionTone::Muted,
            SectionKind::Error => SectionTone::Error,
            _ => SectionTone::Normal,
        }
    }

    /// Body as display lines. Preformatted bodies keep every line, blank ones included.
    pub fn body_lines(&self) -> Vec<String> {
        match &self.body {
            SectionBody::Text(text) => vec![text.clone()],
            SectionBody::Fields(fields) => fields
                .iter()
                .map(|(label, value)| format!("{label}: {value}"))
                .collect(),
            SectionBody::Preformatted(text) => text.split('\n').map(str::to_string).collect(),
        }
    }
}

/// Renders a result into sections. Deterministic for a given input.
pub fn render(result: &GenerationResult) -> Vec<Section> {
    match result {
        GenerationResult::Empty => vec![Section {
            kind: SectionKind::Placeholder,
            heading: None,
            body: SectionBody::Text(PLACEHOLDER_TEXT.to_string()),
        }],
        GenerationResult::Failure(message) => vec![Section {
            kind: SectionKind::Error,
            heading: None,
            body: SectionBody::Text(message.clone()),
        }],
        GenerationResult::Success(payload) => render_payload(payload),
    }
}

fn render_payload(payload: &GenerationPayload) -> Vec<Section> {
    let mut sections = Vec::with_capacity(4);

    // Genre and tone only make sense together
    if let (Some(genre), Some(tone)) = (&payload.genre, &payload.tone) {
        sections.push(Section {
            kind: SectionKind::GenreTone,
            heading: Some(GENRE_TONE_HEADING),
            body: SectionBody::Fields(vec![("Genre", genre.clone()), ("Tone", tone.clone())]),
        });
    }

    if let Some(outline) = &payload.outline {
        sections.push(Section {
            kind: SectionKind::Outline,
            heading: Some(OUTLINE_HEADING),
            body: SectionBody::Text(outline.clone()),
        });
    }

    if let Some(scene) = &payload.scene {
        sections.push(Section {
            kind: SectionKind::Scene,
            heading: Some(SCENE_HEADING),
            body: SectionBody::Text(scene.clone()),
        });
    }

    if let Some(dialogue) = &payload.dialogue {
        sections.push(Section {
            kind: SectionKind::Dialogue,
            heading: Some(DIALOGUE_HEADING),
            body: SectionBody::Preformatted(dialogue.clone()),
        });
    }

    sections
}

/// Plain-text form: heading line, body lines, blank line between sections.
pub fn to_plain_text(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|section| {
            let mut block = String::new();
            if let Some(heading) = section.heading {
                block.push_str(heading);
                block.push('\n');
            }
            block.push_str(&section.body_lines().join("\n"));
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
