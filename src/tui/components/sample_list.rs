//! # Sample List Component
//!
//! Catalog of sample prompts in the left column. Up/Down moves the
//! highlight, Enter copies the highlighted sample into the prompt.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SampleListState` lives in `TuiState`
//! - `SampleList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Padding};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::wrap::display_width;

pub const SAMPLES_TITLE: &str = "Try a sample";

/// Persistent state for the sample list.
pub struct SampleListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl SampleListState {
    pub fn new(sample_count: usize) -> Self {
        let mut list_state = ListState::default();
        if sample_count > 0 {
            list_state.select(Some(0));
        }
        Self {
            selected: 0,
            list_state,
        }
    }

    /// Handle a key event, returning a `SampleEvent` if a sample should be applied.
    pub fn handle_event(&mut self, event: &TuiEvent, sample_count: usize) -> Option<SampleEvent> {
        if sample_count == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(sample_count - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(SampleEvent::Apply(self.selected.min(sample_count - 1))),
            _ => None,
        }
    }
}

/// Events emitted by the sample list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleEvent {
    Apply(usize),
}

/// Transient render wrapper for the sample list.
pub struct SampleList<'a> {
    state: &'a mut SampleListState,
    samples: &'a [String],
    focused: bool,
}

impl<'a> SampleList<'a> {
    pub fn new(state: &'a mut SampleListState, samples: &'a [String], focused: bool) -> Self {
        Self {
            state,
            samples,
            focused,
        }
    }

    /// Rows needed to show every sample plus borders.
    pub fn preferred_height(sample_count: usize) -> u16 {
        sample_count as u16 + 2
    }
}

impl<'a> Component for SampleList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {SAMPLES_TITLE} "))
            .padding(Padding::horizontal(1));

        // borders + padding + "› " marker
        let label_width = area.width.saturating_sub(6) as usize;

        let items: Vec<ListItem> = self
            .samples
            .iter()
            .enumerate()
            .map(|(i, sample)| {
                let is_selected = i == self.state.selected;
                let style = if is_selected && self.focused {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_selected {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if is_selected { "› " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(truncate_str(sample, label_width), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 3 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push_str("...");
    out
}
