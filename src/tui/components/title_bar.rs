//! # TitleBar Component
//!
//! Top status line: app name, backend address and the current status
//! ("Generating...", "Generated at 14:02:11 in 3.4s").
//!
//! Stateless. All three props come from core `App` state; the bar just
//! formats them.
//!
//! On narrow terminals the text is simply cut off on the right, so the app
//! name comes first and the status last.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub const APP_TITLE: &str = "Screenplay Generator";

/// Top status bar component.
pub struct TitleBar {
    /// Where requests go (e.g. "http://localhost:8000")
    pub service_name: String,
    /// Status message from `App`
    pub status_message: String,
    /// Whether the last settlement failed; tints the status red
    pub failed: bool,
}

impl TitleBar {
    pub fn new(service_name: String, status_message: String, failed: bool) -> Self {
        Self {
            service_name,
            status_message,
            failed,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                APP_TITLE,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" (backend: {})", self.service_name),
                Style::default().fg(Color::DarkGray),
            ),
        ];

        if !self.status_message.is_empty() {
            let status_style = if self.failed {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(self.status_message.clone(), status_style));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
