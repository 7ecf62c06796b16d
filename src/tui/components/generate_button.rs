//! # GenerateButton Component
//!
//! The submit control. Shows "Generate Screenplay" when a request can be
//! sent, a spinner with "Generating..." while one is in flight, and a dimmed
//! label when the prompt is blank.
//!
//! Dimming is cosmetic. `GenerationController::begin_submit` re-checks the
//! same conditions, so a keypress on a dimmed button still does nothing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub const BUTTON_LABEL: &str = "Generate Screenplay";
pub const BUTTON_BUSY_LABEL: &str = "Generating...";

/// Braille spinner frames.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(frame_index: usize) -> &'static str {
    SPINNER_FRAMES[frame_index % SPINNER_FRAMES.len()]
}

pub struct GenerateButton {
    pub is_loading: bool,
    pub is_submittable: bool,
    pub spinner_frame: usize,
}

impl GenerateButton {
    pub fn new(is_loading: bool, is_submittable: bool, spinner_frame: usize) -> Self {
        Self {
            is_loading,
            is_submittable,
            spinner_frame,
        }
    }

    pub fn label(&self) -> String {
        if self.is_loading {
            format!("{} {}", spinner(self.spinner_frame), BUTTON_BUSY_LABEL)
        } else {
            BUTTON_LABEL.to_string()
        }
    }
}

impl Component for GenerateButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.is_loading {
            Style::default().fg(Color::Yellow)
        } else if self.is_submittable {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(if self.is_submittable {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            })
            .title_bottom(" Enter / Ctrl+G ");

        let button = Paragraph::new(self.label())
            .style(style)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(button, area);
    }
}
