//! # PromptInput Component
//!
//! Multi-line editor for the prompt text.
//!
//! The text itself belongs to `core::input::InputState`; this component only
//! keeps the cursor and scroll position. Every edit is emitted as
//! `PromptEvent::Edited(new_text)` and goes through `update()` like any other
//! action, so a sample applied from the list and a keystroke end up in the
//! same place.
//!
//! Text is hard-wrapped at the inner width (see `tui::wrap`). That keeps the
//! mapping from byte offset to screen cell exact, spaces included.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::wrap::{hard_wrap_text, next_char_boundary, prev_char_boundary};

pub const PROMPT_TITLE: &str = "Your prompt";
pub const PROMPT_PLACEHOLDER: &str = "Describe the story you want...";

/// Border (2) + padding (2) consumed horizontally by the bordered block
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Offset from area edge to content (border + padding)
const CONTENT_OFFSET_X: u16 = 2;

/// High-level events emitted by the prompt input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    /// The text changed; carries the full new text.
    Edited(String),
    /// Enter pressed.
    Submit,
}

/// Cursor and scroll state. Persisted in `TuiState`.
pub struct PromptInputState {
    /// Cursor position as byte offset into the prompt text
    pub cursor: usize,
    /// First visible wrapped row
    pub scroll_offset: u16,
    /// Inner width from the last render (used for Up/Down)
    pub last_content_width: u16,
}

impl Default for PromptInputState {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptInputState {
    const DEFAULT_WIDTH: u16 = 40;

    pub fn new() -> Self {
        Self {
            cursor: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Put the cursor after the last character (used after a sample is applied).
    pub fn move_to_end(&mut self, text: &str) {
        self.cursor = text.len();
    }

    /// The text can change underneath us (sample applied); keep the cursor valid.
    fn clamp(&mut self, text: &str) {
        if self.cursor > text.len() || !text.is_char_boundary(self.cursor) {
            self.cursor = text.len();
        }
    }
}

/// Screen cell `(byte_offset, row, column)` of every char boundary in `text`
/// when hard-wrapped at `width`. The last entry is the end of the text.
fn boundary_cells(text: &str, width: usize) -> Vec<(usize, u16, u16)> {
    let width = width.max(1);
    let mut cells = Vec::with_capacity(text.len() + 1);
    let mut row: u16 = 0;
    let mut col: usize = 0;

    for (i, c) in text.char_indices() {
        if c == '\n' {
            cells.push((i, row, col.min(width - 1) as u16));
            row += 1;
            col = 0;
            continue;
        }
        let w = c.width().unwrap_or(0);
        if col + w > width && col > 0 {
            row += 1;
            col = 0;
        }
        cells.push((i, row, col as u16));
        col += w;
    }

    // A full last row puts the cursor at the start of the next one
    if col >= width {
        row += 1;
        col = 0;
    }
    cells.push((text.len(), row, col as u16));
    cells
}

/// `(row, column)` of the cursor at byte offset `pos`.
fn cursor_cell(text: &str, pos: usize, width: usize) -> (u16, u16) {
    boundary_cells(text, width)
        .into_iter()
        .find(|(offset, _, _)| *offset == pos)
        .map(|(_, row, col)| (row, col))
        .unwrap_or((0, 0))
}

/// Byte offset one wrapped row up (`-1`) or down (`1`), keeping the column
/// where possible. `None` at the first/last row.
fn vertical_target(text: &str, pos: usize, direction: i16, width: usize) -> Option<usize> {
    let cells = boundary_cells(text, width);
    let &(_, row, col) = cells.iter().find(|(offset, _, _)| *offset == pos)?;
    let target_row = if direction < 0 {
        row.checked_sub(1)?
    } else {
        row + 1
    };

    let on_row: Vec<_> = cells.iter().filter(|(_, r, _)| *r == target_row).collect();
    let first = on_row.first()?;
    let best = on_row
        .iter()
        .rev()
        .find(|(_, _, c)| *c <= col)
        .unwrap_or(first);
    Some(best.0)
}

/// Transient wrapper: borrowed cursor state plus the current text as a prop.
pub struct PromptInput<'a> {
    pub state: &'a mut PromptInputState,
    pub text: &'a str,
    pub focused: bool,
}

impl<'a> PromptInput<'a> {
    pub fn new(state: &'a mut PromptInputState, text: &'a str, focused: bool) -> Self {
        state.clamp(text);
        Self {
            state,
            text,
            focused,
        }
    }

    fn insert(&mut self, s: &str) -> Option<PromptEvent> {
        let mut text = self.text.to_string();
        text.insert_str(self.state.cursor, s);
        self.state.cursor += s.len();
        Some(PromptEvent::Edited(text))
    }

    /// Keep the cursor row inside the visible window.
    fn update_scroll(&mut self, cursor_row: u16, visible_rows: u16) {
        if cursor_row < self.state.scroll_offset {
            self.state.scroll_offset = cursor_row;
        } else if cursor_row >= self.state.scroll_offset + visible_rows {
            self.state.scroll_offset = cursor_row + 1 - visible_rows;
        }
    }
}

impl<'a> Component for PromptInput<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {PROMPT_TITLE} "))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        let width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        if width == 0 || inner.height == 0 {
            frame.render_widget(block, area);
            return;
        }
        self.state.last_content_width = width;

        if self.text.is_empty() {
            let placeholder = Paragraph::new(PROMPT_PLACEHOLDER)
                .style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
                .block(block);
            frame.render_widget(placeholder, area);
            self.state.scroll_offset = 0;
            if self.focused {
                frame.set_cursor_position((area.x + CONTENT_OFFSET_X, inner.y));
            }
            return;
        }

        let (cursor_row, cursor_col) = cursor_cell(self.text, self.state.cursor, width as usize);
        self.update_scroll(cursor_row, inner.height);

        let lines: Vec<Line> = hard_wrap_text(self.text, width as usize)
            .into_iter()
            .skip(self.state.scroll_offset as usize)
            .take(inner.height as usize)
            .map(Line::from)
            .collect();

        let input = Paragraph::new(lines)
            .style(Style::default().fg(Color::Green))
            .block(block);
        frame.render_widget(input, area);

        if self.focused {
            let x = area.x + CONTENT_OFFSET_X + cursor_col.min(width - 1);
            let y = inner.y + cursor_row - self.state.scroll_offset;
            frame.set_cursor_position((x, y));
        }
    }
}

impl<'a> EventHandler for PromptInput<'a> {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let cursor = self.state.cursor;
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0; 4];
                self.insert(c.encode_utf8(&mut buf))
            }
            TuiEvent::Paste(pasted) => {
                let normalized = pasted.replace("\r\n", "\n").replace('\r', "\n");
                self.insert(&normalized)
            }
            TuiEvent::Backspace => {
                if cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(self.text, cursor);
                let mut text = self.text.to_string();
                text.drain(prev..cursor);
                self.state.cursor = prev;
                Some(PromptEvent::Edited(text))
            }
            TuiEvent::Delete => {
                if cursor >= self.text.len() {
                    return None;
                }
                let next = next_char_boundary(self.text, cursor);
                let mut text = self.text.to_string();
                text.drain(cursor..next);
                Some(PromptEvent::Edited(text))
            }
            TuiEvent::CursorLeft => {
                self.state.cursor = prev_char_boundary(self.text, cursor);
                None
            }
            TuiEvent::CursorRight => {
                if cursor < self.text.len() {
                    self.state.cursor = next_char_boundary(self.text, cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.state.cursor = self.text[..cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
                None
            }
            TuiEvent::CursorEnd => {
                self.state.cursor = self.text[cursor..]
                    .find('\n')
                    .map(|i| cursor + i)
                    .unwrap_or(self.text.len());
                None
            }
            TuiEvent::CursorUp | TuiEvent::CursorDown => {
                let direction = if *event == TuiEvent::CursorUp { -1 } else { 1 };
                let width = self.state.last_content_width as usize;
                if let Some(target) = vertical_target(self.text, cursor, direction, width) {
                    self.state.cursor = target;
                }
                None
            }
            TuiEvent::Submit => Some(PromptEvent::Submit),
            _ => None,
        }
    }
}
