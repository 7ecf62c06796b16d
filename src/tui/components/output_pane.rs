//! # OutputPane Component
//!
//! Scrollable right-hand column showing the rendered sections.
//!
//! `OutputPane` is a transient component (created each frame) that wraps
//! `&'a mut OutputPaneState` (persistent scroll state) and the sections
//! produced by `core::render`. Section heights are recomputed whenever the
//! content width or the section list changes.

use log::warn;
use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Widget};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::render::Section;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::SectionView;
use crate::tui::event::TuiEvent;

pub const OUTPUT_TITLE: &str = "Generated Screenplay";

/// Blank rows between consecutive sections.
const SECTION_GAP: u16 = 1;

/// Scroll state for the output pane. Persisted in `TuiState`.
#[derive(Default)]
pub struct OutputPaneState {
    pub scroll_state: ScrollViewState,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Total content height measured on the last render
    pub content_height: u16,
    /// Sections shown last frame; a change scrolls back to the top
    shown: Vec<Section>,
}

impl OutputPaneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        if self.scroll_state.offset().y > max_y {
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }
}

impl EventHandler for OutputPaneState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

/// Right-hand output column.
pub struct OutputPane<'a> {
    pub state: &'a mut OutputPaneState,
    pub sections: &'a [Section],
    pub is_loading: bool,
    pub spinner: &'a str,
}

impl<'a> OutputPane<'a> {
    pub fn new(
        state: &'a mut OutputPaneState,
        sections: &'a [Section],
        is_loading: bool,
        spinner: &'a str,
    ) -> Self {
        Self {
            state,
            sections,
            is_loading,
            spinner,
        }
    }
}

impl<'a> Component for OutputPane<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.is_loading {
            format!(" {OUTPUT_TITLE} {} ", self.spinner)
        } else {
            format!(" {OUTPUT_TITLE} ")
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::styled(title, Style::default().fg(Color::White)));
        let inner = block.inner(area);
        block.render(area, frame.buffer_mut());

        let changed = self.state.shown != self.sections;
        if changed {
            self.state.shown = self.sections.to_vec();
            self.state.scroll_state.scroll_to_top();
        }

        let content_width = inner.width.saturating_sub(1); // -1 for scrollbar
        let heights: Vec<u16> = self
            .sections
            .iter()
            .map(|section| SectionView::calculate_height(section, content_width))
            .collect();
        let gap_count = u16::try_from(heights.len().saturating_sub(1)).unwrap_or(u16::MAX);
        let gaps = SECTION_GAP.saturating_mul(gap_count);
        let total_height = heights
            .iter()
            .copied()
            .fold(gaps, u16::saturating_add);
        if changed && total_height == u16::MAX {
            warn!("Output is taller than {} rows; the tail is clipped", u16::MAX);
        }

        self.state.viewport_height = inner.height;
        self.state.content_height = total_height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (section, height) in self.sections.iter().zip(heights) {
            if y_offset >= total_height {
                break;
            }
            let height = height.min(total_height - y_offset);
            let rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(SectionView::new(section), rect);
            y_offset = y_offset.saturating_add(height).saturating_add(SECTION_GAP);
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
