use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::render::{Section, SectionBody, SectionTone};
use crate::tui::component::Component;
use crate::tui::wrap::{hard_wrap, hard_wrap_text, wrap_prose};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders one output section with tone-based styling.
///
/// The body is wrapped up front into exact rows (see [`SectionView::body_rows`]),
/// so the height the parent `OutputPane` reserves always matches what gets drawn.
/// Dialogue is hard-wrapped only where a line is wider than the pane; its own
/// line breaks and indentation survive untouched.
#[derive(Clone, Copy)]
pub struct SectionView<'a> {
    pub section: &'a Section,
}

impl<'a> SectionView<'a> {
    pub fn new(section: &'a Section) -> Self {
        Self { section }
    }

    /// Body rows for the given inner content width.
    pub fn body_rows(section: &Section, content_width: u16) -> Vec<String> {
        let width = content_width as usize;
        match &section.body {
            SectionBody::Text(text) => wrap_prose(text, width),
            SectionBody::Fields(_) => section
                .body_lines()
                .iter()
                .flat_map(|line| hard_wrap(line, width))
                .collect(),
            SectionBody::Preformatted(text) => hard_wrap_text(text, width),
        }
    }

    /// Height the section occupies at `width`, borders included.
    pub fn calculate_height(section: &Section, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }
        let rows = u16::try_from(Self::body_rows(section, content_width).len()).unwrap_or(u16::MAX);
        rows.max(1).saturating_add(VERTICAL_OVERHEAD)
    }

    fn styles(tone: SectionTone) -> (Style, Style) {
        match tone {
            SectionTone::Muted => (
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ),
            SectionTone::Error => (
                Style::default().fg(Color::Red),
                Style::default().fg(Color::Red),
            ),
            SectionTone::Normal => (
                Style::default().fg(Color::Gray),
                Style::default().fg(Color::Cyan),
            ),
        }
    }
}

impl<'a> Widget for SectionView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (text_style, border_style) = Self::styles(self.section.tone());

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));
        if let Some(heading) = self.section.heading {
            block = block.title(Line::styled(
                format!(" {heading} "),
                border_style.add_modifier(Modifier::BOLD),
            ));
        }

        let inner_area = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = Self::body_rows(self.section, inner_area.width)
            .into_iter()
            .map(Line::from)
            .collect();

        Paragraph::new(lines).style(text_style).render(inner_area, buf);
    }
}

impl<'a> Component for SectionView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{DIALOGUE_HEADING, SectionKind};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn dialogue(text: &str) -> Section {
        Section {
            kind: SectionKind::Dialogue,
            heading: Some(DIALOGUE_HEADING),
            body: SectionBody::Preformatted(text.to_string()),
        }
    }

    fn prose(text: &str) -> Section {
        Section {
            kind: SectionKind::Outline,
            heading: Some("Plot Outline"),
            body: SectionBody::Text(text.to_string()),
        }
    }

    fn rendered_rows(section: &Section, width: u16) -> Vec<String> {
        let height = SectionView::calculate_height(section, width);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                let mut view = SectionView::new(section);
                // Widget::render would win method lookup; go through Component
                Component::render(&mut view, f, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn height_counts_borders_and_rows() {
        assert_eq!(SectionView::calculate_height(&prose("short"), 40), 3);
        assert_eq!(SectionView::calculate_height(&dialogue("A\n\nB"), 40), 5);
    }

    #[test]
    fn degenerate_width_still_takes_a_row() {
        assert_eq!(SectionView::calculate_height(&prose("anything"), 3), 1);
    }

    #[test]
    fn oversized_dialogue_saturates_height() {
        let text = "A:\n".repeat(70_000);
        assert_eq!(SectionView::calculate_height(&dialogue(&text), 40), u16::MAX);
    }

    #[test]
    fn long_prose_grows_taller() {
        let text = "Two rival chefs are forced to share a food truck for a summer festival.";
        assert!(SectionView::calculate_height(&prose(text), 20) > 3);
    }

    #[test]
    fn dialogue_keeps_line_breaks_and_indentation() {
        let rows = rendered_rows(&dialogue("JOHN: Ready?\n  MARY: Not yet."), 30);
        assert!(rows[0].contains("Dialogue"));
        assert!(rows[1].contains("JOHN: Ready?"));
        // border, padding, then the two spaces of indentation
        assert!(rows[2].starts_with("│   MARY: Not yet."));
    }

    #[test]
    fn heading_is_drawn_in_the_border() {
        let rows = rendered_rows(&prose("A story."), 30);
        assert!(rows[0].contains("Plot Outline"));
        assert!(rows[1].contains("A story."));
    }
}
