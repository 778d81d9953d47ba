//! Bottom bar: key hints left, version right.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT};

const HINTS: &str = " Enter Summarize   Ctrl+U Clear   Esc Quit";
const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"), " ");

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        // Pad between the hint text and the version so the version hugs the
        // right border. Counted in chars; the bar is ASCII.
        let inner_width = area.width.saturating_sub(2) as usize;
        let used = HINTS.chars().count() + VERSION.chars().count();
        let padding = inner_width.saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(HINTS, Style::default().fg(HEADER_TEXT)),
            Span::raw(" ".repeat(padding)),
            Span::styled(VERSION, Style::default().fg(DIM_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}
