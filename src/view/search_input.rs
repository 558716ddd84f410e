//! Search input widget for rendering the search bar.

use crate::state::SearchInput;
use crate::view::constants::{LABEL_SEARCH, LABEL_SEARCH_PLACEHOLDER};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Search input widget.
/// Renders the input text with a block cursor, or a placeholder when empty.
pub struct SearchInputWidget<'a> {
    input: &'a SearchInput,
    pending: bool,
}

impl<'a> SearchInputWidget<'a> {
    /// Widget over `input`, not pending.
    pub fn new(input: &'a SearchInput) -> Self {
        Self {
            input,
            pending: false,
        }
    }

    /// Mark the input as not yet committed (title shows an ellipsis).
    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }
}

impl Widget for SearchInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cursor_style = Style::default()
            .bg(Color::White)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);

        let line = if self.input.text().is_empty() {
            Line::from(vec![
                Span::styled(" ", cursor_style),
                Span::styled(
                    LABEL_SEARCH_PLACEHOLDER,
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        } else {
            // Split text into before/at/after cursor
            let cursor = self.input.cursor();
            let inner_width = usize::from(area.width.saturating_sub(2));
            let skip = scroll_offset(self.input.text(), cursor, inner_width);
            let before: String = self
                .input
                .text()
                .chars()
                .skip(skip)
                .take(cursor - skip)
                .collect();
            let at: String = self
                .input
                .text()
                .chars()
                .nth(cursor)
                .map(String::from)
                .unwrap_or_else(|| " ".to_string());
            let after: String = self.input.text().chars().skip(cursor + 1).collect();

            Line::from(vec![
                Span::raw(before),
                Span::styled(at, cursor_style),
                Span::raw(after),
            ])
        };

        let title = if self.pending {
            format!("{LABEL_SEARCH} …")
        } else {
            LABEL_SEARCH.to_string()
        };

        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL).title(title))
            .render(area, buf);
    }
}

/// Number of leading chars to hide so the cursor cell fits in `width` columns.
fn scroll_offset(text: &str, cursor: usize, width: usize) -> usize {
    if width == 0 {
        return cursor;
    }
    let widths: Vec<usize> = text
        .chars()
        .take(cursor)
        .map(|ch| ch.width().unwrap_or(0))
        .collect();

    // One column is reserved for the cursor itself
    let mut used = 1;
    let mut skip = widths.len();
    for w in widths.iter().rev() {
        if used + w > width {
            break;
        }
        used += w;
        skip -= 1;
    }
    skip
}
