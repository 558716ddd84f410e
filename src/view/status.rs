//! Status bar: navigation path, relay counts and key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const KEY_HINTS: &str = "Tab: mode  ^U: clear  Esc: quit";

/// Bottom line: location, relay counts and key hints.
pub struct StatusBar<'a> {
    path: &'a str,
    relays_open: usize,
    relays_owned: usize,
}

impl<'a> StatusBar<'a> {
    /// `relays_open` counts every registry connection; `relays_owned` only
    /// those this screen opened.
    pub fn new(path: &'a str, relays_open: usize, relays_owned: usize) -> Self {
        Self {
            path,
            relays_open,
            relays_owned,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.path.to_string(), Style::default().fg(Color::Cyan)),
            Span::raw(" │ "),
            Span::raw(format!(
                "relays: {} open ({} for search)",
                self.relays_open, self.relays_owned
            )),
            Span::raw(" │ "),
            Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
