//! Result panel widget.
//!
//! Shows the request handed to the result renderer. Fetching and painting
//! actual records happens downstream of this screen.

use crate::services::ResultPanel;
use crate::view::constants::{LABEL_NO_KEYWORD, LABEL_RESULTS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Results panel widget.
///
/// Shows the request the panel holds, or a hint when nothing is mounted.
pub struct ResultsView<'a> {
    panel: &'a ResultPanel,
}

impl<'a> ResultsView<'a> {
    /// View over `panel`.
    pub fn new(panel: &'a ResultPanel) -> Self {
        Self { panel }
    }
}

impl Widget for ResultsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(request) = self.panel.current() else {
            Paragraph::new(Line::styled(
                LABEL_NO_KEYWORD,
                Style::default().fg(Color::DarkGray),
            ))
            .block(Block::default().borders(Borders::ALL).title(LABEL_RESULTS))
            .wrap(Wrap { trim: true })
            .render(area, buf);
            return;
        };

        let title = format!(
            "{} · {} · #{}",
            LABEL_RESULTS,
            request.subject.render_key(),
            self.panel.mounts()
        );
        let body = serde_json::to_string_pretty(request)
            .unwrap_or_else(|err| format!("<unprintable request: {err}>"));

        Paragraph::new(body)
            .block(Block::default().borders(Borders::ALL).title(title))
            .render(area, buf);
    }
}
