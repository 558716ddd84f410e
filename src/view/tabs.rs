//! Search mode tab bar and profile sort options.

use crate::model::{SearchMode, SortPreference};
use crate::view::constants::{LABEL_PEOPLE, LABEL_POPULAR, LABEL_POSTS, LABEL_RECENT, LABEL_SORT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Tab label for a mode.
pub fn mode_label(mode: SearchMode) -> &'static str {
    match mode {
        SearchMode::PostSearch => LABEL_POSTS,
        SearchMode::ProfileSearch => LABEL_PEOPLE,
    }
}

/// Render the Posts / People tab bar with `selected` highlighted.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, selected: SearchMode) {
    let titles: Vec<Line> = SearchMode::ALL
        .iter()
        .map(|mode| Line::from(mode_label(*mode)))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected.tab_index());

    frame.render_widget(tabs, area);
}

/// Render the right-aligned sort option line.
///
/// The selected option is highlighted; key hints follow each option.
pub fn render_sort_options(frame: &mut Frame, area: Rect, sort: SortPreference) {
    let option = |label: &'static str, hint: &'static str, selected: bool| {
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        vec![
            Span::styled(label, style),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]
    };

    let mut spans = vec![Span::raw(format!("{LABEL_SORT}: "))];
    spans.extend(option(
        LABEL_POPULAR,
        " (^P)",
        sort == SortPreference::Popular,
    ));
    spans.push(Span::raw("  "));
    spans.extend(option(LABEL_RECENT, " (^R)", sort == SortPreference::Recent));

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}
