//! Terminal front end for the search screen (impure shell).
//!
//! Owns the terminal, the in-process collaborators and one [`SearchScreen`]
//! activation. All search behavior lives in `crate::state`; this module only
//! turns terminal events into screen events and paints the result.

pub mod constants;
pub mod results;
pub mod search_input;
pub mod status;
pub mod tabs;

pub use results::ResultsView;
pub use search_input::SearchInputWidget;
pub use status::StatusBar;

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::services::{HistoryNavigator, LocalRelayRegistry, ResultPanel};
use crate::state::{ScreenSettings, SearchScreen};
use constants::{
    IDLE_TICK_MS, SEARCH_INPUT_HEIGHT, SORT_OPTIONS_HEIGHT, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT,
};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    screen: SearchScreen,
    navigator: HistoryNavigator,
    registry: LocalRelayRegistry,
    results: ResultPanel,
    key_bindings: KeyBindings,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Set up the terminal in raw mode with alternate screen and activate
    /// the search screen.
    pub fn new(
        settings: &ScreenSettings,
        navigator: HistoryNavigator,
        registry: LocalRelayRegistry,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableBracketedPaste)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, settings, navigator, registry))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (Esc or Ctrl+C). The poll timeout shrinks
    /// to the remaining debounce time while a commit is pending, so the
    /// keyword settles on time without busy looping.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self.poll_timeout(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                    }
                    Event::Paste(text) => {
                        self.screen.set_input(text, Instant::now());
                    }
                    _ => {}
                }
            }

            self.tick(Instant::now());
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an existing terminal and activate the screen.
    pub fn with_terminal(
        terminal: Terminal<B>,
        settings: &ScreenSettings,
        navigator: HistoryNavigator,
        mut registry: LocalRelayRegistry,
    ) -> Self {
        let screen = SearchScreen::activate(settings, &navigator, &mut registry);
        let mut app = Self {
            terminal,
            screen,
            navigator,
            registry,
            results: ResultPanel::new(),
            key_bindings: KeyBindings::default(),
        };
        app.sync_results();
        app
    }

    /// The search screen activation.
    pub fn screen(&self) -> &SearchScreen {
        &self.screen
    }

    /// Navigation history.
    pub fn navigator(&self) -> &HistoryNavigator {
        &self.navigator
    }

    /// Relay connections.
    pub fn registry(&self) -> &LocalRelayRegistry {
        &self.registry
    }

    /// What the results panel is showing.
    pub fn results(&self) -> &ResultPanel {
        &self.results
    }

    /// Underlying terminal, for inspecting test buffers.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if the app should quit. The screen is torn down before
    /// returning true.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let Some(action) = self.key_bindings.resolve(key) else {
            debug!(?key, "unbound key ignored");
            return false;
        };

        if action == KeyAction::Quit {
            self.shutdown();
            return true;
        }

        self.screen.handle_action(action, now);
        self.sync_results();
        false
    }

    /// Deliver settled input to the screen and refresh the result panel.
    pub fn tick(&mut self, now: Instant) {
        if self.screen.tick(now, &mut self.navigator) {
            debug!(path = self.navigator.current_path(), "keyword changed");
        }
        self.sync_results();
    }

    /// Tear the screen down. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.screen.deactivate(&mut self.registry);
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        let idle = Duration::from_millis(IDLE_TICK_MS);
        self.screen
            .time_until_commit(now)
            .map_or(idle, |remaining| remaining.min(idle))
    }

    fn sync_results(&mut self) {
        if !self.screen.present(&mut self.results) {
            self.results.clear();
        }
    }

    /// Render one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let screen = &self.screen;
        let results = &self.results;
        let path = self.navigator.current_path();
        let relays_open = self.registry.len();
        let relays_owned = screen.provisioner().opened().len();
        let pending = screen.time_until_commit(Instant::now()).is_some();

        self.terminal.draw(|frame| {
            let sort_height = if screen.sort_options_visible() {
                SORT_OPTIONS_HEIGHT
            } else {
                0
            };
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(SEARCH_INPUT_HEIGHT),
                    Constraint::Length(TAB_BAR_HEIGHT),
                    Constraint::Length(sort_height),
                    Constraint::Min(0),
                    Constraint::Length(STATUS_BAR_HEIGHT),
                ])
                .split(frame.area());

            frame.render_widget(
                SearchInputWidget::new(screen.input()).pending(pending),
                chunks[0],
            );
            tabs::render_tab_bar(frame, chunks[1], screen.mode());
            if screen.sort_options_visible() {
                tabs::render_sort_options(frame, chunks[2], screen.sort());
            }
            frame.render_widget(ResultsView::new(results), chunks[3]);
            frame.render_widget(StatusBar::new(path, relays_open, relays_owned), chunks[4]);
        })?;

        Ok(())
    }
}

/// Activate the search screen in the real terminal and run until quit.
///
/// The screen is always torn down and the terminal restored, even when the
/// event loop fails.
pub fn run_search_screen(
    settings: &ScreenSettings,
    navigator: HistoryNavigator,
    registry: LocalRelayRegistry,
) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(settings, navigator, registry) {
        Ok(app) => app,
        Err(err) => {
            restore_terminal()?;
            return Err(err);
        }
    };

    let result = app.run();
    app.shutdown();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, bracketed paste, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableBracketedPaste)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
