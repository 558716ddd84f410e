//! Test doubles and acceptance harness.
//!
//! Recording collaborators capture every call the search screen makes, and
//! `AcceptanceTestHarness` drives a `TuiApp<TestBackend>` with a synthetic
//! clock so debounce timing is deterministic.

use crate::model::{RelaySettings, RelayUrl, RenderRequest};
use crate::services::{
    HistoryNavigator, LocalRelayRegistry, Navigator, RelayRegistry, ResultRenderer,
};
use crate::state::ScreenSettings;
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string representation for assertions.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

// ===== Recording collaborators =====

/// Navigator that starts at a path and records every write.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    start: String,
    paths: Vec<String>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            start: path.to_string(),
            paths: Vec::new(),
        }
    }

    /// Paths written via `set_path`, in order. Excludes the start path.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

impl Navigator for RecordingNavigator {
    fn initial_keyword(&self) -> Option<String> {
        crate::model::keyword_from_path(&self.start)
    }

    fn set_path(&mut self, path: &str) {
        self.paths.push(path.to_string());
    }
}

/// A call received by [`RecordingRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryCall {
    Connect(RelayUrl, RelaySettings),
    Disconnect(RelayUrl),
}

/// Registry that records calls and tracks connection state.
#[derive(Debug, Clone, Default)]
pub struct RecordingRegistry {
    connected: BTreeSet<RelayUrl>,
    calls: Vec<RegistryCall>,
}

impl RecordingRegistry {
    /// Registry with `urls` connected before any call is recorded.
    pub fn with_connected<'a>(urls: impl IntoIterator<Item = &'a RelayUrl>) -> Self {
        Self {
            connected: urls.into_iter().cloned().collect(),
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[RegistryCall] {
        &self.calls
    }

    /// URLs passed to `connect`, in call order.
    pub fn connected_urls(&self) -> Vec<RelayUrl> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RegistryCall::Connect(url, _) => Some(url.clone()),
                RegistryCall::Disconnect(_) => None,
            })
            .collect()
    }

    /// URLs passed to `disconnect`, in call order.
    pub fn disconnected(&self) -> Vec<RelayUrl> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RegistryCall::Disconnect(url) => Some(url.clone()),
                RegistryCall::Connect(..) => None,
            })
            .collect()
    }
}

impl RelayRegistry for RecordingRegistry {
    fn has(&self, url: &RelayUrl) -> bool {
        self.connected.contains(url)
    }

    fn connect(&mut self, url: &RelayUrl, settings: RelaySettings) {
        self.connected.insert(url.clone());
        self.calls.push(RegistryCall::Connect(url.clone(), settings));
    }

    fn disconnect(&mut self, url: &RelayUrl) {
        self.connected.remove(url);
        self.calls.push(RegistryCall::Disconnect(url.clone()));
    }
}

/// Renderer that keeps every request it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    requests: Vec<RenderRequest>,
}

impl RecordingRenderer {
    pub fn requests(&self) -> &[RenderRequest] {
        &self.requests
    }
}

impl ResultRenderer for RecordingRenderer {
    fn render(&mut self, request: &RenderRequest) {
        self.requests.push(request.clone());
    }
}

// ===== Acceptance harness =====

/// Drives a `TuiApp<TestBackend>` with a synthetic clock.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    now: Instant,
}

impl AcceptanceTestHarness {
    /// App at 80x24 opened at `path`, with `registry` as the shared registry.
    pub fn open(path: &str, settings: &ScreenSettings, registry: LocalRelayRegistry) -> Self {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let app =
            TuiApp::with_terminal(terminal, settings, HistoryNavigator::new(path), registry);
        Self {
            app,
            now: Instant::now(),
        }
    }

    pub fn app(&self) -> &TuiApp<TestBackend> {
        &self.app
    }

    /// Press a key at the current synthetic time. Returns true on quit.
    pub fn press(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.app.handle_key(KeyEvent::new(code, modifiers), self.now)
    }

    /// Type `text` one char per `gap`, ticking after each key.
    pub fn type_text(&mut self, text: &str, gap: Duration) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch), KeyModifiers::NONE);
            self.app.tick(self.now);
            self.now += gap;
        }
    }

    /// Advance the synthetic clock and tick.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
        self.app.tick(self.now);
    }

    /// Render and return the screen contents.
    pub fn render(&mut self) -> String {
        self.app.draw().unwrap();
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
