//! In-process navigation history.

use super::Navigator;
use crate::model::keyword_from_path;
use tracing::debug;

/// Navigator backed by a simple history stack.
///
/// Every `set_path` pushes; nothing is ever replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryNavigator {
    history: Vec<String>,
}

impl HistoryNavigator {
    /// Start at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            history: vec![path.into()],
        }
    }

    /// Current location.
    pub fn current_path(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("/")
    }

    /// All locations visited, oldest first, starting location included.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Number of `set_path` calls made so far.
    pub fn writes(&self) -> usize {
        self.history.len().saturating_sub(1)
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new("/search")
    }
}

impl Navigator for HistoryNavigator {
    fn initial_keyword(&self) -> Option<String> {
        keyword_from_path(self.current_path())
    }

    fn set_path(&mut self, path: &str) {
        debug!(path, "navigate");
        self.history.push(path.to_string());
    }
}
