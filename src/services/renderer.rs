//! Result panel: the in-process result renderer.

use super::ResultRenderer;
use crate::model::RenderRequest;
use tracing::debug;

/// Holds the request the screen last handed off.
///
/// Counts mounts: a new mount happens whenever the render key changes,
/// which is when a real timeline would drop its pagination cursor.
#[derive(Debug, Clone, Default)]
pub struct ResultPanel {
    current: Option<RenderRequest>,
    mounts: usize,
}

impl ResultPanel {
    /// Panel with nothing mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request currently displayed, if any.
    pub fn current(&self) -> Option<&RenderRequest> {
        self.current.as_ref()
    }

    /// Number of times a different result set was mounted.
    pub fn mounts(&self) -> usize {
        self.mounts
    }

    /// Drop the displayed request. Used when no keyword is committed.
    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl ResultRenderer for ResultPanel {
    fn render(&mut self, request: &RenderRequest) {
        let key = request.subject.render_key();
        let remount = self
            .current
            .as_ref()
            .is_none_or(|current| current.subject.render_key() != key);

        if remount {
            self.mounts += 1;
            debug!(key = %key, "result panel mounted");
        }
        self.current = Some(request.clone());
    }
}
