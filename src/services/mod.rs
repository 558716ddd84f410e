//! Collaborators of the search screen.
//!
//! The screen only talks to navigation, the relay registry and the result
//! renderer through these traits. Each has an in-process implementation used
//! by the terminal front end.

use crate::model::{RelaySettings, RelayUrl, RenderRequest};

pub mod navigation;
pub mod registry;
pub mod renderer;

pub use navigation::HistoryNavigator;
pub use registry::LocalRelayRegistry;
pub use renderer::ResultPanel;

/// Addressable navigation state.
pub trait Navigator {
    /// Keyword carried by the location the screen was opened at.
    ///
    /// Read once per activation.
    fn initial_keyword(&self) -> Option<String>;

    /// Move to `path`. Fire-and-forget.
    fn set_path(&mut self, path: &str);
}

/// Shared registry of open relay connections.
///
/// Other parts of an application may hold connections in the same registry,
/// so callers must only disconnect what they connected.
pub trait RelayRegistry {
    /// Whether `url` is connected, by anyone.
    fn has(&self, url: &RelayUrl) -> bool;

    /// Open a connection. Failures are the registry's concern.
    fn connect(&mut self, url: &RelayUrl, settings: RelaySettings);

    /// Close a connection. Failures are the registry's concern.
    fn disconnect(&mut self, url: &RelayUrl);
}

/// Fetches and paints the records matching a render request.
pub trait ResultRenderer {
    /// Show results for `request`, replacing whatever was shown.
    fn render(&mut self, request: &RenderRequest);
}
