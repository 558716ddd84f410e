//! In-process relay registry.

use super::RelayRegistry;
use crate::model::{RelaySettings, RelayUrl};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Registry that tracks connections by URL without opening sockets.
///
/// Stands in for the networking layer in the terminal front end: it knows
/// which relays are "open" and how many connect/disconnect calls were made.
#[derive(Debug, Clone, Default)]
pub struct LocalRelayRegistry {
    connections: BTreeMap<RelayUrl, RelaySettings>,
    connects: usize,
    disconnects: usize,
}

impl LocalRelayRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `urls` already connected, as if opened elsewhere.
    pub fn with_connected<'a>(urls: impl IntoIterator<Item = &'a RelayUrl>) -> Self {
        let connections = urls
            .into_iter()
            .map(|url| (url.clone(), RelaySettings::default()))
            .collect();
        Self {
            connections,
            ..Self::default()
        }
    }

    /// Open connections in URL order.
    pub fn connected(&self) -> impl Iterator<Item = (&RelayUrl, &RelaySettings)> {
        self.connections.iter()
    }

    /// Number of open connections.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// True when nothing is connected.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Total `connect` calls received.
    pub fn connect_calls(&self) -> usize {
        self.connects
    }

    /// Total `disconnect` calls received.
    pub fn disconnect_calls(&self) -> usize {
        self.disconnects
    }
}

impl RelayRegistry for LocalRelayRegistry {
    fn has(&self, url: &RelayUrl) -> bool {
        self.connections.contains_key(url)
    }

    fn connect(&mut self, url: &RelayUrl, settings: RelaySettings) {
        self.connects += 1;
        info!(relay = %url, read = settings.read, write = settings.write, "relay connected");
        self.connections.insert(url.clone(), settings);
    }

    fn disconnect(&mut self, url: &RelayUrl) {
        self.disconnects += 1;
        if self.connections.remove(url).is_some() {
            info!(relay = %url, "relay disconnected");
        } else {
            debug!(relay = %url, "disconnect for unknown relay ignored");
        }
    }
}
