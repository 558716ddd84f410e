//! Search relay provisioning for one screen activation.
//!
//! Two states, Inactive and Active. Activation opens every configured search
//! relay the registry does not already hold and remembers which ones it
//! opened. Deactivation closes exactly those, once.

use crate::model::{RelayUrl, SearchRelay};
use crate::services::RelayRegistry;
use tracing::{info, warn};

/// Provisioner state.
/// Sum type: the opened set only exists while active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProvisionerState {
    /// Nothing opened.
    #[default]
    Inactive,
    /// Between activation and teardown.
    Active {
        /// Relays this activation opened, in the order they were opened.
        opened: Vec<RelayUrl>,
    },
}

/// Opens search relays on activation and closes exactly those on teardown.
#[derive(Debug, Clone, Default)]
pub struct RelayProvisioner {
    state: ProvisionerState,
}

impl RelayProvisioner {
    /// Inactive provisioner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &ProvisionerState {
        &self.state
    }

    /// True between activation and teardown.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ProvisionerState::Active { .. })
    }

    /// Relays opened by the current activation. Empty when inactive.
    pub fn opened(&self) -> &[RelayUrl] {
        match &self.state {
            ProvisionerState::Active { opened } => opened,
            ProvisionerState::Inactive => &[],
        }
    }

    /// Inactive → Active.
    ///
    /// Each relay is checked and opened independently. Calling this while
    /// already active is a no-op.
    pub fn activate<R: RelayRegistry + ?Sized>(
        &mut self,
        relays: &[SearchRelay],
        registry: &mut R,
    ) {
        if self.is_active() {
            warn!("relay provisioner already active; activation ignored");
            return;
        }

        let mut opened = Vec::new();
        for relay in relays {
            if registry.has(&relay.url) {
                info!(relay = %relay.url, "search relay already connected; leaving it alone");
                continue;
            }
            registry.connect(&relay.url, relay.settings);
            opened.push(relay.url.clone());
        }

        info!(
            configured = relays.len(),
            opened = opened.len(),
            "search relays provisioned"
        );
        self.state = ProvisionerState::Active { opened };
    }

    /// Active → Inactive.
    ///
    /// Closes every relay this activation opened, then forgets them. Calling
    /// this while inactive is a no-op, so a second teardown never closes
    /// anything.
    pub fn deactivate<R: RelayRegistry + ?Sized>(&mut self, registry: &mut R) {
        let ProvisionerState::Active { opened } = std::mem::take(&mut self.state) else {
            return;
        };

        for url in &opened {
            registry.disconnect(url);
        }
        info!(closed = opened.len(), "search relays released");
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "relay_provisioner_tests.rs"]
mod tests;
