//! Relay identifiers and connection settings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of a relay. Doubles as its identifier in the registry.
///
/// Only `ws://` and `wss://` URLs are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RelayUrl(String);

impl RelayUrl {
    /// Smart constructor: trims, then validates scheme and host presence.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRelayUrl> {
        let raw = raw.into();
        let url = raw.trim();
        if url.is_empty() {
            return Err(InvalidRelayUrl::Empty);
        }

        let rest = url
            .strip_prefix("wss://")
            .or_else(|| url.strip_prefix("ws://"))
            .ok_or_else(|| InvalidRelayUrl::UnsupportedScheme(url.to_string()))?;

        if rest.trim_end_matches('/').is_empty() {
            return Err(InvalidRelayUrl::MissingHost(url.to_string()));
        }

        Ok(Self(url.to_string()))
    }

    /// The validated URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelayUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RelayUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        RelayUrl::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Why a string is not a usable relay URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRelayUrl {
    /// Nothing but whitespace.
    #[error("Relay URL cannot be empty")]
    Empty,
    /// Scheme is not `ws` or `wss`.
    #[error("Relay URL must use ws:// or wss://: {0}")]
    UnsupportedScheme(String),
    /// Scheme with nothing after it.
    #[error("Relay URL has no host: {0}")]
    MissingHost(String),
}

/// Connection info handed to the registry alongside the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaySettings {
    /// Relay answers queries.
    pub read: bool,
    /// Relay accepts published events.
    pub write: bool,
}

impl RelaySettings {
    /// Settings for a relay used only to answer queries.
    pub const READ_ONLY: Self = Self {
        read: true,
        write: false,
    };
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self::READ_ONLY
    }
}

/// A search-capable relay from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRelay {
    /// Where to connect.
    pub url: RelayUrl,
    /// How to connect.
    pub settings: RelaySettings,
}

impl SearchRelay {
    /// Relay at `url` with explicit settings.
    pub fn new(url: RelayUrl, settings: RelaySettings) -> Self {
        Self { url, settings }
    }

    /// Read-only search relay at `url`.
    pub fn read_only(url: RelayUrl) -> Self {
        Self::new(url, RelaySettings::READ_ONLY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_url_accepts_wss() {
        let url = RelayUrl::new("wss://relay.nostr.band").expect("valid url");
        assert_eq!(url.as_str(), "wss://relay.nostr.band");
    }

    #[test]
    fn relay_url_accepts_ws_with_port() {
        assert!(RelayUrl::new("ws://localhost:7777").is_ok());
    }

    #[test]
    fn relay_url_trims_whitespace() {
        let url = RelayUrl::new("  wss://search.nos.today \n").expect("valid url");
        assert_eq!(url.as_str(), "wss://search.nos.today");
    }

    #[test]
    fn relay_url_rejects_empty() {
        assert_eq!(RelayUrl::new("  "), Err(InvalidRelayUrl::Empty));
    }

    #[test]
    fn relay_url_rejects_http_scheme() {
        assert!(matches!(
            RelayUrl::new("https://relay.nostr.band"),
            Err(InvalidRelayUrl::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn relay_url_rejects_missing_host() {
        assert!(matches!(
            RelayUrl::new("wss:///"),
            Err(InvalidRelayUrl::MissingHost(_))
        ));
    }

    #[test]
    fn relay_url_deserialize_validates() {
        #[derive(Deserialize)]
        struct Wrapper {
            url: RelayUrl,
        }

        let ok: Wrapper = toml::from_str(r#"url = "wss://relay.nostr.band""#).expect("valid");
        assert_eq!(ok.url.as_str(), "wss://relay.nostr.band");

        let bad = toml::from_str::<Wrapper>(r#"url = "ftp://nope""#);
        assert!(bad.is_err(), "Invalid scheme should fail deserialization");
    }

    #[test]
    fn default_settings_are_read_only() {
        let settings = RelaySettings::default();
        assert!(settings.read);
        assert!(!settings.write);
    }
}
