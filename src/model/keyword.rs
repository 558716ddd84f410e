//! Committed search keyword and navigation path encoding.

use std::fmt;

/// Prefix of every navigation path written by the search screen.
pub const SEARCH_PATH_PREFIX: &str = "/search/";

/// A committed search keyword. Never empty.
///
/// Smart constructor enforces the non-empty invariant, so holding a
/// `Keyword` is proof that a federated query may be issued for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword(String);

impl Keyword {
    /// Smart constructor: rejects empty input.
    ///
    /// Whitespace is a keyword like any other. The stored value is the raw
    /// input, untrimmed, because the relay receives exactly what the user
    /// typed.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidKeyword> {
        let s = raw.into();
        if s.is_empty() {
            Err(InvalidKeyword::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// The keyword exactly as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a raw value is not a keyword.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidKeyword {
    /// Nothing was typed.
    #[error("Keyword cannot be empty")]
    Empty,
}

/// Escapes `urlencoding` emits for characters a URI component may carry as-is.
const UNRESERVED_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Build the navigation path for a keyword: `/search/<url-encoded keyword>`.
///
/// The segment is encoded as a URI component: `!'()*` stay literal, every
/// other character outside `A-Z a-z 0-9 - _ . ~` is percent-encoded.
pub fn search_path(keyword: &Keyword) -> String {
    let mut segment = urlencoding::encode(keyword.as_str()).into_owned();
    // A literal '%' is always encoded as %25, so these escapes can only
    // come from the marks themselves
    for (escaped, mark) in UNRESERVED_MARKS {
        if segment.contains(escaped) {
            segment = segment.replace(escaped, mark);
        }
    }
    format!("{SEARCH_PATH_PREFIX}{segment}")
}

/// Decode the keyword carried by a `/search/<...>` navigation path.
///
/// Returns `None` for paths outside `/search/`, for an empty keyword
/// segment, and for segments that do not decode to UTF-8.
pub fn keyword_from_path(path: &str) -> Option<String> {
    let encoded = path.strip_prefix(SEARCH_PATH_PREFIX)?;
    let encoded = encoded.trim_end_matches('/');
    if encoded.is_empty() {
        return None;
    }
    urlencoding::decode(encoded)
        .ok()
        .map(|decoded| decoded.into_owned())
        .filter(|decoded| !decoded.is_empty())
}
