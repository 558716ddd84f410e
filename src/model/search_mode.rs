//! Search modes and the profile sort preference.

use serde::{Deserialize, Serialize};

/// Which result set the screen is showing. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Posts matching the keyword. Initial mode.
    #[default]
    PostSearch,
    /// Profiles matching the keyword.
    ProfileSearch,
}

impl SearchMode {
    /// All modes in tab order.
    pub const ALL: [SearchMode; 2] = [SearchMode::PostSearch, SearchMode::ProfileSearch];

    /// Position of this mode in the tab bar.
    pub fn tab_index(self) -> usize {
        match self {
            SearchMode::PostSearch => 0,
            SearchMode::ProfileSearch => 1,
        }
    }

    /// Next mode in tab order, wrapping around.
    pub fn next(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.tab_index() + 1) % len]
    }

    /// Previous mode in tab order, wrapping around.
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.tab_index() + len - 1) % len]
    }
}

/// Ordering of profile results. Only applied in [`SearchMode::ProfileSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPreference {
    /// Relay-side popularity order. Initial preference.
    #[default]
    Popular,
    /// Newest first, sorted by the renderer.
    Recent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_post_search() {
        assert_eq!(SearchMode::default(), SearchMode::PostSearch);
    }

    #[test]
    fn default_sort_is_popular() {
        assert_eq!(SortPreference::default(), SortPreference::Popular);
    }

    #[test]
    fn tab_index_matches_all_order() {
        for (idx, mode) in SearchMode::ALL.iter().enumerate() {
            assert_eq!(mode.tab_index(), idx);
        }
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(SearchMode::PostSearch.next(), SearchMode::ProfileSearch);
        assert_eq!(SearchMode::ProfileSearch.next(), SearchMode::PostSearch);
        assert_eq!(SearchMode::PostSearch.prev(), SearchMode::ProfileSearch);
        assert_eq!(SearchMode::ProfileSearch.prev(), SearchMode::PostSearch);
    }

    #[test]
    fn prev_undoes_next() {
        for mode in SearchMode::ALL {
            assert_eq!(mode.next().prev(), mode);
            assert_eq!(mode.prev().next(), mode);
        }
    }
}
