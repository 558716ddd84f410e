//! Search tab and profile sort selection.

use crate::model::{SearchMode, SortPreference};

/// Active search mode plus the profile sort preference.
///
/// The sort preference is kept across mode switches; it is only shown and
/// applied while profile search is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeSelector {
    mode: SearchMode,
    sort: SortPreference,
}

impl ModeSelector {
    /// Post search, sorted by popularity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Active search mode.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Current profile sort preference.
    pub fn sort(&self) -> SortPreference {
        self.sort
    }

    /// Returns true if the mode changed.
    pub fn select_mode(&mut self, mode: SearchMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    /// Unconditional; has no query effect outside profile search.
    ///
    /// Returns true if the preference changed.
    pub fn set_sort_preference(&mut self, sort: SortPreference) -> bool {
        let changed = self.sort != sort;
        self.sort = sort;
        changed
    }

    /// Sort choices only apply to profile search.
    pub fn sort_options_visible(&self) -> bool {
        self.mode == SearchMode::ProfileSearch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_post_search_with_popular() {
        let selector = ModeSelector::new();
        assert_eq!(selector.mode(), SearchMode::PostSearch);
        assert_eq!(selector.sort(), SortPreference::Popular);
        assert!(!selector.sort_options_visible());
    }

    #[test]
    fn profile_search_shows_sort_options() {
        let mut selector = ModeSelector::new();
        assert!(selector.select_mode(SearchMode::ProfileSearch));
        assert!(selector.sort_options_visible());
    }

    #[test]
    fn reselecting_mode_reports_no_change() {
        let mut selector = ModeSelector::new();
        assert!(!selector.select_mode(SearchMode::PostSearch));
    }

    #[test]
    fn sort_is_retained_across_mode_switches() {
        let mut selector = ModeSelector::new();
        selector.select_mode(SearchMode::ProfileSearch);
        selector.set_sort_preference(SortPreference::Recent);
        selector.select_mode(SearchMode::PostSearch);

        assert!(!selector.sort_options_visible());
        assert_eq!(selector.sort(), SortPreference::Recent);

        selector.select_mode(SearchMode::ProfileSearch);
        assert_eq!(selector.sort(), SortPreference::Recent);
    }

    #[test]
    fn sort_can_be_set_in_post_search() {
        let mut selector = ModeSelector::new();
        assert!(selector.set_sort_preference(SortPreference::Recent));
        assert_eq!(selector.sort(), SortPreference::Recent);
    }
}
