//! Layout dimensions and UI labels for the search screen.

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the tab bar in lines (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the sort option line, shown in profile search only.
pub const SORT_OPTIONS_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Poll timeout when no commit is pending.
pub const IDLE_TICK_MS: u64 = 250;

// ===== Labels =====

/// Search box title.
pub const LABEL_SEARCH: &str = "Search";
/// Shown in the empty search box.
pub const LABEL_SEARCH_PLACEHOLDER: &str = "Search...";
/// Post search tab.
pub const LABEL_POSTS: &str = "Posts";
/// Profile search tab.
pub const LABEL_PEOPLE: &str = "People";
/// Sort options prefix.
pub const LABEL_SORT: &str = "Sort";
/// Popular sort option.
pub const LABEL_POPULAR: &str = "Popular";
/// Recent sort option.
pub const LABEL_RECENT: &str = "Recent";
/// Results panel title.
pub const LABEL_RESULTS: &str = "Results";
/// Results panel hint before anything is committed.
pub const LABEL_NO_KEYWORD: &str = "Type to search. Results appear once you stop typing.";
