//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod descriptor;
pub mod key_action;
pub mod keyword;
pub mod relay;
pub mod search_mode;

// Re-export for convenience
pub use descriptor::{
    FetchMethod, QueryDescriptor, RenderRequest, SubjectKind, POPULAR_SORT_DIRECTIVE,
};
pub use key_action::KeyAction;
pub use keyword::{keyword_from_path, search_path, InvalidKeyword, Keyword, SEARCH_PATH_PREFIX};
pub use relay::{InvalidRelayUrl, RelaySettings, RelayUrl, SearchRelay};
pub use search_mode::{SearchMode, SortPreference};
