//! Search screen state machines (pure).
//!
//! All state transitions are driven by explicit events and an injected
//! clock, so they are testable without a terminal.

pub mod debouncer;
pub mod keyword;
pub mod mode_selector;
pub mod query_descriptor;
pub mod relay_provisioner;
pub mod search_input;
pub mod search_screen;

// Re-export for convenience
pub use debouncer::{Debouncer, DEFAULT_QUIET_PERIOD};
pub use keyword::KeywordCommitter;
pub use mode_selector::ModeSelector;
pub use query_descriptor::{build_descriptor, build_render_request};
pub use relay_provisioner::{ProvisionerState, RelayProvisioner};
pub use search_input::SearchInput;
pub use search_screen::{Lifecycle, ScreenSettings, SearchScreen};
