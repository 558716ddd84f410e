//! Domain-level keyboard actions independent of key bindings.

use crate::model::{SearchMode, SortPreference};

/// Domain-level actions on the search screen.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Input editing
    /// Insert a character at the cursor. Default: any printable key
    InsertChar(char),
    /// Delete the character before the cursor. Default: Backspace
    DeleteBack,
    /// Move the cursor one character left. Default: ←
    CursorLeft,
    /// Move the cursor one character right. Default: →
    CursorRight,
    /// Move the cursor to the start of the input. Default: Home
    CursorHome,
    /// Move the cursor to the end of the input. Default: End
    CursorEnd,
    /// Clear the whole input. Default: Ctrl+u
    ClearInput,

    // Tabs
    /// Switch to the next search tab. Default: Tab
    NextTab,
    /// Switch to the previous search tab. Default: Shift+Tab
    PrevTab,
    /// Switch to a specific tab.
    SelectMode(SearchMode),

    // Sort
    /// Choose the profile sort order. Default: Ctrl+p (Popular), Ctrl+r (Recent)
    SelectSort(SortPreference),

    // Application
    /// Leave the search screen. Default: Esc/Ctrl+c
    Quit,
}
