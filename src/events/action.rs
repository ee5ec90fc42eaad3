//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or tested
//! without a terminal.

use crate::picker::search::{SearchEdit, SearchMotion};

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// Nothing to do
    None,

    // === Sheet ===
    /// Dismiss gesture (Esc)
    Dismiss,
    /// Explicit close affordance next to the search field
    CloseButton,
    /// Click outside the panel
    Backdrop,
    /// Grab the drag indicator at the given row
    BeginDrag(u16),
    /// Move a grabbed indicator to the given row
    DragTo(u16),
    /// Release the indicator
    EndDrag,

    // === Rows ===
    /// Activate the row under the keyboard cursor
    ActivateCursor,
    /// Activate a row by position
    ActivateRow(usize),
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    CursorFirst,
    CursorLast,
    /// Mouse wheel over the list, by n rows
    ScrollUp(usize),
    ScrollDown(usize),

    // === Search ===
    /// Switch keyboard focus between search field and list
    ToggleFocus,
    FocusSearch,
    Edit(SearchEdit),
    Motion(SearchMotion),
}
