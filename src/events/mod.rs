//! Event handling for keyboard, mouse and paste events.
//!
//! Terminal events are first translated into [`PickerAction`]s, which the
//! picker then applies. Keeping the two steps apart lets the mapping be
//! tested without any widget state.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::PickerAction;
pub use handler::{EventHandler, EventOutcome};
pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

/// The slice of picker state keyboard mapping depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    pub searchable: bool,
    pub search_focused: bool,
}
