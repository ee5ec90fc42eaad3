//! Overlay controller for slide-up sheets.
//!
//! Sheets are registered under a caller-chosen [`SheetId`] in a
//! [`SheetManager`]. The manager owns every sheet's open state; widgets only
//! send intents (show/hide/drag) through a [`SheetHandle`].
//!
//! - `registry` - `SheetManager` and `SheetHandle`
//! - `state` - per-sheet visibility and gesture bookkeeping
//! - `render` - bottom-anchored panel geometry and frame

mod registry;
mod render;
mod state;

use std::fmt;

pub use registry::{SheetHandle, SheetManager};
pub use render::{SheetLayout, render_sheet, sheet_area};
pub use state::{DISMISS_DRAG_ROWS, SheetProps, SheetState};

/// Identifier scoping open/close calls to one sheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetId(String);

impl SheetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SheetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SheetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&SheetId> for SheetId {
    fn from(id: &SheetId) -> Self {
        id.clone()
    }
}

/// Show the sheet registered under `id`.
///
/// For callers outside the widget tree. Unknown ids are a no-op.
pub fn open(manager: &SheetManager, id: impl Into<SheetId>) -> bool {
    manager.show(&id.into())
}

/// Hide the sheet registered under `id`. Idempotent.
pub fn close(manager: &SheetManager, id: impl Into<SheetId>) -> bool {
    manager.hide(&id.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_target_registry() {
        let manager = SheetManager::new();
        let _handle = manager.register("colors", SheetProps::default()).unwrap();

        assert!(open(&manager, "colors"));
        assert!(manager.is_open(&SheetId::from("colors")));

        assert!(close(&manager, "colors"));
        assert!(!close(&manager, "colors"));
        assert!(!manager.is_open(&SheetId::from("colors")));
    }

    #[test]
    fn test_free_functions_unknown_id_is_noop() {
        let manager = SheetManager::new();
        assert!(!open(&manager, "missing"));
        assert!(!close(&manager, "missing"));
    }
}
