use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{PickerError, Result};
use crate::log;

use super::SheetId;
use super::state::{SheetProps, SheetState};

#[derive(Debug)]
struct Entry {
    id: SheetId,
    /// Distinguishes successive registrations of the same id
    generation: u64,
    state: SheetState,
}

#[derive(Debug, Default)]
struct Registry {
    // Registration order is kept so open_sheets() is stable
    sheets: Vec<Entry>,
    next_generation: u64,
}

impl Registry {
    fn get_mut(&mut self, id: &SheetId) -> Option<&mut SheetState> {
        self.sheets
            .iter_mut()
            .find(|entry| entry.id == *id)
            .map(|entry| &mut entry.state)
    }

    fn get(&self, id: &SheetId) -> Option<&SheetState> {
        self.sheets
            .iter()
            .find(|entry| entry.id == *id)
            .map(|entry| &entry.state)
    }

    /// Drop every entry `matches` accepts. Returns whether any was removed.
    fn remove(&mut self, matches: impl Fn(&Entry) -> bool) -> bool {
        let before = self.sheets.len();
        self.sheets.retain(|entry| !matches(entry));
        self.sheets.len() != before
    }
}

/// Registry mapping sheet identifiers to their open state.
///
/// Cloning is cheap and every clone sees the same sheets. Widgets register
/// on mount and unregister on unmount; anything holding the manager (or a
/// [`SheetHandle`]) can open and close sheets by id.
#[derive(Debug, Clone, Default)]
pub struct SheetManager {
    inner: Arc<Mutex<Registry>>,
}

impl SheetManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        // State is plain data, a panic mid-update cannot leave it invalid
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a hidden sheet under `id`.
    pub fn register(&self, id: impl Into<SheetId>, props: SheetProps) -> Result<SheetHandle> {
        let id = id.into();
        let mut registry = self.lock();

        if registry.get(&id).is_some() {
            log::log_sheet(id.as_str(), "duplicate registration rejected");
            return Err(PickerError::DuplicateSheet(id));
        }

        let generation = registry.next_generation;
        registry.next_generation += 1;
        registry.sheets.push(Entry {
            id: id.clone(),
            generation,
            state: SheetState::new(props),
        });
        log::log_sheet(id.as_str(), "registered");

        Ok(SheetHandle {
            id,
            generation,
            manager: self.clone(),
        })
    }

    /// Remove `id` from the registry. Returns false if it was not registered.
    pub fn unregister(&self, id: &SheetId) -> bool {
        let removed = self.lock().remove(|entry| entry.id == *id);
        if removed {
            log::log_sheet(id.as_str(), "unregistered");
        }
        removed
    }

    /// Unregister only the registration that produced `generation`.
    fn unregister_generation(&self, id: &SheetId, generation: u64) -> bool {
        let removed = self
            .lock()
            .remove(|entry| entry.id == *id && entry.generation == generation);
        if removed {
            log::log_sheet(id.as_str(), "unregistered");
        } else {
            log::log_sheet(id.as_str(), "stale unregister ignored");
        }
        removed
    }

    pub fn is_registered(&self, id: &SheetId) -> bool {
        self.lock().get(id).is_some()
    }

    /// Present the sheet. Returns true if it was hidden before.
    pub fn show(&self, id: &SheetId) -> bool {
        self.update(id, "show", SheetState::show)
    }

    /// Dismiss the sheet. Returns true if it was visible before.
    pub fn hide(&self, id: &SheetId) -> bool {
        self.update(id, "hide", SheetState::hide)
    }

    pub fn is_open(&self, id: &SheetId) -> bool {
        self.lock().get(id).map(SheetState::is_visible).unwrap_or(false)
    }

    /// Identifiers of all visible sheets, in registration order.
    pub fn open_sheets(&self) -> Vec<SheetId> {
        self.lock()
            .sheets
            .iter()
            .filter(|entry| entry.state.is_visible())
            .map(|entry| entry.id.clone())
            .collect()
    }

    /// Read a sheet's state. Returns None for unknown ids.
    pub fn with_state<R>(&self, id: &SheetId, f: impl FnOnce(&SheetState) -> R) -> Option<R> {
        self.lock().get(id).map(f)
    }

    fn update(&self, id: &SheetId, what: &str, f: impl FnOnce(&mut SheetState) -> bool) -> bool {
        let mut registry = self.lock();
        match registry.get_mut(id) {
            Some(state) => {
                let changed = f(state);
                if changed {
                    log::log_sheet(id.as_str(), what);
                }
                changed
            }
            None => {
                log::log_sheet(id.as_str(), &format!("{} ignored: not registered", what));
                false
            }
        }
    }
}

/// Controller for one registered sheet, returned on mount.
#[derive(Debug, Clone)]
pub struct SheetHandle {
    id: SheetId,
    generation: u64,
    manager: SheetManager,
}

impl SheetHandle {
    pub fn id(&self) -> &SheetId {
        &self.id
    }

    pub fn manager(&self) -> &SheetManager {
        &self.manager
    }

    pub fn open(&self) -> bool {
        self.manager.show(&self.id)
    }

    pub fn close(&self) -> bool {
        self.manager.hide(&self.id)
    }

    pub fn is_open(&self) -> bool {
        self.manager.is_open(&self.id)
    }

    pub fn props(&self) -> SheetProps {
        self.manager
            .with_state(&self.id, |state| state.props().clone())
            .unwrap_or_default()
    }

    pub fn dismiss(&self) -> bool {
        self.manager.update(&self.id, "dismiss", SheetState::dismiss)
    }

    pub fn drag_offset(&self) -> u16 {
        self.manager
            .with_state(&self.id, SheetState::drag_offset)
            .unwrap_or(0)
    }

    pub fn is_dragging(&self) -> bool {
        self.manager
            .with_state(&self.id, SheetState::is_dragging)
            .unwrap_or(false)
    }

    pub fn begin_drag(&self, row: u16) -> bool {
        self.manager
            .update(&self.id, "drag start", |state| state.begin_drag(row))
    }

    pub fn drag_to(&self, row: u16) -> bool {
        let mut registry = self.manager.lock();
        registry
            .get_mut(&self.id)
            .map(|state| state.drag_to(row))
            .unwrap_or(false)
    }

    /// Returns true if releasing the drag dismissed the sheet.
    pub fn end_drag(&self) -> bool {
        self.manager.update(&self.id, "drag dismiss", SheetState::end_drag)
    }

    pub fn begin_child_scroll(&self) {
        let mut registry = self.manager.lock();
        if let Some(state) = registry.get_mut(&self.id) {
            state.begin_child_scroll();
        }
    }

    /// Scroll momentum of the embedded list has ended.
    pub fn handle_child_scroll_end(&self) {
        let mut registry = self.manager.lock();
        if let Some(state) = registry.get_mut(&self.id) {
            state.handle_child_scroll_end();
        }
    }

    /// Remove this sheet from its registry. A handle whose registration
    /// was already replaced leaves the newer sheet alone.
    pub fn unregister(&self) -> bool {
        self.manager.unregister_generation(&self.id, self.generation)
    }
}
