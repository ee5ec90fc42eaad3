//! Central event handler that coordinates keyboard, mouse and paste events.

use crossterm::event::{Event, KeyEventKind};

use crate::picker::search::SearchEdit;
use crate::tui::InteractionRegistry;

use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;
use super::{KeyContext, PickerAction};

/// Result of feeding one terminal event to a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The picker did not use the event; the host may handle it
    Ignored,
    /// The picker used the event
    Consumed,
    /// The sheet was closed without a selection
    Closed,
    /// A row was committed; the sheet has been asked to close
    Selected(usize),
}

impl EventOutcome {
    pub fn is_consumed(&self) -> bool {
        !matches!(self, EventOutcome::Ignored)
    }
}

/// Translates crossterm events into picker actions.
pub struct EventHandler;

impl EventHandler {
    pub fn handle_event(
        ctx: &KeyContext,
        interactions: &InteractionRegistry,
        event: &Event,
    ) -> PickerAction {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(ctx, *key),
            Event::Mouse(mouse) => handle_mouse_event(interactions, *mouse),
            Event::Paste(text) if ctx.searchable => {
                PickerAction::Edit(SearchEdit::InsertStr(text.clone()))
            }
            _ => PickerAction::None,
        }
    }
}
