//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which the
//! picker populates during each render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::InteractionRegistry;

use super::PickerAction;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(interactions: &InteractionRegistry, mouse: MouseEvent) -> PickerAction {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => interactions.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => interactions.handle_scroll_down(x, y),
        MouseEventKind::Down(MouseButton::Left) => match interactions.handle_click(x, y) {
            // The registered region can't know where inside it the grab happened
            PickerAction::BeginDrag(_) => PickerAction::BeginDrag(y),
            action => action,
        },
        MouseEventKind::Drag(MouseButton::Left) => PickerAction::DragTo(y),
        MouseEventKind::Up(MouseButton::Left) => PickerAction::EndDrag,
        _ => PickerAction::None,
    }
}
