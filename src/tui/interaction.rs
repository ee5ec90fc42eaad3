//! Component-level mouse interactivity.
//!
//! Widgets register their interactive regions during render, and mouse
//! events on the next frame are routed to the matching region.
//!
//! # Example
//!
//! ```ignore
//! // During render, register an interactive region:
//! registry.register(
//!     InteractiveRegion::clickable("row", ClickRegion::from(row_area), PickerAction::ActivateRow(3))
//!         .with_priority(ROW_PRIORITY),
//! );
//!
//! // Later, when a click arrives:
//! let action = registry.handle_click(mouse.column, mouse.row);
//! ```

use ratatui::layout::Rect;

use crate::events::PickerAction;

/// Screen rectangle used for hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<PickerAction>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<PickerAction>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<PickerAction>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: PickerAction) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: PickerAction,
        scroll_down: PickerAction,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    pub fn extend(&mut self, regions: impl IntoIterator<Item = InteractiveRegion>) {
        self.regions.extend(regions);
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Find the region registered under `id`, if any.
    pub fn find(&self, id: &str) -> Option<&InteractiveRegion> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Action for a click at (x, y): the highest-priority region that
    /// contains the point and has a click handler.
    pub fn handle_click(&self, x: u16, y: u16) -> PickerAction {
        Self::pick(&self.regions, x, y, |r| r.on_click.as_ref())
    }

    pub fn handle_scroll_up(&self, x: u16, y: u16) -> PickerAction {
        Self::pick(&self.regions, x, y, |r| r.on_scroll_up.as_ref())
    }

    pub fn handle_scroll_down(&self, x: u16, y: u16) -> PickerAction {
        Self::pick(&self.regions, x, y, |r| r.on_scroll_down.as_ref())
    }

    fn pick(
        regions: &[InteractiveRegion],
        x: u16,
        y: u16,
        handler: impl Fn(&InteractiveRegion) -> Option<&PickerAction>,
    ) -> PickerAction {
        regions
            .iter()
            .filter(|r| r.contains(x, y))
            .filter_map(|r| handler(r).map(|action| (r.priority, action)))
            // max_by_key keeps the last of equal maxima: later registrations win ties
            .max_by_key(|(priority, _)| *priority)
            .map(|(_, action)| action.clone())
            .unwrap_or(PickerAction::None)
    }
}
