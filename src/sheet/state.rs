use ratatui::style::Color;

/// Rows the indicator must be dragged down before the sheet dismisses.
pub const DISMISS_DRAG_ROWS: u16 = 3;

/// Host container configuration for a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetProps {
    /// Color of the drag indicator on the top edge (None = transparent)
    pub indicator_color: Option<Color>,

    /// Allow gesture dismissal: Esc, indicator drag, backdrop click
    pub gesture_enabled: bool,

    /// Deliver row clicks while the search field has focus. When false the
    /// first click only moves focus away from the field.
    pub keyboard_should_persist_taps: bool,

    /// Dismiss when the backdrop around the panel is clicked
    pub close_on_touch_backdrop: bool,
}

impl Default for SheetProps {
    fn default() -> Self {
        Self {
            indicator_color: None,
            gesture_enabled: true,
            keyboard_should_persist_taps: true,
            close_on_touch_backdrop: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    origin: u16,
    offset: u16,
}

/// Open state and gesture bookkeeping for one registered sheet.
#[derive(Debug, Clone)]
pub struct SheetState {
    visible: bool,
    props: SheetProps,
    drag: Option<Drag>,
    child_scrolling: bool,
}

impl SheetState {
    pub fn new(props: SheetProps) -> Self {
        Self {
            visible: false,
            props,
            drag: None,
            child_scrolling: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn props(&self) -> &SheetProps {
        &self.props
    }

    /// Returns true if the sheet was hidden before.
    pub fn show(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }

    /// Returns true if the sheet was visible before.
    pub fn hide(&mut self) -> bool {
        let changed = self.visible;
        self.visible = false;
        self.drag = None;
        self.child_scrolling = false;
        changed
    }

    /// Hide in response to a dismiss gesture, if gestures are enabled.
    pub fn dismiss(&mut self) -> bool {
        self.props.gesture_enabled && self.hide()
    }

    /// How far the panel is currently pulled down.
    pub fn drag_offset(&self) -> u16 {
        self.drag.map(|d| d.offset).unwrap_or(0)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Grab the indicator at `row`. Ignored while the list is mid-scroll so
    /// the two gestures don't fight.
    pub fn begin_drag(&mut self, row: u16) -> bool {
        if !self.visible || !self.props.gesture_enabled || self.child_scrolling {
            return false;
        }
        self.drag = Some(Drag { origin: row, offset: 0 });
        true
    }

    pub fn drag_to(&mut self, row: u16) -> bool {
        match self.drag.as_mut() {
            Some(drag) => {
                drag.offset = row.saturating_sub(drag.origin);
                true
            }
            None => false,
        }
    }

    /// Release the indicator. Returns true if the release dismissed the sheet.
    pub fn end_drag(&mut self) -> bool {
        match self.drag.take() {
            Some(drag) if drag.offset >= DISMISS_DRAG_ROWS => self.hide(),
            _ => false,
        }
    }

    pub fn begin_child_scroll(&mut self) {
        self.child_scrolling = true;
    }

    /// The list finished scrolling; drag gestures are honoured again.
    pub fn handle_child_scroll_end(&mut self) {
        self.child_scrolling = false;
    }

    pub fn is_child_scrolling(&self) -> bool {
        self.child_scrolling
    }
}
