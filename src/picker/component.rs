use crossterm::event::Event;
use ratatui::{style::Color, widgets::ListDirection};

use crate::error::Result;
use crate::events::{EventHandler, EventOutcome, KeyContext, PickerAction};
use crate::log;
use crate::scroll::ScrollHelper;
use crate::sheet::{SheetHandle, SheetId, SheetManager, SheetProps};
use crate::tui::InteractionRegistry;
use crate::tui::theme::SPINNER_FRAMES;

use super::search::{self, SearchEdit};
use super::{
    Focus, Labeled, ListCursor, ListProps, Picker, PickerConfig, PickerStyle, RowPress, RowRenderer,
    RowStrategy, SearchInputProps, Selection,
};

impl<T: Labeled> Picker<T> {
    /// Picker whose rows show each item's label.
    pub fn new(id: impl Into<SheetId>, data: Vec<T>) -> Self {
        Self::with_rows(id, data, RowStrategy::by_label())
    }
}

impl<T> Picker<T> {
    /// Picker with caller-rendered rows, for items without a label.
    pub fn with_renderer(
        id: impl Into<SheetId>,
        data: Vec<T>,
        renderer: impl RowRenderer<T> + 'static,
    ) -> Self {
        Self::with_rows(id, data, RowStrategy::custom(renderer))
    }

    pub fn with_rows(id: impl Into<SheetId>, data: Vec<T>, rows: RowStrategy<T>) -> Self {
        Self {
            id: id.into(),
            config: PickerConfig::default(),
            data,
            rows,
            input_value: String::new(),
            loading: false,
            on_search: None,
            on_select: None,
            selection: Selection::default(),
            cursor: 0,
            focus: Focus::List,
            input_cursor: 0,
            offset: 0,
            page_size: 1,
            sheet: None,
            was_open: false,
            interactions: InteractionRegistry::new(),
            scroll: ScrollHelper::default(),
            spinner_frame: 0,
        }
    }

    // === Builder ===

    pub fn with_config(mut self, config: PickerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.config.searchable = searchable;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.config.height = Some(height);
        self
    }

    pub fn close_text(mut self, text: impl Into<String>) -> Self {
        self.config.close_text = text.into();
        self
    }

    pub fn placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.config.placeholder_text = text.into();
        self
    }

    pub fn placeholder_color(mut self, color: Color) -> Self {
        self.config.placeholder_color = color;
        self
    }

    pub fn no_data_found_text(mut self, text: impl Into<String>) -> Self {
        self.config.no_data_found_text = text.into();
        self
    }

    pub fn style(mut self, style: PickerStyle) -> Self {
        self.config.style = style;
        self
    }

    pub fn search_input_props(mut self, props: SearchInputProps) -> Self {
        self.config.search_input_props = props;
        self
    }

    pub fn list_props(mut self, props: ListProps) -> Self {
        self.config.list_props = props;
        self
    }

    /// Host container settings, applied when the picker is mounted.
    pub fn sheet_props(mut self, props: SheetProps) -> Self {
        self.config.sheet_props = props;
        self
    }

    pub fn row_renderer(mut self, renderer: impl RowRenderer<T> + 'static) -> Self {
        self.rows = RowStrategy::custom(renderer);
        self
    }

    /// Called with the new raw text after every search edit.
    pub fn on_search(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_search = Some(Box::new(callback));
        self
    }

    /// Called with the activated item, before the sheet is asked to close.
    pub fn on_select(mut self, callback: impl FnMut(&T) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    // === Lifecycle ===

    /// Register the sheet under this picker's id. Mounting starts a fresh
    /// selection lifecycle.
    pub fn mount(&mut self, manager: &SheetManager) -> Result<SheetHandle> {
        self.unmount();
        let handle = manager.register(self.id.clone(), self.config.sheet_props.clone())?;
        self.sheet = Some(handle.clone());
        self.selection = Selection::default();
        self.cursor = 0;
        self.offset = 0;
        self.was_open = false;
        Ok(handle)
    }

    pub fn unmount(&mut self) {
        if let Some(handle) = self.sheet.take() {
            handle.unregister();
        }
        self.was_open = false;
        self.interactions.clear();
    }

    pub fn is_mounted(&self) -> bool {
        self.sheet.is_some()
    }

    pub fn handle(&self) -> Option<&SheetHandle> {
        self.sheet.as_ref()
    }

    pub fn id(&self) -> &SheetId {
        &self.id
    }

    /// Ask the sheet to present. No-op when not mounted.
    pub fn open(&mut self) -> bool {
        let opened = match &self.sheet {
            Some(handle) => handle.open(),
            None => {
                log::log_sheet(self.id.as_str(), "open ignored: not mounted");
                false
            }
        };
        self.sync_visibility();
        opened
    }

    /// Ask the sheet to dismiss. Idempotent.
    pub fn close(&mut self) -> bool {
        let closed = self.sheet.as_ref().map(SheetHandle::close).unwrap_or(false);
        self.sync_visibility();
        closed
    }

    pub fn is_open(&self) -> bool {
        self.sheet.as_ref().map(SheetHandle::is_open).unwrap_or(false)
    }

    /// Pick up open/close transitions made through the registry.
    pub(super) fn sync_visibility(&mut self) {
        let open = self.is_open();
        if open && !self.was_open {
            self.focus = if self.config.searchable && self.config.search_input_props.auto_focus {
                Focus::Search
            } else {
                Focus::List
            };
            self.input_cursor = self.input_value.chars().count();
            self.scroll.reset();
        }
        if !open {
            self.interactions.clear();
        }
        self.was_open = open;
    }

    // === Caller-supplied state ===

    /// Replace the data set. The committed selection and the cursor refer
    /// to positions, so both are reset.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.selection.reset();
        self.cursor = 0;
        self.offset = 0;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the search text. The picker never changes it on its own.
    pub fn set_input_value(&mut self, value: impl Into<String>) {
        self.input_value = value.into();
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selection.index().and_then(|i| self.data.get(i))
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    // === Selection ===

    /// Commit row `index`: record it, hand the item to `on_select`, then
    /// ask the sheet to close. Out-of-range indices do nothing.
    pub fn activate(&mut self, index: usize) -> Option<usize> {
        let item = self.data.get(index)?;

        self.selection.commit(index);
        if let Some(callback) = self.on_select.as_mut() {
            callback(item);
        }
        log::log_event(&format!("{}: row {} selected", self.id, index));

        self.close();
        Some(index)
    }

    fn press_row(&mut self, index: usize) -> EventOutcome {
        let Some(item) = self.data.get(index) else {
            return EventOutcome::Consumed;
        };

        let press = match &mut self.rows {
            RowStrategy::DefaultByLabel(_) => RowPress::Commit,
            RowStrategy::Custom(renderer) => renderer.on_press(item, index),
        };

        match press {
            RowPress::Commit => self
                .activate(index)
                .map(EventOutcome::Selected)
                .unwrap_or(EventOutcome::Consumed),
            RowPress::Handled => EventOutcome::Consumed,
        }
    }

    // === Events ===

    pub(super) fn key_context(&self) -> KeyContext {
        KeyContext {
            searchable: self.config.searchable,
            search_focused: self.focus == Focus::Search,
        }
    }

    /// Feed a terminal event. Everything is ignored while the sheet is closed.
    pub fn handle_event(&mut self, event: &Event) -> EventOutcome {
        self.sync_visibility();
        if !self.is_open() {
            return EventOutcome::Ignored;
        }

        let action = EventHandler::handle_event(&self.key_context(), &self.interactions, event);
        self.apply(action)
    }

    /// Apply one action to the picker.
    pub fn apply(&mut self, action: PickerAction) -> EventOutcome {
        let Some(handle) = self.sheet.clone() else {
            return EventOutcome::Ignored;
        };
        let bottom_up = self.config.list_props.direction == ListDirection::BottomToTop;

        match action {
            PickerAction::None => EventOutcome::Ignored,

            PickerAction::Dismiss => {
                if handle.dismiss() {
                    self.sync_visibility();
                    EventOutcome::Closed
                } else {
                    EventOutcome::Ignored
                }
            }
            PickerAction::CloseButton => {
                self.close();
                EventOutcome::Closed
            }
            PickerAction::Backdrop => {
                if handle.props().close_on_touch_backdrop && handle.dismiss() {
                    self.sync_visibility();
                    EventOutcome::Closed
                } else {
                    EventOutcome::Consumed
                }
            }
            PickerAction::BeginDrag(row) => {
                handle.begin_drag(row);
                EventOutcome::Consumed
            }
            PickerAction::DragTo(row) => {
                if handle.drag_to(row) {
                    EventOutcome::Consumed
                } else {
                    EventOutcome::Ignored
                }
            }
            PickerAction::EndDrag => {
                if !handle.is_dragging() {
                    EventOutcome::Ignored
                } else if handle.end_drag() {
                    self.sync_visibility();
                    EventOutcome::Closed
                } else {
                    EventOutcome::Consumed
                }
            }

            PickerAction::ActivateCursor => self.press_row(self.cursor),
            PickerAction::ActivateRow(index) => {
                if self.focus == Focus::Search && !handle.props().keyboard_should_persist_taps {
                    // First tap only dismisses the keyboard
                    self.focus = Focus::List;
                    return EventOutcome::Consumed;
                }
                if index < self.data.len() {
                    self.cursor = index;
                }
                self.press_row(index)
            }
            PickerAction::CursorUp => {
                if bottom_up {
                    self.cursor_next();
                } else {
                    self.cursor_prev();
                }
                EventOutcome::Consumed
            }
            PickerAction::CursorDown => {
                if bottom_up {
                    self.cursor_prev();
                } else {
                    self.cursor_next();
                }
                EventOutcome::Consumed
            }
            PickerAction::PageUp | PickerAction::PageDown => {
                let page = self.page_size.max(1) as isize;
                let down = (action == PickerAction::PageDown) != bottom_up;
                self.move_cursor_by(if down { page } else { -page });
                EventOutcome::Consumed
            }
            PickerAction::CursorFirst => {
                self.cursor_first();
                EventOutcome::Consumed
            }
            PickerAction::CursorLast => {
                self.cursor_last();
                EventOutcome::Consumed
            }
            PickerAction::ScrollUp(rows) => self.scroll_by(-(rows as i32), bottom_up, &handle),
            PickerAction::ScrollDown(rows) => self.scroll_by(rows as i32, bottom_up, &handle),

            PickerAction::ToggleFocus => {
                if self.config.searchable {
                    self.focus = match self.focus {
                        Focus::Search => Focus::List,
                        Focus::List => Focus::Search,
                    };
                }
                EventOutcome::Consumed
            }
            PickerAction::FocusSearch => {
                if self.config.searchable {
                    self.focus = Focus::Search;
                }
                EventOutcome::Consumed
            }
            PickerAction::Edit(edit) => self.edit_search(&edit),
            PickerAction::Motion(motion) => {
                if !self.config.searchable {
                    return EventOutcome::Ignored;
                }
                self.focus = Focus::Search;
                self.input_cursor = search::apply_motion(&self.input_value, self.input_cursor, motion);
                EventOutcome::Consumed
            }
        }
    }

    /// Compute the edited text and hand it to `on_search`. The text itself
    /// stays as the caller supplied it.
    fn edit_search(&mut self, edit: &SearchEdit) -> EventOutcome {
        if !self.config.searchable {
            return EventOutcome::Ignored;
        }
        self.focus = Focus::Search;

        let Some((value, cursor)) = search::apply_edit(&self.input_value, self.input_cursor, edit)
        else {
            return EventOutcome::Consumed;
        };

        if let Some(max) = self.config.search_input_props.max_length {
            let new_len = value.chars().count();
            if new_len > max && new_len > self.input_value.chars().count() {
                return EventOutcome::Consumed;
            }
        }

        self.input_cursor = cursor;
        log::log_event(&format!("{}: search {:?}", self.id, value));
        if let Some(callback) = self.on_search.as_mut() {
            callback(&value);
        }
        EventOutcome::Consumed
    }

    fn scroll_by(&mut self, delta: i32, bottom_up: bool, handle: &SheetHandle) -> EventOutcome {
        if !self.scroll.is_scrolling() {
            handle.begin_child_scroll();
        }
        if let Some(rows) = self.scroll.accumulate(delta) {
            let rows = rows as isize;
            self.scroll_viewport(if bottom_up { -rows } else { rows });
        }
        EventOutcome::Consumed
    }

    /// Move the first visible row by `rows`, dragging the cursor along only
    /// as far as needed to keep it on screen.
    fn scroll_viewport(&mut self, rows: isize) {
        let len = self.data.len();
        if len == 0 {
            return;
        }
        let page = self.page_size.max(1);
        let max_offset = len.saturating_sub(page);
        self.offset = self.offset.saturating_add_signed(rows).min(max_offset);

        let padding = self.config.list_props.scroll_padding.min((page - 1) / 2);
        let last_row = self.offset + page - 1;
        let first = if self.offset == 0 { 0 } else { self.offset + padding };
        let last = if last_row >= len - 1 {
            len - 1
        } else {
            last_row - padding
        };
        self.cursor = self.cursor.clamp(first.min(last), last);
    }

    /// Advance the loading spinner and end settled scroll bursts.
    pub fn tick(&mut self) {
        if self.loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
        if self.scroll.settle() {
            if let Some(handle) = &self.sheet {
                handle.handle_child_scroll_end();
            }
        }
    }
}

impl<T> ListCursor for Picker<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.data
    }

    fn cursor_index(&self) -> usize {
        self.cursor
    }

    fn set_cursor_index(&mut self, index: usize) {
        self.cursor = index;
    }
}

impl<T> Drop for Picker<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::error::PickerError;
    use crate::picker::Named;
    use crate::sheet;

    fn colors() -> Vec<Named> {
        vec![Named::new("Red"), Named::new("Green"), Named::new("Blue")]
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mounted(picker: Picker<Named>) -> (Picker<Named>, SheetManager) {
        let manager = SheetManager::new();
        let mut picker = picker;
        picker.mount(&manager).unwrap();
        (picker, manager)
    }

    #[test]
    fn test_open_close_idempotent() {
        let (mut picker, _manager) = mounted(Picker::new("colors", colors()));
        assert!(!picker.is_open());
        assert!(picker.open());
        assert!(!picker.open());
        assert!(picker.is_open());
        assert!(picker.close());
        assert!(!picker.close());
    }

    #[test]
    fn test_open_before_mount_is_noop() {
        let mut picker = Picker::new("colors", colors());
        assert!(!picker.open());
        assert!(!picker.is_open());
        assert!(!picker.close());
    }

    #[test]
    fn test_duplicate_mount_rejected() {
        let manager = SheetManager::new();
        let mut first = Picker::new("colors", colors());
        let mut second = Picker::new("colors", colors());
        first.mount(&manager).unwrap();
        assert!(matches!(
            second.mount(&manager),
            Err(PickerError::DuplicateSheet(_))
        ));

        // Dropping the first picker frees the id
        drop(first);
        assert!(second.mount(&manager).is_ok());
    }

    #[test]
    fn test_open_by_id_through_manager() {
        let (mut picker, manager) = mounted(Picker::new("colors", colors()).searchable(true));
        assert!(sheet::open(&manager, "colors"));
        assert!(picker.is_open());

        // Opening from outside still focuses the search field
        assert_eq!(picker.handle_event(&key(KeyCode::Char('b'))), EventOutcome::Consumed);
        assert_eq!(picker.focus(), Focus::Search);

        assert!(sheet::close(&manager, "colors"));
        assert_eq!(picker.handle_event(&key(KeyCode::Enter)), EventOutcome::Ignored);
    }

    #[test]
    fn test_enter_selects_cursor_row() {
        let picked = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&picked);
        let (mut picker, _manager) = mounted(
            Picker::new("colors", colors()).on_select(move |item: &Named| {
                sink.borrow_mut().push(item.name.clone())
            }),
        );
        picker.open();

        picker.handle_event(&key(KeyCode::Down));
        picker.handle_event(&key(KeyCode::Down));
        assert_eq!(picker.handle_event(&key(KeyCode::Enter)), EventOutcome::Selected(2));
        assert_eq!(*picked.borrow(), vec!["Blue".to_string()]);
        assert_eq!(picker.selected_item(), Some(&Named::new("Blue")));
        assert!(!picker.is_open());
    }

    #[test]
    fn test_reselect_overwrites_and_survives_reopen() {
        let (mut picker, _manager) = mounted(Picker::new("colors", colors()));
        picker.open();
        picker.apply(PickerAction::ActivateRow(0));
        picker.open();
        picker.apply(PickerAction::ActivateRow(2));
        picker.open();
        assert_eq!(picker.selection(), Selection::Selected(2));
    }

    #[test]
    fn test_set_data_clears_selection() {
        let (mut picker, _manager) = mounted(Picker::new("colors", colors()));
        picker.open();
        picker.apply(PickerAction::ActivateRow(1));
        assert_eq!(picker.selected_index(), Some(1));

        picker.set_data(vec![Named::new("Teal")]);
        assert_eq!(picker.selection(), Selection::Unselected);
        assert_eq!(picker.cursor_index(), 0);
    }

    #[test]
    fn test_remount_starts_fresh() {
        let manager = SheetManager::new();
        let mut picker = Picker::new("colors", colors());
        picker.mount(&manager).unwrap();
        picker.open();
        picker.apply(PickerAction::ActivateRow(1));

        picker.mount(&manager).unwrap();
        assert_eq!(picker.selected_index(), None);
        assert!(!picker.is_open());
    }

    #[test]
    fn test_out_of_range_row_does_nothing() {
        let (mut picker, _manager) = mounted(Picker::new("colors", colors()));
        picker.open();
        assert_eq!(picker.apply(PickerAction::ActivateRow(9)), EventOutcome::Consumed);
        assert_eq!(picker.selected_index(), None);
        assert!(picker.is_open());
    }

    #[test]
    fn test_search_passes_raw_text_through() {
        let searches = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&searches);
        let (mut picker, _manager) = mounted(
            Picker::new("colors", colors())
                .searchable(true)
                .on_search(move |value| sink.borrow_mut().push(value.to_string())),
        );
        picker.set_input_value(" B");
        picker.open();

        picker.handle_event(&key(KeyCode::Char('l')));
        picker.handle_event(&key(KeyCode::Char(' ')));

        // Each edit starts from the caller's value, which was never updated
        assert_eq!(*searches.borrow(), vec![" Bl".to_string(), " B ".to_string()]);
        assert_eq!(picker.input_value(), " B");
        // Filtering is the caller's job
        assert_eq!(picker.data().len(), 3);
    }

    #[test]
    fn test_typing_query_reports_each_value_once() {
        let searches = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&searches);
        let (mut picker, _manager) = mounted(
            Picker::new("colors", colors())
                .searchable(true)
                .on_search(move |value| sink.borrow_mut().push(value.to_string())),
        );
        picker.open();

        for c in "bl".chars() {
            picker.handle_event(&key(KeyCode::Char(c)));
            // The caller feeds the reported text back
            let latest = searches.borrow().last().cloned().unwrap_or_default();
            picker.set_input_value(latest);
        }

        assert_eq!(*searches.borrow(), vec!["b".to_string(), "bl".to_string()]);
        assert_eq!(picker.selected_index(), None);
        assert!(!picker.is_loading());
        assert!(picker.is_open());
    }

    #[test]
    fn test_search_ignored_when_not_searchable() {
        let searches = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&searches);
        let (mut picker, _manager) = mounted(
            Picker::new("colors", colors()).on_search(move |_| *sink.borrow_mut() += 1),
        );
        picker.open();

        let paste = Event::Paste("red".to_string());
        assert_eq!(picker.handle_event(&paste), EventOutcome::Ignored);
        assert_eq!(
            picker.apply(PickerAction::Edit(SearchEdit::Insert('r'))),
            EventOutcome::Ignored
        );
        assert_eq!(*searches.borrow(), 0);
    }

    #[test]
    fn test_max_length_drops_growing_edits() {
        let searches = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&searches);
        let (mut picker, _manager) = mounted(
            Picker::new("colors", colors())
                .searchable(true)
                .search_input_props(SearchInputProps {
                    max_length: Some(2),
                    ..SearchInputProps::default()
                })
                .on_search(move |value| sink.borrow_mut().push(value.to_string())),
        );
        picker.set_input_value("bl");
        picker.open();

        picker.handle_event(&key(KeyCode::Char('u')));
        picker.handle_event(&key(KeyCode::Backspace));
        assert_eq!(*searches.borrow(), vec!["b".to_string()]);
    }

    #[test]
    fn test_esc_dismisses_without_selection() {
        let (mut picker, _manager) = mounted(Picker::new("colors", colors()));
        picker.open();
        assert_eq!(picker.handle_event(&key(KeyCode::Esc)), EventOutcome::Closed);
        assert_eq!(picker.selected_index(), None);
    }

    #[test]
    fn test_first_tap_leaves_search_when_taps_not_persisted() {
        let (mut picker, _manager) = mounted(
            Picker::new("colors", colors())
                .searchable(true)
                .sheet_props(SheetProps {
                    keyboard_should_persist_taps: false,
                    ..SheetProps::default()
                }),
        );
        picker.open();
        assert_eq!(picker.focus(), Focus::Search);

        assert_eq!(picker.apply(PickerAction::ActivateRow(1)), EventOutcome::Consumed);
        assert_eq!(picker.focus(), Focus::List);
        assert_eq!(picker.apply(PickerAction::ActivateRow(1)), EventOutcome::Selected(1));
    }

    #[test]
    fn test_bottom_to_top_swaps_arrows() {
        let (mut picker, _manager) = mounted(Picker::new("colors", colors()).list_props(ListProps {
            direction: ListDirection::BottomToTop,
            ..ListProps::default()
        }));
        picker.open();
        picker.apply(PickerAction::CursorUp);
        assert_eq!(picker.cursor_index(), 1);
    }

    #[test]
    fn test_bottom_to_top_swaps_paging() {
        let data: Vec<Named> = (0..10).map(|i| Named::new(format!("n{}", i))).collect();
        let (mut picker, _manager) = mounted(Picker::new("numbers", data).list_props(ListProps {
            direction: ListDirection::BottomToTop,
            ..ListProps::default()
        }));
        picker.open();
        picker.page_size = 4;

        // Up on a bottom-anchored list walks toward higher indices
        picker.apply(PickerAction::PageUp);
        assert_eq!(picker.cursor_index(), 4);
        picker.apply(PickerAction::PageDown);
        assert_eq!(picker.cursor_index(), 0);
    }

    #[test]
    fn test_wheel_scrolls_viewport() {
        let data: Vec<Named> = (0..20).map(|i| Named::new(format!("n{}", i))).collect();
        let (mut picker, _manager) = mounted(Picker::new("numbers", data));
        picker.open();
        picker.page_size = 5;

        picker.apply(PickerAction::ScrollDown(3));
        assert_eq!(picker.offset, 3);
        // Cursor pulled just inside the padded window
        assert_eq!(picker.cursor_index(), 4);

        std::thread::sleep(std::time::Duration::from_millis(80));
        picker.apply(PickerAction::ScrollDown(50));
        assert_eq!(picker.offset, 15);
        assert_eq!(picker.cursor_index(), 16);

        std::thread::sleep(std::time::Duration::from_millis(80));
        picker.apply(PickerAction::ScrollUp(50));
        assert_eq!(picker.offset, 0);
        // Pulled back to the last padded row of the first page
        assert_eq!(picker.cursor_index(), 3);
    }

    #[test]
    fn test_scroll_blocks_drag_until_settled() {
        let (mut picker, _manager) = mounted(Picker::new("colors", colors()));
        picker.open();

        picker.apply(PickerAction::ScrollDown(1));
        assert_eq!(picker.cursor_index(), 1);
        assert_eq!(picker.apply(PickerAction::BeginDrag(5)), EventOutcome::Consumed);
        assert!(!picker.handle().unwrap().is_dragging());

        std::thread::sleep(std::time::Duration::from_millis(80));
        picker.tick();
        picker.apply(PickerAction::BeginDrag(5));
        assert!(picker.handle().unwrap().is_dragging());
    }

    #[test]
    fn test_tick_animates_only_while_loading() {
        let mut picker = Picker::new("colors", colors());
        picker.tick();
        assert_eq!(picker.spinner_frame, 0);

        picker.set_loading(true);
        picker.tick();
        assert_eq!(picker.spinner_frame, 1);
    }
}
