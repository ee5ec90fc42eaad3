//! Rendering of the picker inside its sheet.
//!
//! Layout, top to bottom: sheet frame with drag indicator, sticky header
//! (search row, label, loading spinner), then either the rows or the
//! empty-state message. Every clickable part registers a region so the next
//! mouse event can be routed.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, HighlightSpacing, List, ListDirection, ListItem, ListState,
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
};

use crate::events::PickerAction;
use crate::sheet;
use crate::tui::theme::SPINNER_FRAMES;
use crate::tui::{ClickRegion, InteractiveRegion};

use super::search::{SearchEdit, clamp_cursor};
use super::{Focus, Picker, RowStrategy, defaults};

// Overlapping regions: rows and header controls beat the panel, which
// beats the backdrop.
const BACKDROP_PRIORITY: i32 = -1;
const CONTROL_PRIORITY: i32 = 10;
const INDICATOR_PRIORITY: i32 = 20;

/// Columns of padding left and right of the content
const CONTENT_PADDING: u16 = 2;
/// Bordered search field
const SEARCH_ROW_HEIGHT: u16 = 3;

impl<T> Picker<T> {
    /// Draw the sheet over `area` if it is open.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.sync_visibility();
        self.interactions.clear();

        let Some(handle) = self.sheet.clone() else {
            return;
        };
        if !handle.is_open() {
            return;
        }

        let props = handle.props();
        let height = self.config.panel_height(area.height);
        let panel = sheet::sheet_area(area, height, handle.drag_offset());

        let mut regions = vec![
            InteractiveRegion::clickable("backdrop", area.into(), PickerAction::Backdrop)
                .with_priority(BACKDROP_PRIORITY),
            // Swallows clicks on the panel's dead space
            InteractiveRegion::clickable("panel", panel.into(), PickerAction::None),
        ];

        if panel.height > 0 {
            let layout = sheet::render_sheet(frame, panel, &props, self.config.style.sheet);
            if props.gesture_enabled {
                regions.push(
                    InteractiveRegion::clickable(
                        "indicator",
                        layout.indicator.into(),
                        PickerAction::BeginDrag(0),
                    )
                    .with_priority(INDICATOR_PRIORITY),
                );
            }

            let content = layout.inner.inner(Margin::new(CONTENT_PADDING, 0));
            let [header_area, list_area] = Layout::vertical([
                Constraint::Length(self.header_height()),
                Constraint::Min(0),
            ])
            .areas(content);

            regions.extend(self.render_header(frame, header_area));
            regions.extend(self.render_body(frame, list_area));
        }

        self.interactions.extend(regions);
    }

    fn header_height(&self) -> u16 {
        let mut height = 0;
        if self.config.searchable {
            height += SEARCH_ROW_HEIGHT;
        }
        if self.config.label.is_some() {
            height += 1;
        }
        if self.loading {
            height += 1;
        }
        height
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) -> Vec<InteractiveRegion> {
        let mut regions = vec![];
        if area.height == 0 {
            return regions;
        }

        let style = &self.config.style;
        frame.render_widget(Block::default().style(style.header()), area);

        let mut constraints = vec![];
        if self.config.searchable {
            constraints.push(Constraint::Length(SEARCH_ROW_HEIGHT));
        }
        if self.config.label.is_some() {
            constraints.push(Constraint::Length(1));
        }
        if self.loading {
            constraints.push(Constraint::Length(1));
        }
        let rows = Layout::vertical(constraints).split(area);
        let mut rows = rows.iter().copied();

        if self.config.searchable {
            if let Some(row) = rows.next() {
                regions.extend(self.render_search_row(frame, row));
            }
        }

        if let Some(label) = &self.config.label {
            if let Some(row) = rows.next() {
                let line = Line::from(Span::styled(label.as_str(), style.label_text()));
                frame.render_widget(Paragraph::new(line).style(style.label_container()), row);
            }
        }

        if self.loading {
            if let Some(row) = rows.next() {
                let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
                let line = Line::from(vec![
                    Span::styled(spinner, style.spinner()),
                    Span::raw(" "),
                    Span::styled(defaults::LOADING_TEXT, style.spinner()),
                ])
                .centered();
                frame.render_widget(Paragraph::new(line), row);
            }
        }

        regions
    }

    fn render_search_row(&self, frame: &mut Frame, area: Rect) -> Vec<InteractiveRegion> {
        let style = &self.config.style;
        let props = &self.config.search_input_props;
        let [input_area, close_area] =
            Layout::horizontal([Constraint::Percentage(75), Constraint::Min(0)]).areas(area);

        let mut regions = vec![
            InteractiveRegion::clickable("search_field", input_area.into(), PickerAction::FocusSearch)
                .with_priority(CONTROL_PRIORITY),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style.input_border());
        let inner = block.inner(input_area);
        frame.render_widget(block, input_area);

        let value = self.input_value.as_str();
        let show_clear = props.clear_button && !value.is_empty() && inner.width > 2;
        let text_width = inner.width.saturating_sub(if show_clear { 2 } else { 0 });
        let text_area = Rect::new(inner.x, inner.y, text_width, inner.height.min(1));

        // Scroll horizontally so the cursor stays visible
        let cursor = clamp_cursor(value, self.input_cursor);
        let skip = (cursor + 1).saturating_sub(text_width as usize);

        let line = if value.is_empty() {
            Line::from(Span::styled(
                self.config.placeholder_text.as_str(),
                Style::new().fg(self.config.placeholder_color),
            ))
        } else {
            let visible: String = match props.mask {
                Some(mask) => value.chars().skip(skip).map(|_| mask).collect(),
                None => value.chars().skip(skip).collect(),
            };
            Line::from(Span::styled(visible, style.input_text()))
        };
        frame.render_widget(Paragraph::new(line), text_area);

        if show_clear {
            let clear_area = Rect::new(inner.right() - 1, inner.y, 1, 1);
            frame.render_widget(
                Paragraph::new(Span::styled("×", style.input_border())),
                clear_area,
            );
            regions.push(
                InteractiveRegion::clickable(
                    "search_clear",
                    clear_area.into(),
                    PickerAction::Edit(SearchEdit::Clear),
                )
                .with_priority(CONTROL_PRIORITY + 1),
            );
        }

        if self.focus == Focus::Search && text_area.width > 0 {
            let x = text_area.x + (cursor - skip).min(text_width as usize - 1) as u16;
            frame.set_cursor_position(Position::new(x, text_area.y));
        }

        if close_area.width > 0 {
            let text_row = Rect::new(close_area.x, close_area.y + close_area.height / 2, close_area.width, 1);
            let close = Line::from(Span::styled(
                self.config.close_text.as_str(),
                style.close_text(),
            ))
            .centered();
            frame.render_widget(
                Paragraph::new(close).style(style.close_container()),
                text_row,
            );
            regions.push(
                InteractiveRegion::clickable("close", close_area.into(), PickerAction::CloseButton)
                    .with_priority(CONTROL_PRIORITY),
            );
        }

        regions
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) -> Vec<InteractiveRegion> {
        self.page_size = usize::from(area.height).max(1);

        if self.data.is_empty() {
            // Loading wins over "no results"
            if !self.loading {
                self.render_empty_state(frame, area);
            }
            return vec![];
        }
        if area.height == 0 || area.width == 0 {
            return vec![];
        }

        let list_props = &self.config.list_props;
        let show_scrollbar = list_props.show_scrollbar && self.data.len() > usize::from(area.height);
        let list_area = if show_scrollbar {
            Rect::new(area.x, area.y, area.width - 1, area.height)
        } else {
            area
        };

        self.cursor = self.cursor.min(self.data.len() - 1);
        let (start, items) = self.visible_rows(usize::from(list_area.height));
        let heights: Vec<u16> = items
            .iter()
            .map(|item| item.height().min(usize::from(u16::MAX)) as u16)
            .collect();

        let list_props = &self.config.list_props;
        let list = List::new(items)
            .highlight_symbol(list_props.highlight_symbol.as_str())
            .highlight_spacing(HighlightSpacing::Always)
            .repeat_highlight_symbol(list_props.repeat_highlight_symbol)
            .direction(list_props.direction);
        let mut state = ListState::default().with_selected(Some(self.cursor - start));
        frame.render_stateful_widget(list, list_area, &mut state);

        if show_scrollbar {
            let mut scrollbar_state = ScrollbarState::new(self.data.len()).position(self.cursor);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut scrollbar_state,
            );
        }

        let mut regions = vec![InteractiveRegion::scrollable(
            "list",
            list_area.into(),
            PickerAction::ScrollUp(1),
            PickerAction::ScrollDown(1),
        )];

        let mut used = 0u16;
        for (k, height) in heights.into_iter().enumerate() {
            if used >= list_area.height {
                break;
            }
            let height = height.min(list_area.height - used);
            let y = match list_props.direction {
                ListDirection::TopToBottom => list_area.y + used,
                ListDirection::BottomToTop => list_area.bottom() - used - height,
            };
            regions.push(
                InteractiveRegion::clickable(
                    "row",
                    ClickRegion::new(list_area.x, y, list_area.width, height),
                    PickerAction::ActivateRow(start + k),
                )
                .with_priority(CONTROL_PRIORITY),
            );
            used += height;
        }

        regions
    }

    fn render_empty_state(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let style = &self.config.style;
        // One row of top padding when there is room for it
        let row = if area.height > 1 {
            Rect::new(area.x, area.y + 1, area.width, 1)
        } else {
            area
        };
        let line = Line::from(Span::styled(
            self.config.no_data_found_text.as_str(),
            style.no_data_found_text(),
        ))
        .centered();
        frame.render_widget(
            Paragraph::new(line).style(style.no_data_found_container()),
            row,
        );
    }

    /// Pick the first row to draw so the cursor (plus scroll padding) is in
    /// view, and build only the rows that fit.
    fn visible_rows(&mut self, height: usize) -> (usize, Vec<ListItem<'static>>) {
        let len = self.data.len();
        let padding = self.config.list_props.scroll_padding;
        let lower = (self.cursor + padding).min(len - 1);

        let mut start = self.offset.min(len - 1);
        start = start.min(self.cursor.saturating_sub(padding));
        // Rows are at least one line tall, so nothing before this can work
        start = start.max((lower + 1).saturating_sub(height)).min(self.cursor);

        loop {
            let (items, last_visible) = self.build_rows(start, height);
            if lower <= last_visible || start >= self.cursor {
                self.offset = start;
                return (start, items);
            }
            start += 1;
        }
    }

    /// Rows from `start` until `height` lines are filled, and the index of
    /// the last row that fits completely.
    fn build_rows(&self, start: usize, height: usize) -> (Vec<ListItem<'static>>, usize) {
        let mut items = vec![];
        let mut used = 0;
        let mut last_visible = start;

        for index in start..self.data.len() {
            let item = self.row_item(index);
            used += item.height();
            items.push(item);
            if used <= height {
                last_visible = index;
            }
            if used >= height {
                break;
            }
        }

        (items, last_visible)
    }

    fn row_item(&self, index: usize) -> ListItem<'static> {
        let item = &self.data[index];
        match &self.rows {
            RowStrategy::DefaultByLabel(label) => {
                let style = &self.config.style;
                let text = label(item).unwrap_or_default().to_string();
                let selected = self.selection.is_selected(index);
                ListItem::new(Line::from(Span::styled(text, style.item_text(selected))))
                    .style(style.item_container())
            }
            RowStrategy::Custom(renderer) => renderer.render(item, index),
        }
    }
}
