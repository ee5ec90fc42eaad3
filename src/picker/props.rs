//! Picker configuration and pass-through settings.

use ratatui::{style::Color, widgets::ListDirection};

use crate::sheet::SheetProps;

use super::style::PickerStyle;

/// Built-in values for options the caller leaves unset.
pub mod defaults {
    use ratatui::style::Color;

    pub const CLOSE_TEXT: &str = "Close";
    pub const PLACEHOLDER_TEXT: &str = "Search";
    pub const PLACEHOLDER_COLOR: Color = crate::tui::theme::PLACEHOLDER_GREY;
    pub const NO_DATA_FOUND_TEXT: &str = "No Data Found.";
    /// Shown next to the spinner while loading
    pub const LOADING_TEXT: &str = "Loading…";
    /// Fraction of the frame height used when no height is given
    pub const HEIGHT_RATIO: f64 = 0.5;
}

/// Settings forwarded to the search field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInputProps {
    /// Edits that would make the text longer than this are dropped
    pub max_length: Option<usize>,
    /// Draw every character as this one
    pub mask: Option<char>,
    /// Focus the field whenever the sheet opens
    pub auto_focus: bool,
    /// Show a clickable `×` that clears the text
    pub clear_button: bool,
}

impl Default for SearchInputProps {
    fn default() -> Self {
        Self {
            max_length: None,
            mask: None,
            auto_focus: true,
            clear_button: true,
        }
    }
}

/// Settings forwarded to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListProps {
    /// Marker in front of the cursor row
    pub highlight_symbol: String,
    /// Rows kept visible above/below the cursor
    pub scroll_padding: usize,
    pub repeat_highlight_symbol: bool,
    pub direction: ListDirection,
    pub show_scrollbar: bool,
}

impl Default for ListProps {
    fn default() -> Self {
        Self {
            highlight_symbol: "> ".to_string(),
            scroll_padding: 1,
            repeat_highlight_symbol: false,
            direction: ListDirection::TopToBottom,
            show_scrollbar: true,
        }
    }
}

/// Everything about a picker except its data, callbacks and row strategy.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    pub label: Option<String>,
    pub searchable: bool,
    /// Panel height in rows; half the frame when unset
    pub height: Option<u16>,
    pub close_text: String,
    pub placeholder_text: String,
    pub placeholder_color: Color,
    pub no_data_found_text: String,
    pub style: PickerStyle,
    pub search_input_props: SearchInputProps,
    pub list_props: ListProps,
    pub sheet_props: SheetProps,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            label: None,
            searchable: false,
            height: None,
            close_text: defaults::CLOSE_TEXT.to_string(),
            placeholder_text: defaults::PLACEHOLDER_TEXT.to_string(),
            placeholder_color: defaults::PLACEHOLDER_COLOR,
            no_data_found_text: defaults::NO_DATA_FOUND_TEXT.to_string(),
            style: PickerStyle::default(),
            search_input_props: SearchInputProps::default(),
            list_props: ListProps::default(),
            sheet_props: SheetProps::default(),
        }
    }
}

impl PickerConfig {
    /// Panel height for a frame of `frame_height` rows.
    pub fn panel_height(&self, frame_height: u16) -> u16 {
        self.height
            .unwrap_or_else(|| (f64::from(frame_height) * defaults::HEIGHT_RATIO).floor() as u16)
            .min(frame_height)
    }
}
