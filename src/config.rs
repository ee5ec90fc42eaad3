//! Configuration file support for picksheet.
//!
//! Configuration is loaded from `~/.config/picksheet/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/picksheet/config.toml
//! label = "Colors"
//! searchable = true
//! height = 14
//! close_text = "Done"
//! placeholder_text = "Filter"
//! placeholder_color = "#8B93A5"
//! no_data_found_text = "Nothing here."
//!
//! [style]
//! sheet_bg = "#1E1E2E"
//! item_fg = "white"
//! label_fg = "yellow"
//! spinner_fg = "#999999"
//!
//! [list]
//! highlight_symbol = "▶ "
//! bottom_to_top = false
//!
//! [sheet]
//! indicator_color = "gray"
//! close_on_touch_backdrop = true
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::{Color, Style};
use ratatui::widgets::ListDirection;
use serde::Deserialize;

use crate::error::{PickerError, Result};
use crate::picker::{ActivityIndicatorStyle, PickerConfig, PickerStyle, RegionStyle};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Label shown above the rows
    pub label: Option<String>,

    pub searchable: Option<bool>,

    /// Panel height in rows
    pub height: Option<u16>,

    pub close_text: Option<String>,
    pub placeholder_text: Option<String>,
    pub placeholder_color: Option<String>,
    pub no_data_found_text: Option<String>,

    pub style: StyleConfig,
    pub list: ListConfig,
    pub search: SearchConfig,
    pub sheet: SheetConfig,
}

/// Color overrides. Values are anything `ratatui::style::Color` parses:
/// names (`"red"`), indices (`"42"`) or hex (`"#1E1E2E"`).
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub sheet_bg: Option<String>,
    pub item_fg: Option<String>,
    pub label_fg: Option<String>,
    pub close_fg: Option<String>,
    pub input_fg: Option<String>,
    pub input_border: Option<String>,
    pub no_data_fg: Option<String>,
    pub spinner_fg: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ListConfig {
    pub highlight_symbol: Option<String>,
    pub scroll_padding: Option<usize>,
    pub bottom_to_top: Option<bool>,
    pub show_scrollbar: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub max_length: Option<usize>,
    pub auto_focus: Option<bool>,
    pub clear_button: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SheetConfig {
    pub indicator_color: Option<String>,
    pub gesture_enabled: Option<bool>,
    pub keyboard_should_persist_taps: Option<bool>,
    pub close_on_touch_backdrop: Option<bool>,
}

impl Config {
    /// Load configuration from `path`, or the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("picksheet")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(
        mut self,
        label: Option<String>,
        searchable: Option<bool>,
        height: Option<u16>,
    ) -> Self {
        if label.is_some() {
            self.label = label;
        }
        if searchable.is_some() {
            self.searchable = searchable;
        }
        if height.is_some() {
            self.height = height;
        }
        self
    }

    /// Picker settings with every unset value left at its default.
    pub fn picker_config(&self) -> PickerConfig {
        let mut config = PickerConfig {
            label: self.label.clone(),
            height: self.height,
            style: self.picker_style(),
            ..PickerConfig::default()
        };

        if let Some(searchable) = self.searchable {
            config.searchable = searchable;
        }
        if let Some(text) = &self.close_text {
            config.close_text = text.clone();
        }
        if let Some(text) = &self.placeholder_text {
            config.placeholder_text = text.clone();
        }
        if let Some(color) = color_setting("placeholder_color", &self.placeholder_color) {
            config.placeholder_color = color;
        }
        if let Some(text) = &self.no_data_found_text {
            config.no_data_found_text = text.clone();
        }

        let list = &mut config.list_props;
        if let Some(symbol) = &self.list.highlight_symbol {
            list.highlight_symbol = symbol.clone();
        }
        if let Some(padding) = self.list.scroll_padding {
            list.scroll_padding = padding;
        }
        if let Some(bottom_to_top) = self.list.bottom_to_top {
            list.direction = if bottom_to_top {
                ListDirection::BottomToTop
            } else {
                ListDirection::TopToBottom
            };
        }
        if let Some(show) = self.list.show_scrollbar {
            list.show_scrollbar = show;
        }

        let search = &mut config.search_input_props;
        search.max_length = self.search.max_length.or(search.max_length);
        search.auto_focus = self.search.auto_focus.unwrap_or(search.auto_focus);
        search.clear_button = self.search.clear_button.unwrap_or(search.clear_button);

        let sheet = &mut config.sheet_props;
        if let Some(color) = color_setting("sheet.indicator_color", &self.sheet.indicator_color) {
            sheet.indicator_color = Some(color);
        }
        sheet.gesture_enabled = self.sheet.gesture_enabled.unwrap_or(sheet.gesture_enabled);
        sheet.keyboard_should_persist_taps = self
            .sheet
            .keyboard_should_persist_taps
            .unwrap_or(sheet.keyboard_should_persist_taps);
        sheet.close_on_touch_backdrop = self
            .sheet
            .close_on_touch_backdrop
            .unwrap_or(sheet.close_on_touch_backdrop);

        config
    }

    /// Style overrides from the `[style]` table. Invalid colors are
    /// reported and skipped.
    pub fn picker_style(&self) -> PickerStyle {
        let style = &self.style;
        let fg = |name: &str, value: &Option<String>| {
            color_setting(name, value).map(|color| Style::new().fg(color))
        };

        PickerStyle {
            sheet: color_setting("style.sheet_bg", &style.sheet_bg).map(|c| Style::new().bg(c)),
            input: RegionStyle {
                container: fg("style.input_border", &style.input_border),
                text: fg("style.input_fg", &style.input_fg),
            },
            close: RegionStyle {
                container: None,
                text: fg("style.close_fg", &style.close_fg),
            },
            label: RegionStyle {
                container: None,
                text: fg("style.label_fg", &style.label_fg),
            },
            no_data_found: RegionStyle {
                container: None,
                text: fg("style.no_data_fg", &style.no_data_fg),
            },
            item: RegionStyle {
                container: None,
                text: fg("style.item_fg", &style.item_fg),
            },
            activity_indicator: ActivityIndicatorStyle {
                style: None,
                color: color_setting("style.spinner_fg", &style.spinner_fg),
            },
        }
    }
}

/// Parse a color string.
pub fn parse_color(value: &str) -> Result<Color> {
    Color::from_str(value.trim())
        .map_err(|_| PickerError::Config(format!("invalid color {:?}", value)))
}

fn color_setting(name: &str, value: &Option<String>) -> Option<Color> {
    let value = value.as_deref()?;
    match parse_color(value) {
        Ok(color) => Some(color),
        Err(e) => {
            eprintln!("Warning: ignoring {}: {}", name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::defaults;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.label.is_none());
        assert!(config.searchable.is_none());
        assert_eq!(config.picker_style(), PickerStyle::default());

        let picker = config.picker_config();
        assert_eq!(picker.close_text, defaults::CLOSE_TEXT);
        assert_eq!(picker.placeholder_color, defaults::PLACEHOLDER_COLOR);
    }

    #[test]
    fn test_parse_config() {
        let toml = r##"
            label = "Colors"
            searchable = true
            height = 14
            placeholder_color = "red"

            [style]
            sheet_bg = "#1E1E2E"
            item_fg = "white"

            [list]
            bottom_to_top = true

            [sheet]
            indicator_color = "gray"
            gesture_enabled = false
        "##;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.label, Some("Colors".to_string()));

        let picker = config.picker_config();
        assert!(picker.searchable);
        assert_eq!(picker.height, Some(14));
        assert_eq!(picker.placeholder_color, Color::Red);
        assert_eq!(picker.style.sheet, Some(Style::new().bg(Color::Rgb(0x1E, 0x1E, 0x2E))));
        assert_eq!(picker.style.item.text, Some(Style::new().fg(Color::White)));
        assert_eq!(picker.list_props.direction, ListDirection::BottomToTop);
        assert_eq!(picker.sheet_props.indicator_color, Some(Color::Gray));
        assert!(!picker.sheet_props.gesture_enabled);
        // Untouched settings keep their defaults
        assert!(picker.sheet_props.close_on_touch_backdrop);
        assert_eq!(picker.close_text, defaults::CLOSE_TEXT);
    }

    #[test]
    fn test_invalid_color_skipped() {
        let config: Config = toml::from_str(
            r#"
            [style]
            label_fg = "not-a-color"
            close_fg = "blue"
        "#,
        )
        .unwrap();

        let style = config.picker_style();
        assert!(style.label.text.is_none());
        assert_eq!(style.close.text, Some(Style::new().fg(Color::Blue)));
    }

    #[test]
    fn test_overrides_win() {
        let config = Config {
            label: Some("From file".to_string()),
            height: Some(10),
            ..Config::default()
        }
        .with_overrides(Some("From CLI".to_string()), Some(false), None);

        assert_eq!(config.label, Some("From CLI".to_string()));
        assert_eq!(config.searchable, Some(false));
        assert_eq!(config.height, Some(10));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let config = Config::load(Some(Path::new("/nonexistent/picksheet/config.toml")));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("picksheet_bad_{}.toml", std::process::id()));
        std::fs::write(&path, "height = \"tall\"").unwrap();
        let result = Config::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(PickerError::Config(_))));
    }
}
