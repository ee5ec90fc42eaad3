//! Per-region style overrides.
//!
//! Every field is optional and falls back to its own default, so overriding
//! the label color does not reset the search field or the rows.

use ratatui::style::{Color, Modifier, Style};

use crate::tui::theme::{INPUT_BORDER, SPINNER_GREY, TEXT_DEFAULT};

/// Container and text style of one sub-region.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegionStyle {
    pub container: Option<Style>,
    pub text: Option<Style>,
}

impl RegionStyle {
    pub fn text(style: Style) -> Self {
        Self {
            container: None,
            text: Some(style),
        }
    }

    pub fn container(style: Style) -> Self {
        Self {
            container: Some(style),
            text: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivityIndicatorStyle {
    pub style: Option<Style>,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PickerStyle {
    /// Sheet container. Its background also backs the sticky header.
    pub sheet: Option<Style>,
    /// Search field: container is the border, text the typed value
    pub input: RegionStyle,
    pub close: RegionStyle,
    pub label: RegionStyle,
    pub no_data_found: RegionStyle,
    pub item: RegionStyle,
    pub activity_indicator: ActivityIndicatorStyle,
}

// Resolved styles. Text overrides replace the default outright; container
// and row overrides are patched over it.
impl PickerStyle {
    pub(crate) fn sheet(&self) -> Style {
        self.sheet.unwrap_or_default()
    }

    /// Header background follows the sheet's background.
    pub(crate) fn header(&self) -> Style {
        match self.sheet.and_then(|s| s.bg) {
            Some(bg) => Style::new().bg(bg),
            None => Style::new(),
        }
    }

    pub(crate) fn input_border(&self) -> Style {
        Style::new()
            .fg(INPUT_BORDER)
            .patch(self.input.container.unwrap_or_default())
    }

    pub(crate) fn input_text(&self) -> Style {
        self.input.text.unwrap_or(Style::new().fg(TEXT_DEFAULT))
    }

    pub(crate) fn close_container(&self) -> Style {
        self.close.container.unwrap_or_default()
    }

    pub(crate) fn close_text(&self) -> Style {
        self.close.text.unwrap_or(Style::new().fg(TEXT_DEFAULT))
    }

    pub(crate) fn label_container(&self) -> Style {
        self.label.container.unwrap_or_default()
    }

    pub(crate) fn label_text(&self) -> Style {
        self.label
            .text
            .unwrap_or(Style::new().fg(TEXT_DEFAULT).add_modifier(Modifier::BOLD))
    }

    pub(crate) fn no_data_found_container(&self) -> Style {
        self.no_data_found.container.unwrap_or_default()
    }

    pub(crate) fn no_data_found_text(&self) -> Style {
        self.no_data_found.text.unwrap_or(Style::new().fg(TEXT_DEFAULT))
    }

    pub(crate) fn item_container(&self) -> Style {
        self.item.container.unwrap_or_default()
    }

    /// Default row text: bold when committed, then the override on top.
    pub(crate) fn item_text(&self, selected: bool) -> Style {
        let weight = if selected {
            Style::new().add_modifier(Modifier::BOLD)
        } else {
            Style::new().remove_modifier(Modifier::BOLD)
        };
        weight.patch(self.item.text.unwrap_or_default())
    }

    pub(crate) fn spinner(&self) -> Style {
        Style::new()
            .fg(self.activity_indicator.color.unwrap_or(SPINNER_GREY))
            .patch(self.activity_indicator.style.unwrap_or_default())
    }
}
