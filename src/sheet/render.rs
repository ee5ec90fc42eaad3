use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::state::SheetProps;

const INDICATOR_WIDTH: u16 = 8;

/// Areas of a rendered sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    /// The whole panel, border included
    pub panel: Rect,
    /// Content area inside the border
    pub inner: Rect,
    /// Drag handle on the top edge
    pub indicator: Rect,
}

/// Bottom-anchored, full-width panel of `height` rows, pushed down by
/// `drag_offset` while the indicator is being dragged.
pub fn sheet_area(area: Rect, height: u16, drag_offset: u16) -> Rect {
    let height = height.min(area.height);
    let top = area.y + area.height - height;
    let y = (top + drag_offset).min(area.bottom());
    Rect::new(area.x, y, area.width, area.bottom() - y)
}

/// Clear the panel area and draw the sheet frame.
pub fn render_sheet(frame: &mut Frame, panel: Rect, props: &SheetProps, style: Option<Style>) -> SheetLayout {
    // Clear the area behind the sheet
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::TOP)
        .style(style.unwrap_or_default());
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let width = INDICATOR_WIDTH.min(panel.width);
    let indicator = Rect::new(
        panel.x + (panel.width - width) / 2,
        panel.y,
        width,
        panel.height.min(1),
    );

    if let Some(color) = props.indicator_color {
        let bar = Line::from(Span::styled(
            "━".repeat(indicator.width as usize),
            Style::new().fg(color),
        ));
        frame.render_widget(Paragraph::new(bar), indicator);
    }

    SheetLayout {
        panel,
        inner,
        indicator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_area_bottom_anchored() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(sheet_area(area, 12, 0), Rect::new(0, 12, 80, 12));
    }

    #[test]
    fn test_sheet_area_clamped_to_frame() {
        let area = Rect::new(0, 0, 80, 10);
        assert_eq!(sheet_area(area, 40, 0), area);
    }

    #[test]
    fn test_sheet_area_follows_drag() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(sheet_area(area, 12, 3), Rect::new(0, 15, 80, 9));
        assert_eq!(sheet_area(area, 12, 50).height, 0);
    }
}
