use ratatui::style::Color;

// Search field
pub const INPUT_BORDER: Color = Color::Rgb(205, 212, 217);     // #CDD4D9
pub const PLACEHOLDER_GREY: Color = Color::Rgb(139, 147, 165);  // #8B93A5

// Loading indicator
pub const SPINNER_GREY: Color = Color::Rgb(153, 153, 153);      // #999999

// Text that follows the terminal's own foreground
pub const TEXT_DEFAULT: Color = Color::Reset;

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
