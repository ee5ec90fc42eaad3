//! Terminal plumbing shared by the widgets.
//!
//! - `interaction` - click/scroll regions recorded during render
//! - `theme` - default colors

pub mod interaction;
pub mod theme;

pub use interaction::{ClickRegion, InteractionRegistry, InteractiveRegion};
