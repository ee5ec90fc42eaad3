//! Slide-up selection list for ratatui applications.
//!
//! A [`Picker`] lives in a bottom sheet registered with a [`SheetManager`].
//! It shows caller-supplied data, forwards search input untouched, and
//! reports the activated row through a callback.
//!
//! ```ignore
//! let manager = SheetManager::new();
//! let mut picker = Picker::new("colors", vec!["Red".to_string(), "Blue".to_string()])
//!     .label("Colors")
//!     .on_select(|color| println!("picked {}", color));
//! picker.mount(&manager)?;
//! sheet::open(&manager, "colors");
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod log;
pub mod picker;
pub mod scroll;
pub mod sheet;
pub mod tui;

pub use error::{PickerError, Result};
pub use picker::{Picker, PickerConfig, PickerStyle, RowRenderer, RowStrategy, Selection};
pub use sheet::{SheetHandle, SheetId, SheetManager};
