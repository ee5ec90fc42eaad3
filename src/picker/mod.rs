//! Selectable overlay list.
//!
//! A [`Picker`] shows a data set in a slide-up sheet, forwards search input
//! to the caller, and reports the activated row back through a callback.
//! It never filters: the caller derives a new data set from each query and
//! hands it back with [`Picker::set_data`].
//!
//! - `component` - construction, lifecycle, state and actions
//! - `render` - header, rows and empty/loading states
//! - `selection` - committed-row state machine
//! - `cursor` - keyboard cursor movement
//! - `search` - search field edits
//! - `types` - item labels and row strategies
//! - `props` / `style` - configuration

mod component;
mod cursor;
mod props;
mod render;
pub mod search;
mod selection;
mod style;
mod types;

pub use cursor::ListCursor;
pub use props::{ListProps, PickerConfig, SearchInputProps, defaults};
pub use selection::Selection;
pub use style::{ActivityIndicatorStyle, PickerStyle, RegionStyle};
pub use types::{LabelFn, Labeled, Named, RowPress, RowRenderer, RowStrategy};

use crate::scroll::ScrollHelper;
use crate::sheet::{SheetHandle, SheetId};
use crate::tui::InteractionRegistry;

/// Where keyboard input goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    Search,
    #[default]
    List,
}

type SearchCallback = Box<dyn FnMut(&str)>;
type SelectCallback<T> = Box<dyn FnMut(&T)>;

/// Slide-up list of `T` with optional search and single selection.
pub struct Picker<T> {
    id: SheetId,
    config: PickerConfig,
    data: Vec<T>,
    rows: RowStrategy<T>,
    /// Search text as last supplied by the caller
    input_value: String,
    loading: bool,
    on_search: Option<SearchCallback>,
    on_select: Option<SelectCallback<T>>,

    selection: Selection,
    cursor: usize,
    focus: Focus,
    /// Char position inside `input_value`
    input_cursor: usize,
    /// First rendered row
    offset: usize,
    /// Rows that fit the list area on the last render
    page_size: usize,

    sheet: Option<SheetHandle>,
    /// Open state seen on the last sync, to detect opens from elsewhere
    was_open: bool,
    interactions: InteractionRegistry,
    scroll: ScrollHelper,
    spinner_frame: usize,
}
