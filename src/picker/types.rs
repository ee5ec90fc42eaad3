//! Item and row-rendering contracts.

use ratatui::widgets::ListItem;
use serde::{Deserialize, Serialize};

/// Items that can be shown by the default row, which displays their label.
pub trait Labeled {
    /// Display label. `None` renders an empty row.
    fn label(&self) -> Option<&str>;
}

impl Labeled for String {
    fn label(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Labeled for &str {
    fn label(&self) -> Option<&str> {
        Some(*self)
    }
}

/// Objects carry their label in a `"name"` string field.
impl Labeled for serde_json::Value {
    fn label(&self) -> Option<&str> {
        self.get("name").and_then(serde_json::Value::as_str)
    }
}

/// Minimal labelled item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named {
    pub name: String,
}

impl Named {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Labeled for Named {
    fn label(&self) -> Option<&str> {
        Some(self.name.as_str())
    }
}

/// What a custom row wants done when it is activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPress {
    /// The renderer took care of it; the picker does nothing
    #[default]
    Handled,
    /// Commit the row as the selection, exactly like a default row
    Commit,
}

/// Caller-supplied row template.
///
/// Custom rows own their selection visuals. Activation is routed to
/// [`RowRenderer::on_press`]; the default keeps the picker out of it.
pub trait RowRenderer<T> {
    fn render(&self, item: &T, index: usize) -> ListItem<'static>;

    fn on_press(&mut self, _item: &T, _index: usize) -> RowPress {
        RowPress::Handled
    }
}

impl<T, F> RowRenderer<T> for F
where
    F: Fn(&T, usize) -> ListItem<'static>,
{
    fn render(&self, item: &T, index: usize) -> ListItem<'static> {
        self(item, index)
    }
}

pub type LabelFn<T> = fn(&T) -> Option<&str>;

/// How rows are produced.
pub enum RowStrategy<T> {
    /// Built-in row showing a label, bold when committed
    DefaultByLabel(LabelFn<T>),
    Custom(Box<dyn RowRenderer<T>>),
}

impl<T: Labeled> RowStrategy<T> {
    pub fn by_label() -> Self {
        RowStrategy::DefaultByLabel(<T as Labeled>::label)
    }
}

impl<T> RowStrategy<T> {
    /// Default rows for items without a [`Labeled`] impl.
    pub fn label_with(label: LabelFn<T>) -> Self {
        RowStrategy::DefaultByLabel(label)
    }

    pub fn custom(renderer: impl RowRenderer<T> + 'static) -> Self {
        RowStrategy::Custom(Box::new(renderer))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, RowStrategy::Custom(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_label_reads_name_field() {
        assert_eq!(json!({"name": "Red"}).label(), Some("Red"));
        assert_eq!(json!({"title": "Red"}).label(), None);
        assert_eq!(json!({"name": 4}).label(), None);
        assert_eq!(json!("Red").label(), None);
    }

    #[test]
    fn test_by_label_uses_trait() {
        let strategy = RowStrategy::<Named>::by_label();
        match strategy {
            RowStrategy::DefaultByLabel(label) => {
                assert_eq!(label(&Named::new("Blue")), Some("Blue"));
            }
            RowStrategy::Custom(_) => panic!("expected default rows"),
        }
    }

    #[test]
    fn test_closure_renderer_defaults_to_handled() {
        let mut renderer = |item: &u32, _index: usize| ListItem::new(item.to_string());
        assert_eq!(
            RowRenderer::<u32>::on_press(&mut renderer, &7, 0),
            RowPress::Handled
        );
    }
}
