//! Keyboard cursor over a list.
//!
//! The cursor is the row Enter would activate. It is separate from the
//! committed selection, which only changes on activation.

/// Cursor movement with default implementations.
///
/// # Example
///
/// ```ignore
/// struct Rows {
///     items: Vec<String>,
///     cursor: usize,
/// }
///
/// impl ListCursor for Rows {
///     type Item = String;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.items
///     }
///
///     fn cursor_index(&self) -> usize {
///         self.cursor
///     }
///
///     fn set_cursor_index(&mut self, index: usize) {
///         self.cursor = index;
///     }
/// }
/// ```
pub trait ListCursor {
    type Item;

    fn items(&self) -> &[Self::Item];

    fn cursor_index(&self) -> usize;

    fn set_cursor_index(&mut self, index: usize);

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Move down one row (wraps around)
    fn cursor_next(&mut self) {
        if !self.is_empty() {
            let next = (self.cursor_index() + 1) % self.len();
            self.set_cursor_index(next);
        }
    }

    /// Move up one row (wraps around)
    fn cursor_prev(&mut self) {
        if !self.is_empty() {
            let prev = self
                .cursor_index()
                .checked_sub(1)
                .unwrap_or(self.len() - 1);
            self.set_cursor_index(prev);
        }
    }

    /// Move by `delta` rows, stopping at either end
    fn move_cursor_by(&mut self, delta: isize) {
        if !self.is_empty() {
            let target = self.cursor_index().saturating_add_signed(delta);
            self.set_cursor_index(target.min(self.len() - 1));
        }
    }

    fn cursor_first(&mut self) {
        self.set_cursor_index(0);
    }

    fn cursor_last(&mut self) {
        self.set_cursor_index(self.len().saturating_sub(1));
    }

    fn cursor_item(&self) -> Option<&Self::Item> {
        self.items().get(self.cursor_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rows {
        items: Vec<&'static str>,
        cursor: usize,
    }

    impl ListCursor for Rows {
        type Item = &'static str;

        fn items(&self) -> &[Self::Item] {
            &self.items
        }

        fn cursor_index(&self) -> usize {
            self.cursor
        }

        fn set_cursor_index(&mut self, index: usize) {
            self.cursor = index;
        }
    }

    fn rows() -> Rows {
        Rows {
            items: vec!["Red", "Green", "Blue"],
            cursor: 0,
        }
    }

    #[test]
    fn test_next_prev_wrap() {
        let mut rows = rows();
        rows.cursor_prev();
        assert_eq!(rows.cursor_item(), Some(&"Blue"));
        rows.cursor_next();
        assert_eq!(rows.cursor_item(), Some(&"Red"));
    }

    #[test]
    fn test_move_by_clamps() {
        let mut rows = rows();
        rows.move_cursor_by(10);
        assert_eq!(rows.cursor_index(), 2);
        rows.move_cursor_by(-10);
        assert_eq!(rows.cursor_index(), 0);
    }

    #[test]
    fn test_empty_list() {
        let mut rows = Rows {
            items: vec![],
            cursor: 0,
        };
        rows.cursor_next();
        rows.move_cursor_by(3);
        rows.cursor_last();
        assert_eq!(rows.cursor_index(), 0);
        assert!(rows.cursor_item().is_none());
    }
}
