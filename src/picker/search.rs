//! Search field editing.
//!
//! The field's text belongs to the caller. Edits are computed here as pure
//! functions of the current text and cursor, and the picker hands the
//! resulting string to `on_search` without storing it.

/// A change to the search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEdit {
    Insert(char),
    /// Pasted text, applied as a single edit
    InsertStr(String),
    Backspace,
    Delete,
    ClearToStart,
    ClearToEnd,
    DeleteWordBack,
    Clear,
}

/// Cursor movement inside the search text. Never changes the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMotion {
    Left,
    Right,
    Home,
    End,
}

/// Byte offset of the `cursor`-th char, or the end of `value`.
fn byte_pos(value: &str, cursor: usize) -> usize {
    value
        .char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

/// Clamp a char cursor to the text, which the caller may have replaced.
pub fn clamp_cursor(value: &str, cursor: usize) -> usize {
    cursor.min(value.chars().count())
}

/// Apply `edit` at `cursor`. Returns the new text and cursor, or None when
/// the edit changes nothing (so no search callback fires).
pub fn apply_edit(value: &str, cursor: usize, edit: &SearchEdit) -> Option<(String, usize)> {
    let cursor = clamp_cursor(value, cursor);
    let at = byte_pos(value, cursor);
    let (before, after) = value.split_at(at);

    match edit {
        SearchEdit::Insert(c) => Some((format!("{}{}{}", before, c, after), cursor + 1)),
        SearchEdit::InsertStr(text) => {
            if text.is_empty() {
                return None;
            }
            // Single-line field
            let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
            let added = text.chars().count();
            Some((format!("{}{}{}", before, text, after), cursor + added))
        }
        SearchEdit::Backspace => {
            if cursor == 0 {
                return None;
            }
            let start = byte_pos(value, cursor - 1);
            Some((format!("{}{}", &value[..start], after), cursor - 1))
        }
        SearchEdit::Delete => {
            let mut rest = after.chars();
            rest.next()?;
            Some((format!("{}{}", before, rest.as_str()), cursor))
        }
        SearchEdit::ClearToStart => {
            if cursor == 0 {
                return None;
            }
            Some((after.to_string(), 0))
        }
        SearchEdit::ClearToEnd => {
            if after.is_empty() {
                return None;
            }
            Some((before.to_string(), cursor))
        }
        SearchEdit::DeleteWordBack => {
            if cursor == 0 {
                return None;
            }
            let trimmed = before.trim_end();
            let word_start = trimmed
                .rfind(char::is_whitespace)
                .map(|i| i + trimmed[i..].chars().next().map(char::len_utf8).unwrap_or(1))
                .unwrap_or(0);
            let kept = &before[..word_start];
            Some((format!("{}{}", kept, after), kept.chars().count()))
        }
        SearchEdit::Clear => {
            if value.is_empty() {
                return None;
            }
            Some((String::new(), 0))
        }
    }
}

/// Move the cursor. Returns the new char cursor.
pub fn apply_motion(value: &str, cursor: usize, motion: SearchMotion) -> usize {
    let len = value.chars().count();
    let cursor = cursor.min(len);
    match motion {
        SearchMotion::Left => cursor.saturating_sub(1),
        SearchMotion::Right => (cursor + 1).min(len),
        SearchMotion::Home => 0,
        SearchMotion::End => len,
    }
}
