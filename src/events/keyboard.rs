//! Keyboard event handling by focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::picker::search::{SearchEdit, SearchMotion};

use super::{KeyContext, PickerAction};

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(ctx: &KeyContext, key: KeyEvent) -> PickerAction {
    if ctx.searchable && ctx.search_focused {
        handle_search_focus(key)
    } else {
        handle_list_focus(ctx, key)
    }
}

fn handle_search_focus(key: KeyEvent) -> PickerAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => PickerAction::Dismiss,
        KeyCode::Enter => PickerAction::ActivateCursor,
        KeyCode::Tab | KeyCode::BackTab => PickerAction::ToggleFocus,

        // List navigation stays available while typing
        KeyCode::Up => PickerAction::CursorUp,
        KeyCode::Down => PickerAction::CursorDown,
        KeyCode::PageUp => PickerAction::PageUp,
        KeyCode::PageDown => PickerAction::PageDown,

        // Emacs-style line editing
        KeyCode::Char('u') if ctrl => PickerAction::Edit(SearchEdit::ClearToStart),
        KeyCode::Char('k') if ctrl => PickerAction::Edit(SearchEdit::ClearToEnd),
        KeyCode::Char('w') if ctrl => PickerAction::Edit(SearchEdit::DeleteWordBack),
        KeyCode::Char('a') if ctrl => PickerAction::Motion(SearchMotion::Home),
        KeyCode::Char('e') if ctrl => PickerAction::Motion(SearchMotion::End),

        KeyCode::Backspace => PickerAction::Edit(SearchEdit::Backspace),
        KeyCode::Delete => PickerAction::Edit(SearchEdit::Delete),
        KeyCode::Left => PickerAction::Motion(SearchMotion::Left),
        KeyCode::Right => PickerAction::Motion(SearchMotion::Right),
        KeyCode::Home => PickerAction::Motion(SearchMotion::Home),
        KeyCode::End => PickerAction::Motion(SearchMotion::End),

        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            PickerAction::Edit(SearchEdit::Insert(c))
        }
        _ => PickerAction::None,
    }
}

fn handle_list_focus(ctx: &KeyContext, key: KeyEvent) -> PickerAction {
    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => PickerAction::Dismiss,
        KeyCode::Enter => PickerAction::ActivateCursor,
        KeyCode::Tab | KeyCode::BackTab if ctx.searchable => PickerAction::ToggleFocus,

        KeyCode::Up => PickerAction::CursorUp,
        KeyCode::Down => PickerAction::CursorDown,
        KeyCode::PageUp => PickerAction::PageUp,
        KeyCode::PageDown => PickerAction::PageDown,
        KeyCode::Home => PickerAction::CursorFirst,
        KeyCode::End => PickerAction::CursorLast,

        // Typing on the list goes to the search field
        KeyCode::Char(c) if ctx.searchable && plain => PickerAction::Edit(SearchEdit::Insert(c)),
        KeyCode::Backspace if ctx.searchable => PickerAction::Edit(SearchEdit::Backspace),

        KeyCode::Char('k') if plain => PickerAction::CursorUp,
        KeyCode::Char('j') if plain => PickerAction::CursorDown,
        KeyCode::Char('g') if plain => PickerAction::CursorFirst,
        KeyCode::Char('G') => PickerAction::CursorLast,
        KeyCode::Char(' ') => PickerAction::ActivateCursor,
        _ => PickerAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    const SEARCHING: KeyContext = KeyContext {
        searchable: true,
        search_focused: true,
    };

    const BROWSING: KeyContext = KeyContext {
        searchable: false,
        search_focused: false,
    };

    #[test]
    fn test_typing_edits_search() {
        assert_eq!(
            handle_key_event(&SEARCHING, key(KeyCode::Char('j'))),
            PickerAction::Edit(SearchEdit::Insert('j'))
        );
        assert_eq!(
            handle_key_event(&SEARCHING, ctrl('u')),
            PickerAction::Edit(SearchEdit::ClearToStart)
        );
        assert_eq!(
            handle_key_event(&SEARCHING, key(KeyCode::Left)),
            PickerAction::Motion(SearchMotion::Left)
        );
    }

    #[test]
    fn test_vim_keys_without_search() {
        assert_eq!(
            handle_key_event(&BROWSING, key(KeyCode::Char('j'))),
            PickerAction::CursorDown
        );
        assert_eq!(
            handle_key_event(&BROWSING, key(KeyCode::Char('k'))),
            PickerAction::CursorUp
        );
        assert_eq!(handle_key_event(&BROWSING, key(KeyCode::Tab)), PickerAction::None);
    }

    #[test]
    fn test_list_focus_typing_returns_to_search() {
        let ctx = KeyContext {
            searchable: true,
            search_focused: false,
        };
        assert_eq!(
            handle_key_event(&ctx, key(KeyCode::Char('j'))),
            PickerAction::Edit(SearchEdit::Insert('j'))
        );
        assert_eq!(handle_key_event(&ctx, key(KeyCode::Home)), PickerAction::CursorFirst);
        assert_eq!(handle_key_event(&ctx, key(KeyCode::Tab)), PickerAction::ToggleFocus);
    }

    #[test]
    fn test_common_keys() {
        for ctx in [SEARCHING, BROWSING] {
            assert_eq!(handle_key_event(&ctx, key(KeyCode::Esc)), PickerAction::Dismiss);
            assert_eq!(
                handle_key_event(&ctx, key(KeyCode::Enter)),
                PickerAction::ActivateCursor
            );
            assert_eq!(handle_key_event(&ctx, key(KeyCode::Down)), PickerAction::CursorDown);
        }
    }
}
