//! Key handling for the artworks table.

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

/// What a key press asks the table to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    CursorUp,
    CursorDown,
    CursorFirst,
    CursorLast,
    /// Check or uncheck the row under the cursor.
    ToggleRow,
    /// Header checkbox: select or clear every row of the page.
    TogglePage,
    NextPage,
    PreviousPage,
    LargerPageSize,
    SmallerPageSize,
    /// Sort by the n-th sortable column (zero-based).
    Sort(usize),
    Retry,
    Quit,
}

/// Maps a key press to a table action.
pub fn action_for(key: KeyEvent) -> Option<TableAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(TableAction::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => TableAction::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => TableAction::CursorDown,
        KeyCode::Home | KeyCode::Char('g') => TableAction::CursorFirst,
        KeyCode::End | KeyCode::Char('G') => TableAction::CursorLast,
        KeyCode::Char(' ') | KeyCode::Enter => TableAction::ToggleRow,
        KeyCode::Char('a') => TableAction::TogglePage,
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n') | KeyCode::Char('l') => {
            TableAction::NextPage
        }
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p') | KeyCode::Char('h') => {
            TableAction::PreviousPage
        }
        KeyCode::Char('+') | KeyCode::Char('=') => TableAction::LargerPageSize,
        KeyCode::Char('-') => TableAction::SmallerPageSize,
        KeyCode::Char(c @ '1'..='9') => TableAction::Sort(c as usize - '1' as usize),
        KeyCode::Char('r') => TableAction::Retry,
        KeyCode::Char('q') | KeyCode::Esc => TableAction::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(action_for(key(KeyCode::Char('j'))), Some(TableAction::CursorDown));
        assert_eq!(action_for(key(KeyCode::Up)), Some(TableAction::CursorUp));
        assert_eq!(action_for(key(KeyCode::PageDown)), Some(TableAction::NextPage));
        assert_eq!(action_for(key(KeyCode::Char('p'))), Some(TableAction::PreviousPage));
    }

    #[test]
    fn test_number_keys_sort() {
        assert_eq!(action_for(key(KeyCode::Char('1'))), Some(TableAction::Sort(0)));
        assert_eq!(action_for(key(KeyCode::Char('6'))), Some(TableAction::Sort(5)));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c), Some(TableAction::Quit));
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_a), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut release = key(KeyCode::Char(' '));
        release.kind = KeyEventKind::Release;
        assert_eq!(action_for(release), None);
    }
}
