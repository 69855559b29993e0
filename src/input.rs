//! Input module - key mapping and the board cursor
//!
//! Translates crossterm key events into presentation commands. The cursor is
//! purely presentation state: the core only ever sees the final card index
//! of a flip intent.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{UiCommand, DECK_SIZE, GRID_COLS};

/// Quit keys: q, Esc, Ctrl-C
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Map a key press to a presentation command
pub fn map_key(code: KeyCode) -> Option<UiCommand> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(UiCommand::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(UiCommand::CursorRight),
        KeyCode::Up | KeyCode::Char('k') => Some(UiCommand::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiCommand::CursorDown),
        KeyCode::Char(' ') | KeyCode::Enter => Some(UiCommand::Flip),
        KeyCode::Char('r') => Some(UiCommand::Restart),
        _ => None,
    }
}

/// Cursor over the card grid, clamped to the board edges
#[derive(Debug, Clone, Copy, Default)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn apply(&mut self, command: UiCommand) {
        let col = self.index % GRID_COLS;
        match command {
            UiCommand::CursorLeft if col > 0 => self.index -= 1,
            UiCommand::CursorRight if col + 1 < GRID_COLS => self.index += 1,
            UiCommand::CursorUp if self.index >= GRID_COLS => self.index -= GRID_COLS,
            UiCommand::CursorDown if self.index + GRID_COLS < DECK_SIZE => {
                self.index += GRID_COLS
            }
            _ => {}
        }
        debug_assert!(self.index < DECK_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_arrows_and_vim() {
        assert_eq!(map_key(KeyCode::Left), Some(UiCommand::CursorLeft));
        assert_eq!(map_key(KeyCode::Char('h')), Some(UiCommand::CursorLeft));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(UiCommand::Flip));
        assert_eq!(map_key(KeyCode::Enter), Some(UiCommand::Flip));
        assert_eq!(map_key(KeyCode::Char('r')), Some(UiCommand::Restart));
        assert_eq!(map_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_should_quit_keys() {
        assert!(should_quit(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(should_quit(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_cursor_clamped_at_edges() {
        let mut cursor = Cursor::default();
        cursor.apply(UiCommand::CursorLeft);
        cursor.apply(UiCommand::CursorUp);
        assert_eq!(cursor.index(), 0);

        for _ in 0..10 {
            cursor.apply(UiCommand::CursorRight);
        }
        assert_eq!(cursor.index(), GRID_COLS - 1);

        for _ in 0..10 {
            cursor.apply(UiCommand::CursorDown);
        }
        assert_eq!(cursor.index(), DECK_SIZE - 1);
    }

    #[test]
    fn test_cursor_walks_the_grid() {
        let mut cursor = Cursor::default();
        cursor.apply(UiCommand::CursorDown);
        cursor.apply(UiCommand::CursorRight);
        assert_eq!(cursor.index(), GRID_COLS + 1);
        cursor.apply(UiCommand::CursorUp);
        assert_eq!(cursor.index(), 1);
    }
}
