//! GameView: observer-driven render model and line production
//!
//! The view keeps its own copy of everything it draws (faces, visibility,
//! matched flags, counters) and updates it from the controller's render
//! instructions. It can also be primed wholesale from a snapshot, which is
//! how start/restart hand it the freshly dealt faces.

use crate::core::GameSnapshot;
use crate::observe::GameObserver;
use crate::types::{CardState, Face, DECK_SIZE, GRID_COLS, GRID_ROWS, MAX_STARS};

pub struct GameView {
    faces: [Face; DECK_SIZE],
    visible: [bool; DECK_SIZE],
    matched: [bool; DECK_SIZE],
    moves: u32,
    stars: u8,
    elapsed_seconds: u32,
    won: Option<(u32, u32)>,
}

impl GameView {
    pub fn new() -> Self {
        Self {
            faces: [Face::Spade; DECK_SIZE],
            visible: [false; DECK_SIZE],
            matched: [false; DECK_SIZE],
            moves: 0,
            stars: MAX_STARS,
            elapsed_seconds: 0,
            won: None,
        }
    }

    /// Replace the whole render model from a snapshot (start/restart)
    pub fn prime(&mut self, snapshot: &GameSnapshot) {
        for index in 0..DECK_SIZE {
            self.faces[index] = snapshot.faces[index];
            self.visible[index] = snapshot.card_states[index] == CardState::Open;
            self.matched[index] = snapshot.card_states[index] == CardState::Matched;
        }
        self.moves = snapshot.moves;
        self.stars = snapshot.stars;
        self.elapsed_seconds = snapshot.elapsed_seconds;
        self.won = if snapshot.won {
            Some((snapshot.elapsed_seconds, snapshot.moves))
        } else {
            None
        };
    }

    fn card_cell(&self, index: usize, under_cursor: bool) -> String {
        let glyph = if self.visible[index] || self.matched[index] {
            self.faces[index].glyph()
        } else {
            '?'
        };
        let (left, right) = if under_cursor {
            ('>', '<')
        } else if self.matched[index] {
            ('(', ')')
        } else {
            ('[', ']')
        };
        format!("{} {} {}", left, glyph, right)
    }

    fn star_row(&self) -> String {
        let mut row = String::new();
        for i in 0..MAX_STARS {
            row.push(if i < self.stars { '★' } else { '☆' });
        }
        row
    }

    /// Produce the full frame as plain text lines
    pub fn render_lines(&self, cursor_index: usize) -> Vec<String> {
        let mut lines = Vec::with_capacity(GRID_ROWS + 6);
        lines.push(" CONCENTRATION".to_string());
        lines.push(format!(
            " MOVES {:<4} STARS {}  TIME {}s",
            self.moves,
            self.star_row(),
            self.elapsed_seconds
        ));
        lines.push(String::new());

        for row in 0..GRID_ROWS {
            let mut line = String::from(" ");
            for col in 0..GRID_COLS {
                let index = row * GRID_COLS + col;
                line.push_str(&self.card_cell(index, index == cursor_index));
                line.push(' ');
            }
            lines.push(line);
        }

        lines.push(String::new());
        if let Some((seconds, moves)) = self.won {
            lines.push(format!(
                " YOU WON! {} moves in {}s. Press r to play again.",
                moves, seconds
            ));
        } else {
            lines.push(" arrows/hjkl move  space/enter flip  r restart  q quit".to_string());
        }
        lines
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObserver for GameView {
    fn on_card_visibility_changed(&mut self, index: usize, visible: bool) {
        if index < DECK_SIZE {
            self.visible[index] = visible;
            if !visible {
                self.matched[index] = false;
            }
        }
    }

    fn on_card_matched_changed(&mut self, index: usize, matched: bool) {
        if index < DECK_SIZE {
            self.matched[index] = matched;
        }
    }

    fn on_moves_changed(&mut self, count: u32) {
        self.moves = count;
    }

    fn on_stars_changed(&mut self, count: u8) {
        self.stars = count;
    }

    fn on_elapsed_time_changed(&mut self, seconds: u32) {
        self.elapsed_seconds = seconds;
    }

    fn on_game_won(&mut self, elapsed_seconds: u32, moves: u32) {
        self.won = Some((elapsed_seconds, moves));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_board_renders_question_marks() {
        let view = GameView::new();
        let lines = view.render_lines(0);

        // Header, status, blank, 4 grid rows, blank, help line.
        assert_eq!(lines.len(), GRID_ROWS + 5);
        assert!(lines[1].contains("MOVES 0"));
        assert!(lines[1].contains("★★★"));
        assert!(lines[3].starts_with(" > ? <"), "cursor on card 0: {}", lines[3]);
        assert!(lines[4].contains("[ ? ]"));
    }

    #[test]
    fn test_observer_updates_show_in_render() {
        let mut view = GameView::new();
        view.on_card_visibility_changed(0, true);
        view.on_moves_changed(5);
        view.on_stars_changed(2);
        view.on_elapsed_time_changed(42);

        let lines = view.render_lines(15);
        assert!(lines[3].contains(&format!("[ {} ]", view.faces[0].glyph())));
        assert!(lines[1].contains("MOVES 5"));
        assert!(lines[1].contains("★★☆"));
        assert!(lines[1].contains("TIME 42s"));
    }

    #[test]
    fn test_matched_cards_render_in_parentheses() {
        let mut view = GameView::new();
        view.on_card_matched_changed(1, true);

        let lines = view.render_lines(0);
        assert!(lines[3].contains(&format!("( {} )", view.faces[1].glyph())));
    }

    #[test]
    fn test_win_banner_replaces_help_line() {
        let mut view = GameView::new();
        view.on_game_won(30, 16);

        let lines = view.render_lines(0);
        let last = lines.last().unwrap();
        assert!(last.contains("YOU WON! 16 moves in 30s"));
    }

    #[test]
    fn test_prime_resets_win_banner() {
        let mut view = GameView::new();
        view.on_game_won(30, 16);

        let mut state = crate::core::GameState::new(1);
        state.start();
        view.prime(&GameSnapshot::capture(&state));

        let lines = view.render_lines(0);
        assert!(lines.last().unwrap().contains("q quit"));
        assert!(lines[1].contains("MOVES 0"));
    }
}
