//! Full-state snapshot for renderers and tests.
//!
//! Observers get incremental render instructions; a snapshot is the bulk
//! alternative used to prime a view at start/restart.

use crate::core::game_state::GameState;
use crate::types::{CardState, Face, DECK_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub faces: [Face; DECK_SIZE],
    pub card_states: [CardState; DECK_SIZE],
    pub moves: u32,
    pub stars: u8,
    pub elapsed_seconds: u32,
    pub input_locked: bool,
    pub won: bool,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let mut faces = [Face::Spade; DECK_SIZE];
        let mut card_states = [CardState::Hidden; DECK_SIZE];
        for position in 0..DECK_SIZE {
            faces[position] = state.deck().face_at(position);
            card_states[position] = state.card_state(position);
        }

        Self {
            faces,
            card_states,
            moves: state.moves(),
            stars: state.stars(),
            elapsed_seconds: state.elapsed_seconds(),
            input_locked: state.is_input_locked(),
            won: state.is_won(),
            episode_id: state.episode_id(),
        }
    }
}
