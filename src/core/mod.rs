//! Core module - pure game logic with no external dependencies
//!
//! Deck, shuffle, pair-resolution state machine, scoring and the session
//! clock. Zero dependencies on UI, input, or I/O.

pub mod clock;
pub mod deck;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use clock::{GameClock, TickHandle};
pub use deck::{Card, Deck};
pub use game_state::{GameState, OpenSlots};
pub use rng::SimpleRng;
pub use scoring::{loses_star_at, stars_for};
pub use snapshot::GameSnapshot;
