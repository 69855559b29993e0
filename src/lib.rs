//! Terminal concentration (memory matching) card game.
//!
//! The crate is split the same way the game is: `core` holds the pure
//! state machine (deck, shuffle, pair resolution, scoring, clock),
//! `controller` turns user intents into state mutations and render
//! instructions, `observe` carries those instructions to subscribers, and
//! `term`/`input` are the crossterm presentation layer consumed by the
//! binary.

pub mod controller;
pub mod core;
pub mod input;
pub mod observe;
pub mod term;
pub mod types;

pub use controller::GameController;
pub use observe::{GameObserver, Notifier};
