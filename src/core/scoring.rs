//! Scoring module - star-rating policy
//!
//! The rating is a pure step function over the absolute move count, never an
//! incremental adjustment, so it is correct no matter how `moves` got to its
//! current value. Canonical policy: every accepted open-card request counts
//! as one move; thresholds are 32 / 64 / 96 for 3 -> 2 -> 1 -> 0 stars.

use crate::types::{MAX_STARS, ONE_STAR_MOVES, TWO_STAR_MOVES, ZERO_STAR_MOVES};

/// Star rating for an absolute move count
pub fn stars_for(moves: u32) -> u8 {
    if moves < TWO_STAR_MOVES {
        MAX_STARS
    } else if moves < ONE_STAR_MOVES {
        2
    } else if moves < ZERO_STAR_MOVES {
        1
    } else {
        0
    }
}

/// Whether this exact move count is the first at a lower rating
/// (the move on which a star is visibly lost)
pub fn loses_star_at(moves: u32) -> bool {
    moves == TWO_STAR_MOVES || moves == ONE_STAR_MOVES || moves == ZERO_STAR_MOVES
}
