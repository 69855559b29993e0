//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Deck dimensions (4x4 grid, 8 matching pairs)
pub const DECK_SIZE: usize = 16;
pub const PAIR_COUNT: usize = DECK_SIZE / 2;
pub const GRID_COLS: usize = 4;
pub const GRID_ROWS: usize = DECK_SIZE / GRID_COLS;

/// Host/game timing constants (in milliseconds)
pub const TICK_MS: u32 = 50;
pub const TIMER_PERIOD_MS: u32 = 1000;
pub const MISMATCH_HIDE_DELAY_MS: u32 = 1000;

/// Star rating policy: moves at which a star is lost
pub const MAX_STARS: u8 = 3;
pub const TWO_STAR_MOVES: u32 = 32;
pub const ONE_STAR_MOVES: u32 = 64;
pub const ZERO_STAR_MOVES: u32 = 96;

/// Card face symbols; exactly two cards share each face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Spade,
    Heart,
    Diamond,
    Club,
    Star,
    Sun,
    Moon,
    Note,
}

impl Face {
    /// All faces, one per pair, in a fixed canonical order
    pub const ALL: [Face; PAIR_COUNT] = [
        Face::Spade,
        Face::Heart,
        Face::Diamond,
        Face::Club,
        Face::Star,
        Face::Sun,
        Face::Moon,
        Face::Note,
    ];

    /// Parse face from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "spade" => Some(Face::Spade),
            "heart" => Some(Face::Heart),
            "diamond" => Some(Face::Diamond),
            "club" => Some(Face::Club),
            "star" => Some(Face::Star),
            "sun" => Some(Face::Sun),
            "moon" => Some(Face::Moon),
            "note" => Some(Face::Note),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Face::Spade => "spade",
            Face::Heart => "heart",
            Face::Diamond => "diamond",
            Face::Club => "club",
            Face::Star => "star",
            Face::Sun => "sun",
            Face::Moon => "moon",
            Face::Note => "note",
        }
    }

    /// Single-cell glyph for terminal rendering
    pub fn glyph(&self) -> char {
        match self {
            Face::Spade => '♠',
            Face::Heart => '♥',
            Face::Diamond => '◆',
            Face::Club => '♣',
            Face::Star => '★',
            Face::Sun => '☀',
            Face::Moon => '☾',
            Face::Note => '♫',
        }
    }
}

/// Per-card game state, mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Hidden,
    Open,
    Matched,
}

/// Why an open request was silently dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Mismatch reveal delay in progress; requests are dropped, not queued
    InputLocked,
    AlreadyOpen,
    AlreadyMatched,
}

/// Result of a single open-card request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// First card of a pair revealed; awaiting its partner
    Opened,
    /// Second card completed a pair with equal faces
    Matched { first: usize, second: usize },
    /// Second card revealed an unequal face; auto-hide scheduled
    Mismatched { first: usize, second: usize },
    /// Request dropped without any state change
    Rejected(RejectReason),
}

impl FlipOutcome {
    /// Whether the request counted as a move
    pub fn is_accepted(&self) -> bool {
        !matches!(self, FlipOutcome::Rejected(_))
    }
}

/// Presentation-side commands produced by the input mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    Flip,
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_str(face.as_str()), Some(face));
        }
        assert_eq!(Face::from_str("SPADE"), Some(Face::Spade));
        assert_eq!(Face::from_str("joker"), None);
    }

    #[test]
    fn test_face_glyphs_distinct() {
        for (i, a) in Face::ALL.iter().enumerate() {
            for b in &Face::ALL[i + 1..] {
                assert_ne!(a.glyph(), b.glyph());
            }
        }
    }

    #[test]
    fn test_deck_constants_consistent() {
        assert_eq!(DECK_SIZE % 2, 0);
        assert_eq!(PAIR_COUNT * 2, DECK_SIZE);
        assert_eq!(GRID_COLS * GRID_ROWS, DECK_SIZE);
        assert_eq!(Face::ALL.len(), PAIR_COUNT);
    }

    #[test]
    fn test_outcome_accepted() {
        assert!(FlipOutcome::Opened.is_accepted());
        assert!(FlipOutcome::Matched { first: 0, second: 1 }.is_accepted());
        assert!(FlipOutcome::Mismatched { first: 0, second: 1 }.is_accepted());
        assert!(!FlipOutcome::Rejected(RejectReason::AlreadyOpen).is_accepted());
    }
}
