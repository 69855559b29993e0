//! Deck module - the dealt board of paired cards
//!
//! A deck is a shuffled permutation of a fixed multiset: two cards per face.
//! Cards are immutable once dealt; only their game-state membership
//! (hidden/open/matched) changes, and that lives in `GameState`.

use crate::core::rng::SimpleRng;
use crate::types::{Face, DECK_SIZE};

/// A single dealt card: an opaque slot position plus the face that
/// determines its matching partner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub position: usize,
    pub face: Face,
}

/// An ordered sequence of `DECK_SIZE` cards, replaced wholesale on restart
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal a fresh deck: two of each face, Fisher-Yates shuffled
    pub fn deal(rng: &mut SimpleRng) -> Self {
        let mut faces: Vec<Face> = Face::ALL.iter().flat_map(|&f| [f, f]).collect();
        debug_assert_eq!(faces.len(), DECK_SIZE);
        rng.shuffle(&mut faces);

        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(position, face)| Card { position, face })
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Face at a slot position.
    ///
    /// Out-of-range positions are a contract violation from the caller
    /// (the presentation layer is out of sync with the deck size).
    pub fn face_at(&self, position: usize) -> Face {
        assert!(
            position < self.cards.len(),
            "card position {} out of range for deck of {}",
            position,
            self.cards.len()
        );
        self.cards[position].face
    }

    /// Whether two positions hold equal faces
    pub fn is_matching_pair(&self, a: usize, b: usize) -> bool {
        self.face_at(a) == self.face_at(b)
    }

    /// Faces in slot order (for priming a renderer)
    pub fn faces(&self) -> Vec<Face> {
        self.cards.iter().map(|c| c.face).collect()
    }

    /// The two positions holding the given face
    pub fn positions_of(&self, face: Face) -> (usize, usize) {
        let mut found = [None, None];
        for card in &self.cards {
            if card.face == face {
                if found[0].is_none() {
                    found[0] = Some(card.position);
                } else {
                    found[1] = Some(card.position);
                }
            }
        }
        match found {
            [Some(a), Some(b)] => (a, b),
            _ => unreachable!("deck holds exactly two cards per face"),
        }
    }
}
