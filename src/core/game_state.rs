//! Game state module - the pair-resolution state machine
//!
//! This is the aggregate root: it owns the dealt deck, per-card states, the
//! two-slot open buffer, move/star counters, the clock and the pending
//! mismatch auto-hide. All mutation happens through a handful of operations
//! driven by the controller; rejected requests are typed no-ops, and the
//! open buffer is always resolved within the same call that fills it.

use crate::core::clock::{GameClock, TickHandle};
use crate::core::deck::Deck;
use crate::core::rng::SimpleRng;
use crate::core::scoring::stars_for;
use crate::types::{
    CardState, FlipOutcome, RejectReason, DECK_SIZE, MAX_STARS, MISMATCH_HIDE_DELAY_MS,
};

/// Fixed-capacity buffer for cards flipped and awaiting resolution.
///
/// Capacity is two by construction; a third push is unreachable because the
/// second always resolves synchronously, so it is asserted rather than
/// handled.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSlots {
    slots: [Option<usize>; 2],
}

impl OpenSlots {
    pub fn push(&mut self, position: usize) {
        if self.slots[0].is_none() {
            self.slots[0] = Some(position);
        } else if self.slots[1].is_none() {
            self.slots[1] = Some(position);
        } else {
            unreachable!("open buffer already resolved at two cards");
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.slots.contains(&Some(position))
    }

    /// Drain both slots. Panics unless exactly two cards are open.
    pub fn take_pair(&mut self) -> (usize, usize) {
        match (self.slots[0].take(), self.slots[1].take()) {
            (Some(a), Some(b)) => (a, b),
            _ => unreachable!("take_pair called without two open cards"),
        }
    }

    pub fn clear(&mut self) {
        self.slots = [None, None];
    }
}

/// Mismatched pair waiting out the reveal delay before flipping back
#[derive(Debug, Clone, Copy)]
struct PendingHide {
    first: usize,
    second: usize,
    remaining_ms: u32,
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameState {
    rng: SimpleRng,
    deck: Deck,
    card_states: [CardState; DECK_SIZE],
    open: OpenSlots,
    matched_count: usize,
    moves: u32,
    stars: u8,
    input_locked: bool,
    pending_hide: Option<PendingHide>,
    clock: GameClock,
    won: bool,
    started: bool,
    /// Monotonic session id (increments on restart).
    episode_id: u32,
}

impl GameState {
    /// Create a new session with a freshly dealt deck from the given seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let deck = Deck::deal(&mut rng);

        Self {
            rng,
            deck,
            card_states: [CardState::Hidden; DECK_SIZE],
            open: OpenSlots::default(),
            matched_count: 0,
            moves: 0,
            stars: MAX_STARS,
            input_locked: false,
            pending_hide: None,
            clock: GameClock::new(),
            won: false,
            started: false,
            episode_id: 0,
        }
    }

    /// Start the session clock and hand the host its tick handle.
    ///
    /// Idempotent: starting again retires the prior handle and issues a new
    /// one, so only one tick source is ever live.
    pub fn start(&mut self) -> TickHandle {
        self.started = true;
        self.clock.reset();
        self.clock.start()
    }

    /// Tear down the session and build a fresh one: new shuffled deck, all
    /// counters zeroed, pending auto-hide cancelled, prior tick handles
    /// invalidated. The reset is a single atomic unit.
    pub fn restart(&mut self) -> TickHandle {
        log::debug!("restart: retiring episode {}", self.episode_id);
        self.episode_id = self.episode_id.wrapping_add(1);
        self.deck = Deck::deal(&mut self.rng);
        self.card_states = [CardState::Hidden; DECK_SIZE];
        self.open.clear();
        self.matched_count = 0;
        self.moves = 0;
        self.stars = MAX_STARS;
        self.input_locked = false;
        self.pending_hide = None;
        self.won = false;
        self.start()
    }

    /// Request to flip the card at `position` face-up.
    ///
    /// Out-of-range positions are a caller contract violation and panic.
    /// Locked input and already-open/matched cards are silent rejects: no
    /// move is counted and no state changes. When the open buffer reaches
    /// two cards it is compared and cleared before this call returns.
    pub fn try_open_card(&mut self, position: usize) -> FlipOutcome {
        assert!(
            position < self.deck.len(),
            "card position {} out of range for deck of {}",
            position,
            self.deck.len()
        );

        if self.input_locked {
            log::trace!("open {} rejected: input locked", position);
            return FlipOutcome::Rejected(RejectReason::InputLocked);
        }
        match self.card_states[position] {
            CardState::Open => {
                log::trace!("open {} rejected: already open", position);
                return FlipOutcome::Rejected(RejectReason::AlreadyOpen);
            }
            CardState::Matched => {
                log::trace!("open {} rejected: already matched", position);
                return FlipOutcome::Rejected(RejectReason::AlreadyMatched);
            }
            CardState::Hidden => {}
        }

        self.card_states[position] = CardState::Open;
        self.open.push(position);
        self.moves += 1;
        self.stars = stars_for(self.moves);

        let outcome = if self.open.len() == 2 {
            let (first, second) = self.open.take_pair();
            if self.deck.is_matching_pair(first, second) {
                self.resolve_match(first, second)
            } else {
                self.resolve_mismatch(first, second)
            }
        } else {
            FlipOutcome::Opened
        };

        self.debug_assert_invariants();
        outcome
    }

    fn resolve_match(&mut self, first: usize, second: usize) -> FlipOutcome {
        self.card_states[first] = CardState::Matched;
        self.card_states[second] = CardState::Matched;
        self.matched_count += 2;
        log::debug!(
            "match at {}/{} ({}), {}/{} matched",
            first,
            second,
            self.deck.face_at(first).as_str(),
            self.matched_count,
            self.deck.len()
        );

        if self.matched_count == self.deck.len() {
            // Terminal for the session until restart.
            self.won = true;
            self.clock.stop();
            log::debug!(
                "game won in {} moves, {}s",
                self.moves,
                self.clock.elapsed_seconds()
            );
        }
        FlipOutcome::Matched { first, second }
    }

    fn resolve_mismatch(&mut self, first: usize, second: usize) -> FlipOutcome {
        // Cards stay face-up through the reveal delay; the lock is the only
        // gate against interleaving until the auto-hide fires.
        self.input_locked = true;
        self.pending_hide = Some(PendingHide {
            first,
            second,
            remaining_ms: MISMATCH_HIDE_DELAY_MS,
        });
        log::debug!("mismatch at {}/{}, input locked", first, second);
        FlipOutcome::Mismatched { first, second }
    }

    /// Advance the mismatch auto-hide countdown by `elapsed_ms`.
    ///
    /// Returns the pair that flipped back to hidden when the delay expires,
    /// `None` otherwise. A restart cancels the countdown outright, so a
    /// stale delay can never touch a newer session's cards.
    pub fn advance_hide_delay(&mut self, elapsed_ms: u32) -> Option<(usize, usize)> {
        let mut pending = self.pending_hide.take()?;
        pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        if pending.remaining_ms > 0 {
            self.pending_hide = Some(pending);
            return None;
        }

        let PendingHide { first, second, .. } = pending;
        self.card_states[first] = CardState::Hidden;
        self.card_states[second] = CardState::Hidden;
        self.input_locked = false;
        log::debug!("auto-hide {}/{}, input unlocked", first, second);
        Some((first, second))
    }

    /// Deliver one 1-second clock tick; stale or post-stop ticks are dropped
    pub fn timer_tick(&mut self, handle: TickHandle) -> Option<u32> {
        self.clock.tick(handle)
    }

    pub fn card_state(&self, position: usize) -> CardState {
        assert!(
            position < self.deck.len(),
            "card position {} out of range for deck of {}",
            position,
            self.deck.len()
        );
        self.card_states[position]
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.clock.elapsed_seconds()
    }

    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_clock_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn hide_delay_pending(&self) -> bool {
        self.pending_hide.is_some()
    }

    fn debug_assert_invariants(&self) {
        // The open buffer is never left full; resolution happens in-call.
        debug_assert!(self.open.len() < 2);
        debug_assert_eq!(self.matched_count % 2, 0);
        debug_assert!(self.matched_count <= self.deck.len());
        debug_assert_eq!(self.stars, stars_for(self.moves));
    }
}
