//! Observer notification - render instructions pushed to subscribers
//!
//! The presentation boundary subscribes to independent channels (card
//! visibility, card matched, moves, stars, elapsed time, game won). Delivery
//! is synchronous and in registration order. A panicking subscriber is
//! isolated so the remaining subscribers still receive the value; because
//! notification takes `&mut self`, a subscriber cannot be added in the middle
//! of a delivery round.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

/// Capability contract for a presentation-side listener.
///
/// Every method has a no-op default so views implement only the channels
/// they render.
pub trait GameObserver {
    fn on_card_visibility_changed(&mut self, _index: usize, _visible: bool) {}
    fn on_card_matched_changed(&mut self, _index: usize, _matched: bool) {}
    fn on_moves_changed(&mut self, _count: u32) {}
    fn on_stars_changed(&mut self, _count: u8) {}
    fn on_elapsed_time_changed(&mut self, _seconds: u32) {}
    fn on_game_won(&mut self, _elapsed_seconds: u32, _moves: u32) {}
}

/// Per-channel subscriber lists, delivered in registration order
#[derive(Default)]
pub struct Notifier {
    card_visibility: Vec<Box<dyn FnMut(usize, bool)>>,
    card_matched: Vec<Box<dyn FnMut(usize, bool)>>,
    moves: Vec<Box<dyn FnMut(u32)>>,
    stars: Vec<Box<dyn FnMut(u8)>>,
    elapsed: Vec<Box<dyn FnMut(u32)>>,
    game_won: Vec<Box<dyn FnMut(u32, u32)>>,
    isolated_panics: usize,
}

fn call_isolated(panics: &mut usize, f: impl FnOnce()) {
    if panic::catch_unwind(AssertUnwindSafe(f)).is_err() {
        *panics += 1;
        log::error!("observer panicked during notification; delivery continues");
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe_card_visibility(&mut self, subscriber: impl FnMut(usize, bool) + 'static) {
        self.card_visibility.push(Box::new(subscriber));
    }

    pub fn subscribe_card_matched(&mut self, subscriber: impl FnMut(usize, bool) + 'static) {
        self.card_matched.push(Box::new(subscriber));
    }

    pub fn subscribe_moves(&mut self, subscriber: impl FnMut(u32) + 'static) {
        self.moves.push(Box::new(subscriber));
    }

    pub fn subscribe_stars(&mut self, subscriber: impl FnMut(u8) + 'static) {
        self.stars.push(Box::new(subscriber));
    }

    pub fn subscribe_elapsed(&mut self, subscriber: impl FnMut(u32) + 'static) {
        self.elapsed.push(Box::new(subscriber));
    }

    pub fn subscribe_game_won(&mut self, subscriber: impl FnMut(u32, u32) + 'static) {
        self.game_won.push(Box::new(subscriber));
    }

    /// Register one object on every channel at once
    pub fn subscribe_observer<O: GameObserver + 'static>(&mut self, observer: Rc<RefCell<O>>) {
        let o = observer.clone();
        self.subscribe_card_visibility(move |index, visible| {
            o.borrow_mut().on_card_visibility_changed(index, visible)
        });
        let o = observer.clone();
        self.subscribe_card_matched(move |index, matched| {
            o.borrow_mut().on_card_matched_changed(index, matched)
        });
        let o = observer.clone();
        self.subscribe_moves(move |count| o.borrow_mut().on_moves_changed(count));
        let o = observer.clone();
        self.subscribe_stars(move |count| o.borrow_mut().on_stars_changed(count));
        let o = observer.clone();
        self.subscribe_elapsed(move |seconds| o.borrow_mut().on_elapsed_time_changed(seconds));
        let o = observer;
        self.subscribe_game_won(move |seconds, moves| o.borrow_mut().on_game_won(seconds, moves));
    }

    pub fn notify_card_visibility(&mut self, index: usize, visible: bool) {
        let mut panics = self.isolated_panics;
        for subscriber in &mut self.card_visibility {
            call_isolated(&mut panics, || subscriber(index, visible));
        }
        self.isolated_panics = panics;
    }

    pub fn notify_card_matched(&mut self, index: usize, matched: bool) {
        let mut panics = self.isolated_panics;
        for subscriber in &mut self.card_matched {
            call_isolated(&mut panics, || subscriber(index, matched));
        }
        self.isolated_panics = panics;
    }

    pub fn notify_moves(&mut self, count: u32) {
        let mut panics = self.isolated_panics;
        for subscriber in &mut self.moves {
            call_isolated(&mut panics, || subscriber(count));
        }
        self.isolated_panics = panics;
    }

    pub fn notify_stars(&mut self, count: u8) {
        let mut panics = self.isolated_panics;
        for subscriber in &mut self.stars {
            call_isolated(&mut panics, || subscriber(count));
        }
        self.isolated_panics = panics;
    }

    pub fn notify_elapsed(&mut self, seconds: u32) {
        let mut panics = self.isolated_panics;
        for subscriber in &mut self.elapsed {
            call_isolated(&mut panics, || subscriber(seconds));
        }
        self.isolated_panics = panics;
    }

    pub fn notify_game_won(&mut self, elapsed_seconds: u32, moves: u32) {
        let mut panics = self.isolated_panics;
        for subscriber in &mut self.game_won {
            call_isolated(&mut panics, || subscriber(elapsed_seconds, moves));
        }
        self.isolated_panics = panics;
    }

    /// Count of subscriber panics swallowed so far
    pub fn isolated_panics(&self) -> usize {
        self.isolated_panics
    }
}
