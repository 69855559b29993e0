//! Game controller - user intents in, render instructions out
//!
//! The controller owns the `GameState` and the `Notifier`. The presentation
//! layer feeds it card-selection and restart intents plus timer events; it
//! mutates the state through its public contract and publishes the resulting
//! render instructions. It never touches the terminal itself.

use crate::core::{loses_star_at, GameSnapshot, GameState, TickHandle};
use crate::observe::Notifier;
use crate::types::FlipOutcome;

pub struct GameController {
    state: GameState,
    notifier: Notifier,
}

impl GameController {
    pub fn new(seed: u32) -> Self {
        Self {
            state: GameState::new(seed),
            notifier: Notifier::new(),
        }
    }

    /// Notifier access for subscriber registration
    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state)
    }

    /// Start the session: clock running from zero, board face-down
    pub fn start_game(&mut self) -> TickHandle {
        let handle = self.state.start();
        self.emit_session_reset();
        handle
    }

    /// Tear down the session and start a fresh one with a new deal.
    ///
    /// Any pending auto-hide dies with the old session, and the returned
    /// handle replaces the caller's now-invalidated one.
    pub fn restart_requested(&mut self) -> TickHandle {
        let handle = self.state.restart();
        self.emit_session_reset();
        handle
    }

    /// User intent: flip the card at `index`.
    ///
    /// Rejected requests (locked input, already open, already matched) are
    /// silent: no render instruction is issued for them.
    pub fn card_selected(&mut self, index: usize) {
        match self.state.try_open_card(index) {
            FlipOutcome::Opened => {
                self.notifier.notify_card_visibility(index, true);
                self.emit_score();
            }
            FlipOutcome::Matched { first, second } => {
                self.notifier.notify_card_visibility(index, true);
                self.emit_score();
                self.notifier.notify_card_matched(first, true);
                self.notifier.notify_card_matched(second, true);
                if self.state.is_won() {
                    self.notifier
                        .notify_game_won(self.state.elapsed_seconds(), self.state.moves());
                }
            }
            FlipOutcome::Mismatched { .. } => {
                self.notifier.notify_card_visibility(index, true);
                self.emit_score();
            }
            FlipOutcome::Rejected(_) => {}
        }
    }

    /// One 1-second clock tick from the host. Stale handles are dropped by
    /// the state, so no instruction leaks from a superseded session.
    pub fn timer_tick(&mut self, handle: TickHandle) {
        if let Some(seconds) = self.state.timer_tick(handle) {
            self.notifier.notify_elapsed(seconds);
        }
    }

    /// Host-loop time progress; drives the mismatch auto-hide delay
    pub fn advance(&mut self, elapsed_ms: u32) {
        if let Some((first, second)) = self.state.advance_hide_delay(elapsed_ms) {
            self.notifier.notify_card_visibility(first, false);
            self.notifier.notify_card_visibility(second, false);
        }
    }

    /// Moves and stars go out together after every accepted open, the star
    /// value always recomputed from the absolute move count
    fn emit_score(&mut self) {
        let moves = self.state.moves();
        if loses_star_at(moves) {
            log::debug!("star lost at move {}", moves);
        }
        self.notifier.notify_moves(moves);
        self.notifier.notify_stars(self.state.stars());
    }

    /// Full board reset instructions, as issued at start and restart
    fn emit_session_reset(&mut self) {
        for index in 0..self.state.deck().len() {
            self.notifier.notify_card_visibility(index, false);
            self.notifier.notify_card_matched(index, false);
        }
        self.notifier.notify_moves(self.state.moves());
        self.notifier.notify_stars(self.state.stars());
        self.notifier.notify_elapsed(self.state.elapsed_seconds());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Face, MISMATCH_HIDE_DELAY_MS};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_controller() -> (GameController, Rc<RefCell<Vec<String>>>) {
        let mut controller = GameController::new(12345);
        let events = Rc::new(RefCell::new(Vec::new()));

        let e = events.clone();
        controller
            .notifier_mut()
            .subscribe_card_visibility(move |i, v| e.borrow_mut().push(format!("vis {} {}", i, v)));
        let e = events.clone();
        controller
            .notifier_mut()
            .subscribe_card_matched(move |i, m| e.borrow_mut().push(format!("match {} {}", i, m)));
        let e = events.clone();
        controller
            .notifier_mut()
            .subscribe_moves(move |c| e.borrow_mut().push(format!("moves {}", c)));
        let e = events.clone();
        controller
            .notifier_mut()
            .subscribe_stars(move |c| e.borrow_mut().push(format!("stars {}", c)));
        let e = events.clone();
        controller
            .notifier_mut()
            .subscribe_elapsed(move |s| e.borrow_mut().push(format!("time {}", s)));
        let e = events.clone();
        controller
            .notifier_mut()
            .subscribe_game_won(move |s, m| e.borrow_mut().push(format!("won {} {}", s, m)));

        (controller, events)
    }

    #[test]
    fn test_accepted_open_emits_visibility_then_score() {
        let (mut controller, events) = recording_controller();
        controller.start_game();
        events.borrow_mut().clear();

        controller.card_selected(0);
        assert_eq!(
            *events.borrow(),
            vec!["vis 0 true", "moves 1", "stars 3"]
        );
    }

    #[test]
    fn test_rejected_open_emits_nothing() {
        let (mut controller, events) = recording_controller();
        controller.start_game();
        controller.card_selected(0);
        events.borrow_mut().clear();

        controller.card_selected(0);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_match_emits_matched_instructions() {
        let (mut controller, events) = recording_controller();
        controller.start_game();
        let (a, b) = controller.state().deck().positions_of(Face::ALL[0]);
        controller.card_selected(a);
        events.borrow_mut().clear();

        controller.card_selected(b);
        assert_eq!(
            *events.borrow(),
            vec![
                format!("vis {} true", b),
                "moves 2".to_string(),
                "stars 3".to_string(),
                format!("match {} true", a),
                format!("match {} true", b),
            ]
        );
    }

    #[test]
    fn test_mismatch_hides_both_after_delay() {
        let (mut controller, events) = recording_controller();
        controller.start_game();
        let (a, _) = controller.state().deck().positions_of(Face::ALL[0]);
        let (b, _) = controller.state().deck().positions_of(Face::ALL[1]);
        controller.card_selected(a);
        controller.card_selected(b);
        events.borrow_mut().clear();

        controller.advance(MISMATCH_HIDE_DELAY_MS - 1);
        assert!(events.borrow().is_empty());

        controller.advance(1);
        assert_eq!(
            *events.borrow(),
            vec![format!("vis {} false", a), format!("vis {} false", b)]
        );
    }

    #[test]
    fn test_win_emits_game_won_once_and_time_stops() {
        let (mut controller, events) = recording_controller();
        let handle = controller.start_game();
        controller.timer_tick(handle);

        for face in Face::ALL {
            let (a, b) = controller.state().deck().positions_of(face);
            controller.card_selected(a);
            controller.card_selected(b);
        }

        let won_events: Vec<String> = events
            .borrow()
            .iter()
            .filter(|e| e.starts_with("won"))
            .cloned()
            .collect();
        assert_eq!(won_events, vec!["won 1 16"]);

        // The clock is stopped; further ticks produce no time instruction.
        events.borrow_mut().clear();
        controller.timer_tick(handle);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_restart_reissues_reset_instructions() {
        let (mut controller, events) = recording_controller();
        controller.start_game();
        controller.card_selected(0);
        events.borrow_mut().clear();

        controller.restart_requested();
        let events = events.borrow();
        assert!(events.contains(&"vis 0 false".to_string()));
        assert!(events.contains(&"moves 0".to_string()));
        assert!(events.contains(&"stars 3".to_string()));
        assert!(events.contains(&"time 0".to_string()));
    }
}
