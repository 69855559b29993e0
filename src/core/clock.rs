//! Clock module - the elapsed-time count-up clock
//!
//! The clock does not own a thread or an interval; the host loop delivers
//! 1-second ticks. Every `start` stamps a new session number and hands back a
//! `TickHandle`; ticks carrying a handle from a superseded session are
//! ignored. That is what guarantees a stray tick scheduled before a restart
//! can never increment a newer session's counter.

/// Capability to deliver ticks to the clock session that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    session: u32,
}

/// Count-up clock with `Stopped` / `Running` states
#[derive(Debug, Clone)]
pub struct GameClock {
    running: bool,
    session: u32,
    elapsed_seconds: u32,
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            running: false,
            session: 0,
            elapsed_seconds: 0,
        }
    }

    /// Start the clock and issue a fresh tick handle.
    ///
    /// Starting while already running first invalidates the prior tick
    /// source: the old handle's session is retired before the new one
    /// begins, never merely overwritten.
    pub fn start(&mut self) -> TickHandle {
        self.session = self.session.wrapping_add(1);
        self.running = true;
        TickHandle {
            session: self.session,
        }
    }

    /// Stop the clock. Safe no-op when already stopped.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            // Retire the outstanding handle so a late tick cannot land.
            self.session = self.session.wrapping_add(1);
        }
    }

    /// Stop and zero the elapsed time
    pub fn reset(&mut self) {
        self.stop();
        self.elapsed_seconds = 0;
    }

    /// Deliver one 1-second tick.
    ///
    /// Returns the new elapsed total, or `None` when the clock is stopped or
    /// the handle belongs to a superseded session.
    pub fn tick(&mut self, handle: TickHandle) -> Option<u32> {
        if !self.running || handle.session != self.session {
            return None;
        }
        self.elapsed_seconds += 1;
        Some(self.elapsed_seconds)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clock_is_stopped_at_zero() {
        let clock = GameClock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed_seconds(), 0);
    }

    #[test]
    fn test_tick_increments_by_exactly_one() {
        let mut clock = GameClock::new();
        let handle = clock.start();

        assert_eq!(clock.tick(handle), Some(1));
        assert_eq!(clock.tick(handle), Some(2));
        assert_eq!(clock.elapsed_seconds(), 2);
    }

    #[test]
    fn test_tick_ignored_while_stopped() {
        let mut clock = GameClock::new();
        let handle = clock.start();
        clock.tick(handle);
        clock.stop();

        assert_eq!(clock.tick(handle), None);
        assert_eq!(clock.elapsed_seconds(), 1);
    }

    #[test]
    fn test_stale_handle_ignored_after_restart() {
        let mut clock = GameClock::new();
        let old = clock.start();
        clock.tick(old);

        let fresh = clock.start();
        assert_eq!(clock.tick(old), None, "superseded handle must not tick");
        assert_eq!(clock.tick(fresh), Some(2));
    }

    #[test]
    fn test_double_stop_is_idempotent() {
        let mut clock = GameClock::new();
        let handle = clock.start();
        clock.tick(handle);

        clock.stop();
        let session_after_first = clock.session;
        clock.stop();

        assert!(!clock.is_running());
        assert_eq!(clock.elapsed_seconds(), 1);
        assert_eq!(clock.session, session_after_first);
    }

    #[test]
    fn test_reset_zeroes_and_stops() {
        let mut clock = GameClock::new();
        let handle = clock.start();
        clock.tick(handle);
        clock.tick(handle);

        clock.reset();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed_seconds(), 0);

        // Reset on an already-reset clock changes nothing observable.
        clock.reset();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed_seconds(), 0);
    }
}
