//! Terminal concentration runner (default binary).
//!
//! Crossterm poll loop on a fixed host tick: key presses become cursor
//! moves and flip/restart intents, every host tick advances the mismatch
//! auto-hide delay, and each accumulated second delivers one clock tick
//! through the current session's handle.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_concentration::input::{map_key, should_quit, Cursor};
use tui_concentration::term::{GameView, TerminalRenderer};
use tui_concentration::types::{UiCommand, TICK_MS, TIMER_PERIOD_MS};
use tui_concentration::GameController;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut controller = GameController::new(wall_clock_seed());
    let view = Rc::new(RefCell::new(GameView::new()));
    controller.notifier_mut().subscribe_observer(view.clone());

    let mut handle = controller.start_game();
    view.borrow_mut().prime(&controller.snapshot());

    let mut cursor = Cursor::default();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut second_acc_ms: u32 = 0;

    loop {
        {
            let lines = view.borrow().render_lines(cursor.index());
            term.draw(&lines)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    match map_key(key.code) {
                        Some(UiCommand::Flip) => controller.card_selected(cursor.index()),
                        Some(UiCommand::Restart) => {
                            handle = controller.restart_requested();
                            view.borrow_mut().prime(&controller.snapshot());
                            second_acc_ms = 0;
                        }
                        Some(command) => cursor.apply(command),
                        None => {}
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            controller.advance(TICK_MS);

            second_acc_ms += TICK_MS;
            if second_acc_ms >= TIMER_PERIOD_MS {
                second_acc_ms -= TIMER_PERIOD_MS;
                controller.timer_tick(handle);
            }
        }
    }
}
