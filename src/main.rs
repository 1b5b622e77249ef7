//! Binary entry point: terminal setup, event loop, tick scheduling.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use tui_snake_core::{GameState, TickClock};
use tui_snake_input::{handle_key_event, should_quit};
use tui_snake_term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Poll granularity while no tick is scheduled (waiting, paused, game over).
const IDLE_POLL_MS: u64 = 150;

fn main() -> Result<()> {
    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;
    let result = run(&mut renderer);
    // Restore the terminal even when the loop failed.
    let restore = renderer.exit();
    result?;
    restore
}

fn run(renderer: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = GameState::new(seed);
    let view = GameView::default();
    let mut clock = TickClock::new();
    let mut fb = FrameBuffer::new(0, 0);
    let started = Instant::now();

    loop {
        let (width, height) = terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(width, height), &mut fb);
        renderer.draw_swap(&mut fb)?;

        // Sleep until the next tick is due, or at a coarse idle rate when
        // the clock is disarmed.
        let now_ms = started.elapsed().as_millis() as u64;
        let timeout = clock.poll_timeout_ms(now_ms).unwrap_or(IDLE_POLL_MS);
        if event::poll(Duration::from_millis(timeout))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                        let now_ms = started.elapsed().as_millis() as u64;
                        clock.sync(game.status(), game.speed_ms(), now_ms);
                    }
                }
                Event::Resize(_, _) => renderer.invalidate(),
                _ => {}
            }
        }

        let now_ms = started.elapsed().as_millis() as u64;
        if clock.tick_due(now_ms) {
            game.tick();
            clock.sync(game.status(), game.speed_ms(), now_ms);
        }
    }
}
