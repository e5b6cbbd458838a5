//! Terminal falling-block runner (default binary).
//!
//! Drives the engine from a fixed-pace frame loop: poll input for up to one
//! frame, dispatch the command, give the gravity scheduler its frame, render.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Engine, GameState, GravityScheduler, MonotonicClock};
use blockfall::input::{command_for_key, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::Command;
use blockfall::{EventLog, GameOverLatch, RunConfig};

fn main() -> Result<()> {
    let config = RunConfig::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let last = result?;
    eprintln!(
        "[blockfall] seed={} score={} level={} lines={}",
        config.seed, last.score, last.level, last.lines
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<GameState> {
    let mut engine = Engine::new(config.seed);

    let log = match &config.log_path {
        Some(path) => {
            let log = Rc::new(RefCell::new(EventLog::open(path)?));
            engine.subscribe(log.clone());
            Some(log)
        }
        None => None,
    };
    let latch = Rc::new(RefCell::new(GameOverLatch::new(config.seed.rotate_left(16))));
    engine.subscribe(latch.clone());

    engine.start();
    let mut gravity = GravityScheduler::new();
    let mut handle = gravity.start();
    let clock = MonotonicClock::new();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(config.frame_ms as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let commentary = latch.borrow().commentary();
        view.render_into(engine.state(), commentary, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                    match command_for_key(key) {
                        // A new game gets a fresh gravity run and baseline.
                        Some(Command::Restart) => {
                            if engine.restart() {
                                handle = gravity.start();
                            }
                        }
                        Some(command) => {
                            engine.apply(command);
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        gravity.on_frame(handle, clock.now_ms(), &mut engine);

        if let Some(log) = &log {
            if let Some(err) = log.borrow_mut().take_error() {
                gravity.stop();
                return Err(err).context("writing event log");
            }
        }
    }

    gravity.stop();
    if let Some(log) = &log {
        log.borrow_mut().flush().context("flushing event log")?;
    }
    Ok(engine.snapshot())
}
