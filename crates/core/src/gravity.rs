//! Gravity scheduler - cooperative, frame-driven piece falling
//!
//! The host calls [`GravityScheduler::on_frame`] once per frame with a
//! monotonically increasing timestamp in milliseconds. Nothing here sleeps or
//! owns a timer: the scheduler only compares timestamps, so any frame source
//! (terminal poll loop, animation callback, test harness) can drive it.
//!
//! Starting the scheduler hands out a [`FrameHandle`]. Restarting or stopping
//! invalidates earlier handles, so a frame callback scheduled before a restart
//! can never move pieces in the new game.

use std::time::Instant;

use crate::engine::Engine;
use crate::game_state::GameState;
use crate::scoring::gravity_interval_ms;

/// Scheduler state as seen from outside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerPhase {
    /// Not scheduled
    Idle,
    /// Applying gravity
    Running,
    /// Polling, but the game is paused
    Paused,
    /// Polling, but the game is over
    Terminal,
}

/// Token identifying one scheduling run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// What a single frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Handle was cancelled or replaced; nothing happened
    Stale,
    /// Interval has not elapsed yet
    Waiting,
    /// Interval elapsed but the game is paused or over
    Skipped,
    /// Piece fell one row
    Ticked,
    /// Piece could not fall and was locked
    Locked,
}

/// Level-paced gravity driver
#[derive(Debug, Clone, Default)]
pub struct GravityScheduler {
    current: Option<FrameHandle>,
    generation: u64,
    last_time_ms: Option<u64>,
}

impl GravityScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new run with a clean timing baseline.
    ///
    /// Any previous handle stops being honored.
    pub fn start(&mut self) -> FrameHandle {
        self.generation = self.generation.wrapping_add(1);
        let handle = FrameHandle(self.generation);
        self.current = Some(handle);
        self.last_time_ms = None;
        handle
    }

    /// Cancel the current run. Safe to call repeatedly.
    ///
    /// Returns whether a run was active.
    pub fn stop(&mut self) -> bool {
        self.last_time_ms = None;
        self.current.take().is_some()
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    pub fn handle(&self) -> Option<FrameHandle> {
        self.current
    }

    /// Current phase for the given game state
    pub fn phase(&self, state: &GameState) -> SchedulerPhase {
        if self.current.is_none() {
            SchedulerPhase::Idle
        } else if state.game_over {
            SchedulerPhase::Terminal
        } else if state.paused {
            SchedulerPhase::Paused
        } else {
            SchedulerPhase::Running
        }
    }

    /// Milliseconds until the next gravity step is due, if scheduled
    pub fn time_until_due(&self, now_ms: u64, level: u32) -> Option<u64> {
        self.current?;
        let interval = gravity_interval_ms(level) as u64;
        match self.last_time_ms {
            // Due once strictly more than the interval has passed.
            Some(last) => Some((last + interval + 1).saturating_sub(now_ms)),
            None => Some(interval + 1),
        }
    }

    /// Run one scheduling cycle.
    ///
    /// The first frame of a run only records the baseline. Once more than the
    /// level's interval has passed since the baseline, the baseline moves to
    /// `now_ms` and, if the game is live, the active piece either falls one
    /// row or locks in place.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        now_ms: u64,
        engine: &mut Engine,
    ) -> FrameOutcome {
        if self.current != Some(handle) {
            return FrameOutcome::Stale;
        }

        let last = *self.last_time_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(last);
        if elapsed <= gravity_interval_ms(engine.state().level) as u64 {
            return FrameOutcome::Waiting;
        }
        self.last_time_ms = Some(now_ms);

        let state = engine.state();
        if !state.playable() || state.active.is_none() {
            return FrameOutcome::Skipped;
        }

        if engine.can_move_down() {
            engine.tick();
            FrameOutcome::Ticked
        } else {
            engine.lock();
            FrameOutcome::Locked
        }
    }
}

/// Millisecond clock anchored at construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::types::PieceKind;

    fn engine() -> Engine {
        Engine::from_state(GameState::fresh(PieceKind::O, PieceKind::T), 1)
    }

    #[test]
    fn first_frame_sets_baseline() {
        let mut engine = engine();
        let mut gravity = GravityScheduler::new();
        let handle = gravity.start();

        assert_eq!(gravity.on_frame(handle, 5_000, &mut engine), FrameOutcome::Waiting);
        assert_eq!(gravity.on_frame(handle, 5_800, &mut engine), FrameOutcome::Waiting);
        assert_eq!(gravity.on_frame(handle, 5_801, &mut engine), FrameOutcome::Ticked);
        assert_eq!(engine.state().active.unwrap().position.y, 0);
    }

    #[test]
    fn grounded_piece_locks_on_next_step() {
        let mut engine = engine();
        while engine.move_by(0, 1) {}
        let mut gravity = GravityScheduler::new();
        let handle = gravity.start();

        gravity.on_frame(handle, 0, &mut engine);
        assert_eq!(gravity.on_frame(handle, 801, &mut engine), FrameOutcome::Locked);
        assert!(engine.state().grid.is_locked(4, 19));
    }

    #[test]
    fn paused_game_skips_but_keeps_time() {
        let mut engine = engine();
        engine.toggle_pause();
        let mut gravity = GravityScheduler::new();
        let handle = gravity.start();

        assert_eq!(gravity.phase(engine.state()), SchedulerPhase::Paused);
        gravity.on_frame(handle, 0, &mut engine);
        assert_eq!(gravity.on_frame(handle, 900, &mut engine), FrameOutcome::Skipped);
        assert_eq!(engine.state().active.unwrap().position.y, -1);

        engine.toggle_pause();
        assert_eq!(gravity.on_frame(handle, 1_000, &mut engine), FrameOutcome::Waiting);
        assert_eq!(gravity.on_frame(handle, 1_701, &mut engine), FrameOutcome::Ticked);
    }

    #[test]
    fn stale_handle_is_ignored_after_restart() {
        let mut engine = engine();
        let mut gravity = GravityScheduler::new();
        let old = gravity.start();
        let new = gravity.start();

        assert_ne!(old, new);
        assert_eq!(gravity.on_frame(old, 0, &mut engine), FrameOutcome::Stale);
        assert_eq!(gravity.on_frame(old, 10_000, &mut engine), FrameOutcome::Stale);
        assert_eq!(engine.state().active.unwrap().position.y, -1);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut engine = engine();
        let mut gravity = GravityScheduler::new();
        let handle = gravity.start();

        assert!(gravity.stop());
        assert!(!gravity.stop());
        assert!(!gravity.is_running());
        assert_eq!(gravity.phase(engine.state()), SchedulerPhase::Idle);
        assert_eq!(gravity.on_frame(handle, 10_000, &mut engine), FrameOutcome::Stale);
    }

    #[test]
    fn terminal_phase_polls_without_mutation() {
        let mut grid = Grid::new();
        for x in 0..10 {
            grid.set(x, 0, crate::types::Cell::locked(PieceKind::I));
        }
        let state = GameState::on_grid(grid, PieceKind::O, PieceKind::O);
        let mut engine = Engine::from_state(state, 1);
        let mut gravity = GravityScheduler::new();
        let handle = gravity.start();
        let before = engine.snapshot();

        assert_eq!(gravity.phase(engine.state()), SchedulerPhase::Terminal);
        gravity.on_frame(handle, 0, &mut engine);
        assert_eq!(gravity.on_frame(handle, 5_000, &mut engine), FrameOutcome::Skipped);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn time_until_due_counts_down() {
        let mut engine = engine();
        let mut gravity = GravityScheduler::new();
        assert_eq!(gravity.time_until_due(0, 1), None);

        let handle = gravity.start();
        gravity.on_frame(handle, 100, &mut engine);
        assert_eq!(gravity.time_until_due(100, 1), Some(801));
        assert_eq!(gravity.time_until_due(500, 1), Some(401));
        assert_eq!(gravity.time_until_due(2_000, 1), Some(0));
    }
}
