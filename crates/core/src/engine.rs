//! Engine module - the game state machine
//!
//! The engine owns the current `GameState`, the piece randomizer and the
//! registered observers. Every accepted command builds a new state value,
//! swaps it in and notifies observers; rejected commands leave the state
//! untouched and return `false`.
//!
//! Commands other than pause and restart are ignored while the game is paused
//! or over. Nothing is queued.

use crate::game_state::GameState;
use crate::grid::LineClear;
use crate::observer::{EngineObserver, ObserverList, SubscriptionId};
use crate::pieces::{spawn, try_rotate};
use crate::rng::PieceRandomizer;
use crate::scoring::{hard_drop_score, level_for_lines, line_clear_score};
use crate::types::Command;

/// Falling-block game engine
pub struct Engine {
    state: GameState,
    randomizer: PieceRandomizer,
    observers: ObserverList,
}

impl Engine {
    /// Create a new game with the given RNG seed.
    ///
    /// The first piece is already spawned; no notification is sent until the
    /// first command.
    pub fn new(seed: u32) -> Self {
        let mut randomizer = PieceRandomizer::new(seed);
        let state = Self::deal(&mut randomizer);
        Self {
            state,
            randomizer,
            observers: ObserverList::default(),
        }
    }

    /// Resume from an existing state, drawing future pieces from `seed`
    pub fn from_state(state: GameState, seed: u32) -> Self {
        Self {
            state,
            randomizer: PieceRandomizer::new(seed),
            observers: ObserverList::default(),
        }
    }

    /// Fresh game: next kind is drawn first, then the first active kind.
    fn deal(randomizer: &mut PieceRandomizer) -> GameState {
        let next = randomizer.draw();
        let first = randomizer.draw();
        GameState::fresh(first, next)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> GameState {
        self.state
    }

    /// Register an observer; it sees every notification from now on
    pub fn subscribe(&mut self, observer: impl EngineObserver + 'static) -> SubscriptionId {
        self.observers.add(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Swap in `next` and notify. Fires the game-over hook on the
    /// false -> true edge only.
    fn commit(&mut self, next: GameState) {
        let was_over = self.state.game_over;
        self.state = next;
        self.observers.state_changed(&self.state);
        if !was_over && self.state.game_over {
            self.observers.game_over(&self.state);
        }
    }

    /// Start a new game (same as restart)
    pub fn start(&mut self) {
        let state = Self::deal(&mut self.randomizer);
        self.commit(state);
    }

    /// Throw away the current game and deal a new one
    pub fn restart(&mut self) -> bool {
        self.start();
        true
    }

    /// Flip the pause flag; ignored once the game is over
    pub fn toggle_pause(&mut self) -> bool {
        if self.state.game_over {
            return false;
        }
        self.commit(GameState {
            paused: !self.state.paused,
            ..self.state
        });
        true
    }

    /// Try to move the active piece; illegal moves are no-ops
    pub fn move_by(&mut self, dx: i8, dy: i8) -> bool {
        if !self.state.playable() {
            return false;
        }
        let Some(piece) = self.state.active else {
            return false;
        };

        let moved = piece.shifted(dx, dy);
        if moved.collides_with(&self.state.grid) {
            return false;
        }

        self.commit(GameState {
            active: Some(moved),
            ..self.state
        });
        true
    }

    /// Gravity step: one row down
    pub fn tick(&mut self) -> bool {
        self.move_by(0, 1)
    }

    /// Rotate clockwise, trying each horizontal kick offset in turn
    pub fn rotate(&mut self) -> bool {
        if !self.state.playable() {
            return false;
        }
        let Some(piece) = self.state.active else {
            return false;
        };

        match try_rotate(&piece, &self.state.grid) {
            Some((rotated, _dx)) => {
                self.commit(GameState {
                    active: Some(rotated),
                    ..self.state
                });
                true
            }
            None => false,
        }
    }

    /// Drop to the lowest legal row, score the distance and lock immediately
    pub fn hard_drop(&mut self) -> bool {
        if !self.state.playable() {
            return false;
        }
        let (Some(piece), Some(landing_y)) = (self.state.active, self.state.landing_y()) else {
            return false;
        };

        let distance = landing_y - piece.position.y;
        self.commit(GameState {
            active: Some(piece.shifted(0, distance)),
            score: self.state.score.saturating_add(hard_drop_score(distance as u32)),
            ..self.state
        });
        self.lock();
        true
    }

    /// Lock the active piece, clear full rows, score, and spawn the next piece
    pub fn lock(&mut self) -> bool {
        if !self.state.playable() {
            return false;
        }
        let Some(piece) = self.state.active else {
            return false;
        };

        let placed = self
            .state
            .grid
            .with_locked(&piece.board_cells(), piece.kind);
        let LineClear { grid, cleared } = placed.clear_full_rows();

        // Scored at the level in effect before these lines count.
        let score = self
            .state
            .score
            .saturating_add(line_clear_score(cleared, self.state.level));
        let lines = self.state.lines + cleared;

        let active = spawn(&grid, self.state.next);
        let next = self.randomizer.draw();

        self.commit(GameState {
            grid,
            active,
            next,
            score,
            level: level_for_lines(lines),
            lines,
            game_over: active.is_none(),
            paused: false,
        });
        true
    }

    /// Whether gravity can pull the active piece down one row
    pub fn can_move_down(&self) -> bool {
        self.state.can_move(0, 1)
    }

    /// Apply a player command
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_by(-1, 0),
            Command::MoveRight => self.move_by(1, 0),
            Command::SoftDrop => self.move_by(0, 1),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop(),
            Command::Pause => self.toggle_pause(),
            Command::Restart => self.restart(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}
