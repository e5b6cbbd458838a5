//! Game-over latch: remembers the final score and picks a commentary line.

use crate::core::commentary;
use crate::core::{EngineObserver, GameState, SimpleRng};

/// Observer that captures how the last game ended.
///
/// Cleared again by the first notification of a live game, so a restart
/// removes the overlay.
#[derive(Debug, Clone)]
pub struct GameOverLatch {
    rng: SimpleRng,
    final_score: Option<u32>,
    commentary: Option<&'static str>,
}

impl GameOverLatch {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            final_score: None,
            commentary: None,
        }
    }

    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn commentary(&self) -> Option<&'static str> {
        self.commentary
    }
}

impl EngineObserver for GameOverLatch {
    fn on_state_change(&mut self, state: &GameState) {
        if !state.game_over {
            self.final_score = None;
            self.commentary = None;
        }
    }

    fn on_game_over(&mut self, state: &GameState) {
        self.final_score = Some(state.score);
        self.commentary = commentary::for_game(state, &mut self.rng);
    }
}
