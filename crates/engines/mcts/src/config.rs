//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// Search settings, loadable from a match config with every field optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Iterations per move.
    pub iterations: u64,
    /// Optional wall-clock limit per move; whichever limit hits first ends the search.
    pub move_time_ms: Option<u64>,
    /// UCT exploration constant (higher = more exploration)
    pub exploration: f64,
    /// Rollouts stop here and score the position by material sign.
    pub max_rollout_plies: u32,
    /// Fixed seed for reproducible searches.
    pub seed: Option<u64>,
    /// Rollouts always take an enemy king when they can.
    pub greedy_king_capture: bool,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 2000,
            move_time_ms: None,
            exploration: std::f64::consts::SQRT_2,
            max_rollout_plies: 48,
            seed: None,
            greedy_king_capture: true,
        }
    }
}

impl MctsConfig {
    /// A fixed iteration count with everything else default.
    pub fn with_iterations(iterations: u64) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
