//! Random Move Duck Chess Engine
//!
//! Picks uniformly among the legal moves of whichever half-ply is active.
//! Useful for:
//! - Exercising the tournament runner without real search
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use duck_core::{Board, Engine, Move, SearchResult, SearchStatus, TickBudget};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::trace;


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed; the same seed replays the same choices.
    pub seed: Option<u64>,
}

/// A duck chess engine that plays random legal moves.
///
/// There is no evaluation and no search: a tick finishes at once with one of the
/// moves cached on the board.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    config: RandomConfig,
    rng: StdRng,
    pending: Option<Vec<Move>>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_config(RandomConfig::default())
    }

    pub fn with_config(config: RandomConfig) -> Self {
        Self {
            config,
            rng: seeded_rng(config.seed),
            pending: None,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_config(RandomConfig { seed: Some(seed) })
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl Engine for RandomEngine {
    fn start(&mut self, board: &Board) {
        self.pending = Some(board.legal_moves().to_vec());
    }

    fn tick(&mut self, _budget: TickBudget) -> SearchStatus {
        let Some(moves) = self.pending.take() else {
            return SearchStatus::Finished(SearchResult::default());
        };
        let best_move = moves.choose(&mut self.rng).copied();
        trace!(choices = moves.len(), "random move picked");

        SearchStatus::Finished(SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: 1,
            iterations: 0,
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.pending = None;
        self.rng = seeded_rng(self.config.seed);
    }
}
