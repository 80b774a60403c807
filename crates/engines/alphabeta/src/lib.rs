//! Alpha-Beta Duck Chess Engine
//!
//! Depth-limited minimax with alpha-beta pruning and material evaluation.
//! The search is resumable: each tick advances the frame stack a bounded number of
//! steps and hands control back to the host.

mod config;
mod search;

use duck_core::{Board, Engine, SearchStatus, SliceClock, TickBudget};
use tracing::{debug, trace};

pub use config::AlphaBetaConfig;
pub use search::{pick_best_move, AlphaBetaSearch};

/// Duck chess engine driving an [`AlphaBetaSearch`] in ticks.
#[derive(Debug, Default)]
pub struct AlphaBetaEngine {
    config: AlphaBetaConfig,
    search: Option<AlphaBetaSearch>,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AlphaBetaConfig) -> Self {
        Self {
            config,
            search: None,
        }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self::with_config(AlphaBetaConfig { depth })
    }

    pub fn config(&self) -> &AlphaBetaConfig {
        &self.config
    }
}

impl Engine for AlphaBetaEngine {
    fn start(&mut self, board: &Board) {
        debug!(depth = self.config.depth, ply = board.ply(), "alpha-beta search started");
        self.search = Some(AlphaBetaSearch::new(board, self.config.depth));
    }

    fn tick(&mut self, budget: TickBudget) -> SearchStatus {
        let Some(search) = self.search.as_mut() else {
            return SearchStatus::Finished(Default::default());
        };

        let mut clock = SliceClock::start(budget);
        let mut finished = false;
        while !clock.exhausted() {
            finished = search.step();
            clock.spend();
            if finished {
                break;
            }
        }
        trace!(steps = clock.steps(), nodes = search.nodes(), "alpha-beta tick");

        if !finished {
            return SearchStatus::Pending;
        }
        let result = search.result();
        self.search = None;
        debug!(
            best = %result.move_or_null(),
            score = result.score,
            nodes = result.nodes,
            "alpha-beta search finished"
        );
        SearchStatus::Finished(result)
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.search = None;
    }
}
