//! Monte Carlo Tree Search Duck Chess Engine
//!
//! UCT selection, random expansion, random rollouts with a material cutoff, and
//! backpropagation in a node arena. Iterations are spread over ticks; the tree
//! survives between them.

mod config;
mod node;
mod tree;

use std::time::{Duration, Instant};

use duck_core::{Board, Engine, Move, SearchResult, SearchStatus, SliceClock, TickBudget};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, trace};

pub use config::MctsConfig;
pub use node::Node;
pub use tree::{rollout, MctsTree};

/// One search in progress: the tree plus how much of the move budget is spent.
#[derive(Debug)]
pub struct MctsSearch {
    tree: MctsTree,
    config: MctsConfig,
    rng: StdRng,
    iterations: u64,
    started: Instant,
}

impl MctsSearch {
    pub fn new(board: &Board, config: MctsConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            tree: MctsTree::new(board.clone()),
            config,
            rng,
            iterations: 0,
            started: Instant::now(),
        }
    }

    pub fn tree(&self) -> &MctsTree {
        &self.tree
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// True once the iteration or time limit is reached, or the root has no moves.
    pub fn is_finished(&self) -> bool {
        if self.tree.root().terminal || self.iterations >= self.config.iterations {
            return true;
        }
        self.config
            .move_time_ms
            .is_some_and(|ms| self.started.elapsed() >= Duration::from_millis(ms))
    }

    /// Runs one select / expand / rollout / backpropagate cycle.
    pub fn iterate(&mut self) {
        let selected = self.tree.select(self.config.exploration);
        let leaf = self.tree.expand(selected, &mut self.rng);
        let result = rollout(
            &self.tree.nodes[leaf].board,
            self.config.max_rollout_plies,
            self.config.greedy_king_capture,
            &mut self.rng,
        );
        self.tree.backpropagate(leaf, result);
        self.iterations += 1;
    }

    /// Most visited root move, or a random legal move if nothing was expanded yet.
    pub fn best_move(&mut self) -> Option<Move> {
        if let Some(child) = self.tree.most_visited_child() {
            return child.mv;
        }
        self.tree
            .root()
            .board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
    }

    pub fn result(&mut self) -> SearchResult {
        let best_move = self.best_move();
        // mean result of the chosen child, in thousandths
        let score = self
            .tree
            .most_visited_child()
            .map(|n| (n.mean() * 1000.0).round() as i32)
            .unwrap_or(0);
        SearchResult {
            best_move,
            score,
            depth: self.tree.max_depth().min(u8::MAX as u32) as u8,
            nodes: self.tree.len() as u64,
            iterations: self.iterations,
        }
    }
}

/// Duck chess engine running an [`MctsSearch`] across ticks.
#[derive(Debug, Default)]
pub struct MctsEngine {
    config: MctsConfig,
    search: Option<MctsSearch>,
}

impl MctsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MctsConfig) -> Self {
        Self {
            config,
            search: None,
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

impl Engine for MctsEngine {
    fn start(&mut self, board: &Board) {
        debug!(
            iterations = self.config.iterations,
            move_time_ms = ?self.config.move_time_ms,
            ply = board.ply(),
            "mcts search started"
        );
        self.search = Some(MctsSearch::new(board, self.config.clone()));
    }

    fn tick(&mut self, budget: TickBudget) -> SearchStatus {
        let Some(search) = self.search.as_mut() else {
            return SearchStatus::Finished(SearchResult::default());
        };

        let mut clock = SliceClock::start(budget);
        while !search.is_finished() && !clock.exhausted() {
            search.iterate();
            clock.spend();
        }
        trace!(
            ran = clock.steps(),
            total = search.iterations(),
            nodes = search.tree().len(),
            "mcts tick"
        );

        if !search.is_finished() {
            return SearchStatus::Pending;
        }
        let result = search.result();
        self.search = None;
        debug!(
            best = %result.move_or_null(),
            iterations = result.iterations,
            nodes = result.nodes,
            "mcts search finished"
        );
        SearchStatus::Finished(result)
    }

    fn name(&self) -> &str {
        "MCTS v1.0"
    }

    fn new_game(&mut self) {
        self.search = None;
    }
}

#[cfg(test)]
mod lib_tests;
