pub mod board;
pub mod budget;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod piece_set;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use budget::*;
pub use error::DuckError;
pub use eval::{evaluate, outcome_sign, piece_value, LOSS_SCORE, WIN_SCORE};
pub use movegen::*;
pub use moves::*;
pub use perft::perft;
pub use piece_set::IndexedPieceSet;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every search strategy (alpha-beta, MCTS, random)
// =============================================================================

/// Result of a finished search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    /// The chosen move (None if the position has no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation from the side to move's perspective, engine-specific scale
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    /// Number of positions visited
    pub nodes: u64,
    /// Completed iterations (MCTS) or 0
    pub iterations: u64,
}

impl SearchResult {
    /// The chosen move, or [`Move::NULL`] when there was none.
    pub fn move_or_null(&self) -> Move {
        self.best_move.unwrap_or(Move::NULL)
    }
}

/// Outcome of one [`Engine::tick`].
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStatus {
    /// More work remains; call `tick` again.
    Pending,
    Finished(SearchResult),
}

/// Trait that all duck chess engines must implement.
///
/// Searches are cooperative: [`Engine::start`] snapshots the position, then each
/// [`Engine::tick`] does a bounded slice of work and returns control to the caller.
/// Dropping the engine or calling `start` again discards a half-finished search; the
/// caller's board is never touched.
pub trait Engine: Send {
    /// Begin searching `board`. The engine keeps its own copy.
    fn start(&mut self, board: &Board);

    /// Do at most `budget` worth of work.
    ///
    /// Calling `tick` with no search in progress finishes immediately without a move.
    fn tick(&mut self, budget: TickBudget) -> SearchStatus;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "duck-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Run a whole search by ticking until it finishes.
    fn search(&mut self, board: &Board, budget: TickBudget) -> SearchResult {
        self.start(board);
        loop {
            if let SearchStatus::Finished(result) = self.tick(budget) {
                return result;
            }
        }
    }
}
