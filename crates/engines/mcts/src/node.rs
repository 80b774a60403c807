//! MCTS node representation.

use duck_core::{Board, Color, Move};

/// A node in the search tree. Parent and children are indices into the tree's arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    /// The move that produced this node; `None` at the root.
    pub mv: Option<Move>,
    /// Side that played `mv`. Scores are stored from this side's point of view.
    pub mover: Option<Color>,
    pub board: Board,
    pub visits: u32,
    pub score: f64,
    /// Legal moves not yet turned into children.
    pub untried: Vec<Move>,
    pub fully_expanded: bool,
    pub terminal: bool,
    pub depth: u32,
}

impl Node {
    pub fn root(board: Board) -> Self {
        Self::new(None, None, None, board, 0)
    }

    pub fn new(
        parent: Option<usize>,
        mv: Option<Move>,
        mover: Option<Color>,
        board: Board,
        depth: u32,
    ) -> Self {
        let untried = board.legal_moves().to_vec();
        let terminal = board.is_game_over() || untried.is_empty();
        Node {
            parent,
            children: Vec::new(),
            mv,
            mover,
            board,
            visits: 0,
            score: 0.0,
            fully_expanded: untried.is_empty(),
            untried,
            terminal,
            depth,
        }
    }

    /// Mean result from the mover's point of view.
    pub fn mean(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.score / self.visits as f64
        }
    }

    /// UCT value as seen from the parent. `None` means unvisited: pick it first.
    pub fn uct(&self, exploration: f64, parent_visits: u32) -> Option<f64> {
        if self.visits == 0 {
            return None;
        }
        let explore = ((parent_visits.max(1) as f64).ln() / self.visits as f64).sqrt();
        Some(self.mean() + exploration * explore)
    }

    /// Adds one rollout result given in White's frame.
    pub fn record(&mut self, white_result: f64) {
        self.visits += 1;
        match self.mover {
            Some(Color::White) => self.score += white_result,
            Some(Color::Black) => self.score -= white_result,
            None => {}
        }
    }
}
