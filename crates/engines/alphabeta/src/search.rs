//! Minimax with alpha-beta pruning over an explicit frame stack.
//!
//! The search never recurses. Each in-progress node of the game tree is a [`Frame`] on
//! a vector, and [`AlphaBetaSearch::step`] performs exactly one transition: either push
//! a child frame (make a move) or pop a finished frame (unmake its move and report its
//! value to the parent). The whole search can therefore stop after any step and pick up
//! again on the next tick.
//!
//! Values are always from the root side's point of view. A frame maximizes when the
//! side to move there is the root side; because every piece ply is followed by the same
//! side's duck ply, that is not a simple alternation.

use duck_core::{evaluate, Board, Color, Move, SearchResult, Undo};

/// One in-progress node.
#[derive(Debug)]
struct Frame {
    alpha: i32,
    beta: i32,
    maximizing: bool,
    depth: u8,
    /// Index of the next untried move in `moves`.
    next: usize,
    moves: Vec<Move>,
    /// Token of the move that led here; `None` for the root.
    entered_by: Option<Undo>,
    best: i32,
}

impl Frame {
    fn new(
        alpha: i32,
        beta: i32,
        maximizing: bool,
        depth: u8,
        moves: Vec<Move>,
        entered_by: Option<Undo>,
    ) -> Self {
        Self {
            alpha,
            beta,
            maximizing,
            depth,
            next: 0,
            moves,
            entered_by,
            best: if maximizing { i32::MIN } else { i32::MAX },
        }
    }

    fn exhausted(&self) -> bool {
        self.alpha >= self.beta || self.next >= self.moves.len()
    }
}

/// A resumable depth-bounded search over a private copy of the position.
#[derive(Debug)]
pub struct AlphaBetaSearch {
    board: Board,
    root_color: Color,
    max_depth: u8,
    frames: Vec<Frame>,
    best_move: Option<Move>,
    score: i32,
    nodes: u64,
}

impl AlphaBetaSearch {
    /// Prepares a search of `board` to `max_depth` plies (at least one).
    pub fn new(board: &Board, max_depth: u8) -> Self {
        let max_depth = max_depth.max(1);
        let board = board.clone();
        let moves = board.legal_moves().to_vec();
        let root = Frame::new(i32::MIN, i32::MAX, true, 0, moves, None);
        Self {
            root_color: board.turn(),
            board,
            max_depth,
            frames: vec![root],
            best_move: None,
            score: 0,
            nodes: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Performs one frame transition. Returns true once the search has finished.
    pub fn step(&mut self) -> bool {
        let Some(top) = self.frames.last() else {
            return true;
        };

        let at_leaf = top.depth >= self.max_depth || self.board.is_game_over();
        if at_leaf || top.exhausted() {
            self.pop_frame(at_leaf);
        } else {
            self.push_frame();
        }
        self.frames.is_empty()
    }

    fn push_frame(&mut self) {
        let Some(top) = self.frames.last() else {
            return;
        };
        let mv = top.moves[top.next];
        let (alpha, beta, depth) = (top.alpha, top.beta, top.depth + 1);

        let undo = self.board.make_move(mv);
        self.nodes += 1;

        let maximizing = self.board.turn() == self.root_color;
        // Leaves are evaluated, never expanded, so they need no move list.
        let moves = if depth < self.max_depth {
            self.board.legal_moves().to_vec()
        } else {
            Vec::new()
        };
        self.frames
            .push(Frame::new(alpha, beta, maximizing, depth, moves, Some(undo)));
    }

    fn pop_frame(&mut self, at_leaf: bool) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        let value = if at_leaf {
            evaluate(&self.board, self.root_color)
        } else {
            frame.best
        };

        let Some(undo) = frame.entered_by else {
            self.score = value;
            return;
        };
        let mv = undo.mv;
        self.board
            .unmake_move(undo)
            .expect("frames unmake in stack order");

        let Some(parent) = self.frames.last_mut() else {
            return;
        };
        if parent.maximizing {
            if value > parent.best {
                parent.best = value;
                if parent.depth == 0 {
                    self.best_move = Some(mv);
                }
            }
            parent.alpha = parent.alpha.max(value);
        } else {
            if value < parent.best {
                parent.best = value;
            }
            parent.beta = parent.beta.min(value);
        }
        parent.next += 1;
    }

    /// Best root move so far; final once [`AlphaBetaSearch::is_finished`].
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }

    pub fn result(&self) -> SearchResult {
        SearchResult {
            best_move: self.best_move,
            score: self.score,
            depth: self.max_depth,
            nodes: self.nodes,
            iterations: 0,
        }
    }
}

/// Runs a whole search in one call and returns the best move with its score.
pub fn pick_best_move(board: &Board, depth: u8) -> Option<(Move, i32)> {
    let mut search = AlphaBetaSearch::new(board, depth);
    while !search.step() {}
    search.best_move().map(|mv| (mv, search.score))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
