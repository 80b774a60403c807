//! MCTS tree operations.
//!
//! Nodes live in one arena vector; the root is index 0. One iteration is
//! [`MctsTree::select`], [`MctsTree::expand`], [`rollout`] and
//! [`MctsTree::backpropagate`], in that order.

use duck_core::{outcome_sign, Board, Color, Move, PieceKind};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::node::Node;

pub const ROOT: usize = 0;

/// Arena-based search tree.
#[derive(Debug, Clone)]
pub struct MctsTree {
    pub nodes: Vec<Node>,
}

impl MctsTree {
    pub fn new(board: Board) -> Self {
        MctsTree {
            nodes: vec![Node::root(board)],
        }
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Descends from the root through fully expanded nodes, following the best UCT
    /// child, and returns the first node that is terminal or still has untried moves.
    pub fn select(&self, exploration: f64) -> usize {
        let mut current = ROOT;
        loop {
            let node = &self.nodes[current];
            if node.terminal || !node.fully_expanded || node.children.is_empty() {
                return current;
            }

            let mut best_child = node.children[0];
            let mut best_score = f64::NEG_INFINITY;
            for &child in &node.children {
                match self.nodes[child].uct(exploration, node.visits) {
                    None => {
                        best_child = child;
                        break;
                    }
                    Some(score) if score > best_score => {
                        best_score = score;
                        best_child = child;
                    }
                    Some(_) => {}
                }
            }
            current = best_child;
        }
    }

    /// Turns one random untried move of `idx` into a child and returns the child.
    /// Terminal or fully expanded nodes are returned unchanged.
    pub fn expand<R: Rng>(&mut self, idx: usize, rng: &mut R) -> usize {
        let node = &mut self.nodes[idx];
        if node.terminal || node.untried.is_empty() {
            return idx;
        }

        let pick = rng.gen_range(0..node.untried.len());
        let mv = node.untried.swap_remove(pick);
        node.fully_expanded = node.untried.is_empty();

        let mover = node.board.turn();
        let depth = node.depth + 1;
        let mut board = node.board.clone();
        board.make_move(mv);

        let child = self.nodes.len();
        self.nodes
            .push(Node::new(Some(idx), Some(mv), Some(mover), board, depth));
        self.nodes[idx].children.push(child);
        child
    }

    /// Walks from `idx` up to the root, recording `white_result` at every node.
    pub fn backpropagate(&mut self, idx: usize, white_result: f64) {
        let mut current = Some(idx);
        while let Some(i) = current {
            let node = &mut self.nodes[i];
            node.record(white_result);
            current = node.parent;
        }
    }

    /// Root child with the most visits; earlier children win ties.
    pub fn most_visited_child(&self) -> Option<&Node> {
        let mut best: Option<&Node> = None;
        for &child in &self.root().children {
            let node = &self.nodes[child];
            if best.map_or(true, |b| node.visits > b.visits) {
                best = Some(node);
            }
        }
        best
    }
}

/// Plays random moves from `board` until the game ends or `max_plies` have been played.
///
/// Returns the result in White's frame: `1.0` White wins, `-1.0` Black wins, `0.0`
/// draw. A rollout cut short is scored by the sign of the material balance.
pub fn rollout<R: Rng>(board: &Board, max_plies: u32, greedy_king_capture: bool, rng: &mut R) -> f64 {
    let mut board = board.clone();
    for _ in 0..max_plies {
        if board.is_game_over() {
            break;
        }
        let mv = match pick_rollout_move(board.legal_moves(), greedy_king_capture, rng) {
            Some(mv) => mv,
            None => break,
        };
        board.make_move(mv);
    }
    outcome_sign(&board, Color::White) as f64
}

fn pick_rollout_move<R: Rng>(moves: &[Move], greedy_king_capture: bool, rng: &mut R) -> Option<Move> {
    if greedy_king_capture {
        let king_capture = moves
            .iter()
            .find(|m| m.captured().is_some_and(|p| p.kind() == Some(PieceKind::King)));
        if king_capture.is_some() {
            return king_capture.copied();
        }
    }
    moves.choose(rng).copied()
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
