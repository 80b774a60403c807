//! Finished-game records.

use duck_core::{Board, Color, DuckError, Move};
use serde::{Deserialize, Serialize};

/// Final result of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::WhiteWins => Some(Color::White),
            GameOutcome::BlackWins => Some(Color::Black),
            GameOutcome::Draw => None,
        }
    }

    pub fn notation(self) -> &'static str {
        match self {
            GameOutcome::WhiteWins => "1-0",
            GameOutcome::BlackWins => "0-1",
            GameOutcome::Draw => "1/2",
        }
    }
}

/// How the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    KingCaptured,
    /// The side to move had no piece move and won.
    NoMoves,
    /// Too many plies without a capture or pawn move.
    DrawRule,
    /// The match's ply cap was reached.
    PlyLimit,
}

impl Termination {
    /// Classifies a board the runner stopped playing on.
    pub fn of(board: &Board) -> Self {
        if !board.is_game_over() {
            return Termination::PlyLimit;
        }
        match board.winner() {
            Some(winner) if board.king_square(winner.other()).is_none() => {
                Termination::KingCaptured
            }
            Some(_) => Termination::NoMoves,
            None => Termination::DrawRule,
        }
    }
}

/// One played game, moves stored in their packed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    /// Leading moves that were random opening plies rather than engine choices.
    pub opening_plies: u32,
    pub moves: Vec<u32>,
    pub outcome: GameOutcome,
    pub termination: Termination,
}

impl GameRecord {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// Decodes the packed move list.
    pub fn decoded_moves(&self) -> Option<Vec<Move>> {
        self.moves.iter().map(|&bits| Move::from_bits(bits)).collect()
    }

    /// Plays the recorded moves from the start position.
    pub fn replay(&self) -> Result<Board, DuckError> {
        let mut board = Board::new();
        for &bits in &self.moves {
            let mv = Move::from_bits(bits).unwrap_or(Move::NULL);
            board.try_make_move(mv)?;
        }
        Ok(board)
    }
}
