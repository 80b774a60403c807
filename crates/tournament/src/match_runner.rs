//! Match runner for playing games between engines
//!
//! The runner is the host loop: it ticks the engine whose turn it is until that engine
//! finishes, then applies the chosen move to the one authoritative board. Piece plies
//! and duck plies are both asked of the same engine.

use duck_core::{Board, Color, Engine, SearchStatus};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::MatchConfig;
use crate::elo::{GameResult, MatchResult};
use crate::error::{TournamentError, TournamentResult};
use crate::record::{GameOutcome, GameRecord, Termination};

/// Everything one match produced
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    /// From engine1's side
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

/// A player seat: the engine and the name it is recorded under.
pub struct Seat<'a> {
    pub name: &'a str,
    pub engine: &'a mut dyn Engine,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Builds both engines from the config and plays the match.
    pub fn run(&self) -> TournamentResult<MatchReport> {
        let name1 = self.config.engine1.label();
        let mut name2 = self.config.engine2.label();
        if name1 == name2 {
            name2.push_str("-b");
        }
        let mut engine1 = self.config.engine1.build();
        let mut engine2 = self.config.engine2.build();
        self.run_match(
            Seat { name: &name1, engine: engine1.as_mut() },
            Seat { name: &name2, engine: engine2.as_mut() },
        )
    }

    /// Run a match between two engines; the result is from engine1's side.
    pub fn run_match<'a>(
        &self,
        engine1: Seat<'a>,
        engine2: Seat<'a>,
    ) -> TournamentResult<MatchReport> {
        let mut report = MatchReport {
            engine1: engine1.name.to_string(),
            engine2: engine2.name.to_string(),
            result: MatchResult::new(),
            games: Vec::with_capacity(self.config.num_games as usize),
        };
        let (mut first, mut second) = (engine1, engine2);

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if engine1_white {
                self.play_game(&mut first, &mut second, game_num)?
            } else {
                self.play_game(&mut second, &mut first, game_num)?
            };

            let white_result = match record.outcome {
                GameOutcome::WhiteWins => GameResult::Win,
                GameOutcome::BlackWins => GameResult::Loss,
                GameOutcome::Draw => GameResult::Draw,
            };
            report.result.record(if engine1_white {
                white_result
            } else {
                white_result.flipped()
            });

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                white = %record.white,
                black = %record.black,
                outcome = record.outcome.notation(),
                termination = ?record.termination,
                plies = record.plies(),
                "game finished"
            );
            report.games.push(record);
        }

        info!(
            engine1 = %report.engine1,
            engine2 = %report.engine2,
            wins = report.result.wins,
            losses = report.result.losses,
            draws = report.result.draws,
            "match finished"
        );
        Ok(report)
    }

    /// Plays one game from the start position.
    pub fn play_game<'a>(
        &self,
        white: &mut Seat<'a>,
        black: &mut Seat<'a>,
        game_num: u32,
    ) -> TournamentResult<GameRecord> {
        let mut board = Board::new();
        let mut moves = Vec::new();
        white.engine.new_game();
        black.engine.new_game();

        let mut rng = StdRng::seed_from_u64(self.config.seed.wrapping_add(game_num as u64));
        let mut opening_plies = 0;
        while opening_plies < self.config.opening_plies && !board.is_game_over() {
            let Some(&mv) = board.legal_moves().choose(&mut rng) else {
                break;
            };
            board.make_move(mv);
            moves.push(mv.to_bits());
            opening_plies += 1;
        }

        while !board.is_game_over() && board.ply() < self.config.max_plies {
            let seat = match board.turn() {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let mv = self.think(seat, &board)?;
            if let Err(source) = board.try_make_move(mv) {
                warn!(engine = seat.name, %mv, ply = board.ply(), "engine played an illegal move");
                return Err(TournamentError::IllegalMove {
                    engine: seat.name.to_string(),
                    mv,
                    ply: board.ply(),
                    source,
                });
            }
            moves.push(mv.to_bits());
        }

        let outcome = match board.winner() {
            Some(Color::White) => GameOutcome::WhiteWins,
            Some(Color::Black) => GameOutcome::BlackWins,
            None => GameOutcome::Draw,
        };
        Ok(GameRecord {
            white: white.name.to_string(),
            black: black.name.to_string(),
            opening_plies,
            moves,
            outcome,
            termination: Termination::of(&board),
        })
    }

    /// Ticks `seat`'s engine until it settles on a move for `board`.
    fn think(&self, seat: &mut Seat<'_>, board: &Board) -> TournamentResult<duck_core::Move> {
        seat.engine.start(board);
        let mut ticks = 0u32;
        let result = loop {
            ticks += 1;
            if let SearchStatus::Finished(result) = seat.engine.tick(self.config.tick_budget) {
                break result;
            }
            if self.config.max_ticks_per_move.is_some_and(|limit| ticks >= limit) {
                seat.engine.new_game();
                return Err(TournamentError::Stalled {
                    engine: seat.name.to_string(),
                    ticks,
                    ply: board.ply(),
                });
            }
        };
        debug!(
            engine = seat.name,
            ticks,
            nodes = result.nodes,
            score = result.score,
            "move chosen"
        );

        result.best_move.ok_or_else(|| TournamentError::NoMove {
            engine: seat.name.to_string(),
            ply: board.ply(),
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
