//! Match configuration, loadable from TOML.
//!
//! ```toml
//! num_games = 4
//! max_plies = 300
//! tick_budget = { steps = 256 }
//!
//! [engine1]
//! kind = "alphabeta"
//! depth = 2
//!
//! [engine2]
//! kind = "mcts"
//! iterations = 500
//! ```

use std::path::Path;

use alphabeta_engine::{AlphaBetaConfig, AlphaBetaEngine};
use duck_core::{Engine, TickBudget};
use mcts_engine::{MctsConfig, MctsEngine};
use random_engine::{RandomConfig, RandomEngine};
use serde::{Deserialize, Serialize};

use crate::error::{TournamentError, TournamentResult};

/// Which engine to build, with that engine's own settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EngineSpec {
    AlphaBeta(AlphaBetaConfig),
    Mcts(MctsConfig),
    Random(RandomConfig),
}

impl EngineSpec {
    pub fn build(&self) -> Box<dyn Engine> {
        match self {
            EngineSpec::AlphaBeta(config) => Box::new(AlphaBetaEngine::with_config(*config)),
            EngineSpec::Mcts(config) => Box::new(MctsEngine::with_config(config.clone())),
            EngineSpec::Random(config) => Box::new(RandomEngine::with_config(*config)),
        }
    }

    /// Short name used in reports and the Elo table.
    pub fn label(&self) -> String {
        match self {
            EngineSpec::AlphaBeta(c) => format!("alphabeta-d{}", c.depth),
            EngineSpec::Mcts(c) => match c.move_time_ms {
                Some(ms) => format!("mcts-{}ms", ms),
                None => format!("mcts-{}", c.iterations),
            },
            EngineSpec::Random(_) => "random".to_string(),
        }
    }
}

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies (piece and duck) before a game is scored as a draw
    pub max_plies: u32,
    /// Work handed to the engine on each tick
    pub tick_budget: TickBudget,
    /// Give up on an engine that needs more ticks than this for one move
    pub max_ticks_per_move: Option<u32>,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Random plies played before the engines take over, for varied games
    pub opening_plies: u32,
    /// Seed for the opening plies
    pub seed: u64,
    pub engine1: EngineSpec,
    pub engine2: EngineSpec,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 400,
            tick_budget: TickBudget::default(),
            max_ticks_per_move: None,
            alternate_colors: true,
            opening_plies: 0,
            seed: 0,
            engine1: EngineSpec::AlphaBeta(AlphaBetaConfig::default()),
            engine2: EngineSpec::Random(RandomConfig::default()),
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(text: &str) -> TournamentResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> TournamentResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
