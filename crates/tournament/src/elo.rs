//! Elo rating calculation and tracking

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{TournamentError, TournamentResult};

/// Default starting Elo for new engines
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Result of a single game from one engine's side
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games), from engine1's side
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score in [0, 1]: 1 per win, 0.5 per draw
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Rating of one engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub elo: f64,
    pub games: u32,
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            elo: DEFAULT_ELO,
            games: 0,
        }
    }
}

/// Record of a single rated match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
    pub elo_change: f64,
}

/// Elo ratings for every engine label seen so far, persisted as JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    pub ratings: BTreeMap<String, Rating>,
    pub history: Vec<MatchRecord>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> TournamentResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Loads `path`, or starts a fresh table when the file does not exist yet.
    pub fn load_or_default(path: &Path) -> TournamentResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    pub fn save(&self, path: &Path) -> TournamentResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| TournamentError::io(path, e))
    }

    pub fn rating(&self, engine: &str) -> f64 {
        self.ratings.get(engine).map_or(DEFAULT_ELO, |r| r.elo)
    }

    /// Expected score for engine1 against engine2
    pub fn expected_score(&self, engine1: &str, engine2: &str) -> f64 {
        let r1 = self.rating(engine1);
        let r2 = self.rating(engine2);
        1.0 / (1.0 + 10.0_f64.powf((r2 - r1) / 400.0))
    }

    /// Update both ratings after a match; returns engine1's change
    pub fn update_ratings(&mut self, engine1: &str, engine2: &str, result: &MatchResult) -> f64 {
        let games = result.total_games();
        let expected = self.expected_score(engine1, engine2);
        let elo_change = K_FACTOR * games as f64 * (result.score() - expected);

        for (name, delta) in [(engine1, elo_change), (engine2, -elo_change)] {
            let rating = self.ratings.entry(name.to_string()).or_default();
            rating.elo += delta;
            rating.games += games;
        }

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        self.history.push(MatchRecord {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result: *result,
            timestamp,
            elo_change,
        });
        elo_change
    }

    /// Engines sorted by rating, best first
    pub fn leaderboard(&self) -> Vec<(&str, Rating)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, rating)| (name.as_str(), *rating))
            .collect();
        entries.sort_by(|a, b| b.1.elo.total_cmp(&a.1.elo));
        entries
    }

    pub fn format_leaderboard(&self) -> String {
        let mut out = String::from("=== Engine Leaderboard ===\n");
        out.push_str(&format!("{:<30} {:>8} {:>8}\n", "Engine", "Elo", "Games"));
        out.push_str(&"-".repeat(48));
        out.push('\n');
        for (name, rating) in self.leaderboard() {
            out.push_str(&format!("{:<30} {:>8.1} {:>8}\n", name, rating.elo, rating.games));
        }
        out
    }
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
