//! Work budgets for cooperative search.
//!
//! Engines never run a search to completion in one call. The host calls
//! [`Engine::tick`](crate::Engine::tick) repeatedly, each time handing over a
//! [`TickBudget`]; the engine uses a [`SliceClock`] to stop once that slice is spent and
//! keeps its state for the next call.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// How much work a single tick may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickBudget {
    /// A fixed number of engine steps (frame transitions, MCTS iterations).
    Steps(u32),
    /// Wall-clock milliseconds.
    Millis(u64),
}

impl TickBudget {
    pub fn duration(&self) -> Option<Duration> {
        match self {
            TickBudget::Steps(_) => None,
            TickBudget::Millis(ms) => Some(Duration::from_millis(*ms)),
        }
    }
}

impl Default for TickBudget {
    fn default() -> Self {
        TickBudget::Steps(256)
    }
}

/// Tracks how much of one tick's budget has been used.
///
/// At least one step is always allowed so every tick makes progress.
#[derive(Debug, Clone)]
pub struct SliceClock {
    budget: TickBudget,
    started: Instant,
    steps: u32,
    /// How often to read the clock (in steps). Defaults to every step, so a time slice
    /// overshoots by at most one step; raise it for very cheap steps.
    check_interval: u32,
    expired: bool,
}

impl SliceClock {
    pub fn start(budget: TickBudget) -> Self {
        Self {
            budget,
            started: Instant::now(),
            steps: 0,
            check_interval: 1,
            expired: false,
        }
    }

    pub fn with_check_interval(mut self, interval: u32) -> Self {
        self.check_interval = interval.max(1);
        self
    }

    /// Records one finished step.
    pub fn spend(&mut self) {
        self.steps += 1;
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// True once the slice is used up.
    pub fn exhausted(&mut self) -> bool {
        if self.steps == 0 {
            return false;
        }
        if self.expired {
            return true;
        }
        self.expired = match self.budget {
            TickBudget::Steps(n) => self.steps >= n,
            TickBudget::Millis(ms) => {
                self.steps % self.check_interval == 0
                    && self.started.elapsed() >= Duration::from_millis(ms)
            }
        };
        self.expired
    }
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod budget_tests;
