//! Tournament Runner for duck chess engines
//!
//! This crate provides infrastructure for:
//! - Playing engines against each other through the cooperative tick interface
//! - Recording games as packed move lists
//! - Tracking Elo ratings across runs
//!
//! # Usage
//!
//! ```bash
//! tournament crates/tournament/tournament.toml --results results.json --elo elo.json
//! ```

mod config;
mod elo;
mod error;
mod match_runner;
mod record;
mod results;

pub use config::*;
pub use elo::*;
pub use error::*;
pub use match_runner::*;
pub use record::*;
pub use results::*;
