//! Tournament CLI
//!
//! Plays the match described by a TOML file and updates the Elo table.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tournament::{EloTracker, MatchConfig, MatchRunner, TournamentResults};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_ELO_FILE: &str = "tournament_elo.json";

fn print_usage() {
    println!("Duck chess tournament runner");
    println!();
    println!("Usage:");
    println!("  tournament <config.toml> [--results out.json] [--elo elo.json]");
    println!();
    println!("Engines (kind = ...):");
    println!("  alphabeta  - Alpha-beta with material eval (depth)");
    println!("  mcts       - Monte Carlo tree search (iterations, move_time_ms, seed)");
    println!("  random     - Uniformly random legal moves (seed)");
    println!();
    println!("Set RUST_LOG=debug to see every move.");
}

struct Args {
    config: PathBuf,
    results: Option<PathBuf>,
    elo: PathBuf,
}

fn parse_args(args: &[String]) -> Result<Option<Args>> {
    let mut config = None;
    let mut results = None;
    let mut elo = PathBuf::from(DEFAULT_ELO_FILE);

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "help" | "--help" | "-h" => return Ok(None),
            "--results" | "-r" => {
                let path = iter.next().context("--results needs a file name")?;
                results = Some(PathBuf::from(path));
            }
            "--elo" | "-e" => {
                let path = iter.next().context("--elo needs a file name")?;
                elo = PathBuf::from(path);
            }
            other if other.starts_with('-') => bail!("unknown option: {other}"),
            other => {
                if config.replace(PathBuf::from(other)).is_some() {
                    bail!("only one config file may be given");
                }
            }
        }
    }

    Ok(config.map(|config| Args {
        config,
        results,
        elo,
    }))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let Some(args) = parse_args(&raw)? else {
        print_usage();
        return Ok(());
    };

    let config = MatchConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    info!(
        engine1 = %config.engine1.label(),
        engine2 = %config.engine2.label(),
        games = config.num_games,
        "starting match"
    );

    let runner = MatchRunner::new(config.clone());
    let report = runner.run().context("match aborted")?;

    let mut tracker = EloTracker::load_or_default(&args.elo)?;
    let change = tracker.update_ratings(&report.engine1, &report.engine2, &report.result);
    info!(change, "ratings updated");

    let name = format!("{} vs {}", report.engine1, report.engine2);
    let mut results = TournamentResults::new(&name, config);
    results.add_match(report);

    println!("{}", results.generate_report());
    println!("{}", tracker.format_leaderboard());

    tracker.save(&args.elo)?;
    if let Some(path) = &args.results {
        results.save(path)?;
        info!(path = %path.display(), "results saved");
    }
    Ok(())
}
