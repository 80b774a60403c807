use tournament::{EloTracker, MatchConfig, MatchRunner, TournamentResults};

const QUICK_MATCH: &str = r#"
num_games = 2
max_plies = 40
tick_budget = { steps = 32 }

[engine1]
kind = "mcts"
iterations = 24
max_rollout_plies = 8
seed = 4

[engine2]
kind = "random"
seed = 5
"#;

#[test]
fn match_results_and_ratings_round_trip_through_json() {
    let config = MatchConfig::from_toml_str(QUICK_MATCH).unwrap();
    let report = MatchRunner::new(config.clone()).run().unwrap();
    assert_eq!(report.engine1, "mcts-24");
    assert_eq!(report.engine2, "random");

    let mut tracker = EloTracker::new();
    tracker.update_ratings(&report.engine1, &report.engine2, &report.result);

    let mut results = TournamentResults::new("quick", config);
    results.add_match(report);
    assert_eq!(results.participants, ["mcts-24", "random"]);
    let text = results.generate_report();
    assert!(text.contains("mcts-24"));

    let dir = std::env::temp_dir();
    let results_path = dir.join(format!("duck-results-{}.json", std::process::id()));
    let elo_path = dir.join(format!("duck-ratings-{}.json", std::process::id()));
    results.save(&results_path).unwrap();
    tracker.save(&elo_path).unwrap();

    let loaded = TournamentResults::load(&results_path).unwrap();
    assert_eq!(loaded.matches.len(), 1);
    assert_eq!(loaded.matches[0].games, results.matches[0].games);
    for game in &loaded.matches[0].games {
        game.replay().unwrap();
    }
    assert_eq!(EloTracker::load(&elo_path).unwrap().ratings, tracker.ratings);

    std::fs::remove_file(results_path).unwrap();
    std::fs::remove_file(elo_path).unwrap();
}
