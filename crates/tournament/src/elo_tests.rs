use super::*;

#[test]
fn test_elo_calculation() {
    let tracker = EloTracker::new();

    // Equal ratings should give 50% expected score
    let expected = tracker.expected_score("engine1", "engine2");
    assert!((expected - 0.5).abs() < 0.001);
}

#[test]
fn test_elo_update() {
    let mut tracker = EloTracker::new();

    // Engine1 wins all games
    let result = MatchResult {
        wins: 10,
        losses: 0,
        draws: 0,
    };
    let change = tracker.update_ratings("engine1", "engine2", &result);

    assert!((change - 160.0).abs() < 1e-9);
    assert!(tracker.rating("engine1") > DEFAULT_ELO);
    assert!(tracker.rating("engine2") < DEFAULT_ELO);
    assert_eq!(tracker.ratings["engine1"].games, 10);
    assert_eq!(tracker.history.len(), 1);
    assert_eq!(tracker.leaderboard()[0].0, "engine1");
}

#[test]
fn drawn_match_between_equals_changes_nothing() {
    let mut tracker = EloTracker::new();
    let result = MatchResult {
        wins: 2,
        losses: 2,
        draws: 4,
    };
    assert_eq!(result.score(), 0.5);
    assert_eq!(tracker.update_ratings("a", "b", &result), 0.0);
    assert_eq!(tracker.rating("a"), DEFAULT_ELO);
}

#[test]
fn tracker_survives_a_save_and_load() {
    let path = std::env::temp_dir().join(format!("duck-elo-{}.json", std::process::id()));
    let mut tracker = EloTracker::new();
    tracker.update_ratings("mcts-200", "random", &MatchResult { wins: 3, losses: 1, draws: 0 });
    tracker.save(&path).unwrap();

    let loaded = EloTracker::load(&path).unwrap();
    assert_eq!(loaded.ratings, tracker.ratings);
    std::fs::remove_file(&path).unwrap();

    assert!(EloTracker::load(&path).is_err());
    assert!(EloTracker::load_or_default(&path).unwrap().ratings.is_empty());
}

#[test]
fn game_results_accumulate() {
    let mut result = MatchResult::new();
    for r in [GameResult::Win, GameResult::Loss.flipped(), GameResult::Draw] {
        result.record(r);
    }
    assert_eq!(result, MatchResult { wins: 2, losses: 0, draws: 1 });
}
