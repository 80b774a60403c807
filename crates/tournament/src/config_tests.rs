use super::*;

#[test]
fn sample_config_parses() {
    let config = MatchConfig::from_toml_str(include_str!("../tournament.toml")).unwrap();
    assert_eq!(config.num_games, 4);
    assert_eq!(config.opening_plies, 2);
    assert_eq!(config.tick_budget, TickBudget::Steps(256));
    assert_eq!(
        config.engine1,
        EngineSpec::AlphaBeta(AlphaBetaConfig { depth: 2 })
    );
    match &config.engine2 {
        EngineSpec::Mcts(mcts) => {
            assert_eq!(mcts.iterations, 400);
            assert_eq!(mcts.max_rollout_plies, 32);
            assert_eq!(mcts.seed, None);
        }
        other => panic!("expected mcts, got {other:?}"),
    }
}

#[test]
fn omitted_fields_use_defaults() {
    let config = MatchConfig::from_toml_str(
        r#"
        tick_budget = { millis = 5 }

        [engine1]
        kind = "random"
        seed = 9

        [engine2]
        kind = "alphabeta"
        "#,
    )
    .unwrap();
    assert_eq!(config.num_games, MatchConfig::default().num_games);
    assert_eq!(config.tick_budget, TickBudget::Millis(5));
    assert_eq!(config.engine1, EngineSpec::Random(RandomConfig { seed: Some(9) }));
    assert_eq!(config.engine2.label(), "alphabeta-d3");
}

#[test]
fn unknown_engine_kind_is_rejected() {
    let err = MatchConfig::from_toml_str(
        r#"
        [engine1]
        kind = "stockfish"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, TournamentError::Toml(_)));
}

#[test]
fn missing_file_reports_its_path() {
    let err = MatchConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.toml"));
}

#[test]
fn built_engines_carry_their_names() {
    let specs = [
        EngineSpec::AlphaBeta(AlphaBetaConfig::default()),
        EngineSpec::Mcts(MctsConfig::default()),
        EngineSpec::Random(RandomConfig::default()),
    ];
    let names: Vec<String> = specs.iter().map(|s| s.build().name().to_string()).collect();
    assert_eq!(names, ["AlphaBeta v1.0", "MCTS v1.0", "Random v1.0"]);
    assert_eq!(specs[1].label(), "mcts-2000");
}
