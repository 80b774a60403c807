use super::*;
use duck_core::{parse_square, Color, Piece, PieceKind};

fn s(name: &str) -> u8 {
    parse_square(name).unwrap()
}

/// White takes the king with Qxd8 or loses its own king to a rook next turn.
fn mate_in_one() -> Board {
    Board::builder()
        .piece(s("a1"), PieceKind::King, Color::White)
        .piece(s("d1"), PieceKind::Queen, Color::White)
        .piece(s("d8"), PieceKind::King, Color::Black)
        .piece(s("a8"), PieceKind::Rook, Color::Black)
        .piece(s("b7"), PieceKind::Rook, Color::Black)
        .build()
        .unwrap()
}

fn finish(engine: &mut MctsEngine, budget: TickBudget) -> (SearchResult, u32) {
    let mut ticks = 0;
    loop {
        ticks += 1;
        if let SearchStatus::Finished(result) = engine.tick(budget) {
            return (result, ticks);
        }
    }
}

#[test]
fn converges_on_king_capture() {
    let board = mate_in_one();
    let king = Piece::new(PieceKind::King, Color::Black);
    let winning = Move::onto(s("d1"), s("d8"), king);

    let mut search = MctsSearch::new(&board, MctsConfig::with_iterations(3000).seeded(11));
    while !search.is_finished() {
        search.iterate();
    }
    let tree = search.tree();
    let best = tree.most_visited_child().unwrap();
    assert_eq!(best.mv, Some(winning));
    assert!(best.visits * 2 > tree.root().visits, "visits {}", best.visits);
    assert_eq!(best.mean(), 1.0);
    assert_eq!(search.result().best_move, Some(winning));
}

#[test]
fn zero_iterations_fall_back_to_a_legal_move() {
    let board = Board::new();
    let mut engine = MctsEngine::with_config(MctsConfig::with_iterations(0).seeded(3));
    let result = engine.search(&board, TickBudget::Steps(8));
    let mv = result.best_move.unwrap();
    assert!(board.is_move_legal(&mv));
    assert_eq!(result.iterations, 0);
}

#[test]
fn finished_game_returns_no_move() {
    let mut board = mate_in_one();
    board.make_move(Move::onto(
        s("d1"),
        s("d8"),
        Piece::new(PieceKind::King, Color::Black),
    ));
    let mut engine = MctsEngine::with_config(MctsConfig::with_iterations(100));
    let result = engine.search(&board, TickBudget::Steps(8));
    assert_eq!(result.best_move, None);
    assert_eq!(result.move_or_null(), Move::NULL);
}

#[test]
fn seeded_searches_repeat() {
    let board = Board::new();
    let config = MctsConfig::with_iterations(200).seeded(42);
    let a = MctsEngine::with_config(config.clone()).search(&board, TickBudget::Steps(16));
    let b = MctsEngine::with_config(config).search(&board, TickBudget::Steps(16));
    assert_eq!(a, b);
    assert_eq!(a.iterations, 200);
}

#[test]
fn ticks_run_bounded_iterations() {
    let board = Board::new();
    let mut engine = MctsEngine::with_config(MctsConfig::with_iterations(50).seeded(9));
    engine.start(&board);
    assert_eq!(engine.tick(TickBudget::Steps(10)), SearchStatus::Pending);
    let (result, ticks) = finish(&mut engine, TickBudget::Steps(10));
    assert_eq!(ticks, 4);
    assert_eq!(result.iterations, 50);
    assert!(board.is_move_legal(&result.best_move.unwrap()));
}

#[test]
fn move_time_limit_ends_search() {
    let board = Board::new();
    let config = MctsConfig {
        iterations: u64::MAX,
        move_time_ms: Some(20),
        ..MctsConfig::default()
    };
    let mut engine = MctsEngine::with_config(config);
    let result = engine.search(&board, TickBudget::Millis(5));
    assert!(result.iterations > 0);
    assert!(result.best_move.is_some());
}

#[test]
fn new_game_drops_the_running_search() {
    let mut engine = MctsEngine::with_config(MctsConfig::with_iterations(100));
    engine.start(&Board::new());
    engine.new_game();
    assert_eq!(
        engine.tick(TickBudget::Steps(1)),
        SearchStatus::Finished(SearchResult::default())
    );
}

#[test]
fn config_fields_default_individually() {
    let config: MctsConfig = serde_json::from_str(r#"{ "iterations": 64, "seed": 5 }"#).unwrap();
    assert_eq!(config.iterations, 64);
    assert_eq!(config.seed, Some(5));
    assert_eq!(config.max_rollout_plies, 48);
    assert!(config.greedy_king_capture);
    assert_eq!(config.exploration, std::f64::consts::SQRT_2);
}
