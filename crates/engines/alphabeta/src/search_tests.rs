use super::*;
use crate::AlphaBetaEngine;
use duck_core::{
    parse_square, Engine, Piece, PieceKind, SearchStatus, TickBudget, WIN_SCORE,
};

fn s(name: &str) -> u8 {
    parse_square(name).unwrap()
}

fn run(board: &Board, depth: u8) -> AlphaBetaSearch {
    let mut search = AlphaBetaSearch::new(board, depth);
    while !search.step() {}
    search
}

/// Plain minimax without pruning, first strictly better move wins.
fn reference(board: &mut Board, depth: u8, max_depth: u8, root: Color) -> (i32, Option<Move>) {
    if depth >= max_depth || board.is_game_over() {
        return (evaluate(board, root), None);
    }
    let maximizing = board.turn() == root;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;
    for mv in board.legal_moves().to_vec() {
        let undo = board.make_move(mv);
        let (value, _) = reference(board, depth + 1, max_depth, root);
        board.unmake_move(undo).unwrap();
        if (maximizing && value > best) || (!maximizing && value < best) {
            best = value;
            best_move = Some(mv);
        }
    }
    (best, best_move)
}

fn middlegame() -> Board {
    Board::builder()
        .piece(s("g1"), PieceKind::King, Color::White)
        .piece(s("d1"), PieceKind::Queen, Color::White)
        .piece(s("c3"), PieceKind::Knight, Color::White)
        .piece(s("f2"), PieceKind::Pawn, Color::White)
        .piece(s("g8"), PieceKind::King, Color::Black)
        .piece(s("e5"), PieceKind::Rook, Color::Black)
        .piece(s("b6"), PieceKind::Bishop, Color::Black)
        .piece(s("g7"), PieceKind::Pawn, Color::Black)
        .duck(s("d4"))
        .build()
        .unwrap()
}

#[test]
fn depth_one_picks_best_material_outcome() {
    let board = middlegame();
    let search = run(&board, 1);
    let mut probe = board.clone();
    let best = board
        .legal_moves()
        .iter()
        .map(|&mv| {
            let undo = probe.make_move(mv);
            let value = evaluate(&probe, Color::White);
            probe.unmake_move(undo).unwrap();
            value
        })
        .max()
        .unwrap();
    assert_eq!(search.result().score, best);
    assert!(search.best_move().is_some());
}

#[test]
fn captures_hanging_queen() {
    let board = Board::builder()
        .piece(s("h1"), PieceKind::King, Color::White)
        .piece(s("a1"), PieceKind::Rook, Color::White)
        .piece(s("h8"), PieceKind::King, Color::Black)
        .piece(s("a5"), PieceKind::Queen, Color::Black)
        .build()
        .unwrap();
    let queen = Piece::new(PieceKind::Queen, Color::Black);
    for depth in [1, 2] {
        let (mv, _) = pick_best_move(&board, depth).unwrap();
        assert_eq!(mv, Move::onto(s("a1"), s("a5"), queen), "depth {depth}");
    }
}

#[test]
fn takes_the_king_when_it_can() {
    let board = Board::builder()
        .piece(s("a1"), PieceKind::King, Color::White)
        .piece(s("d1"), PieceKind::Queen, Color::White)
        .piece(s("d8"), PieceKind::King, Color::Black)
        .piece(s("h7"), PieceKind::Queen, Color::Black)
        .build()
        .unwrap();
    let king = Piece::new(PieceKind::King, Color::Black);
    let (mv, score) = pick_best_move(&board, 3).unwrap();
    assert_eq!(mv, Move::onto(s("d1"), s("d8"), king));
    assert_eq!(score, WIN_SCORE);
}

#[test]
fn pruning_matches_plain_minimax() {
    for (board, depth) in [(Board::new(), 3), (middlegame(), 3)] {
        let root = board.turn();
        let (expected_score, expected_move) = reference(&mut board.clone(), 0, depth, root);
        let search = run(&board, depth);
        assert_eq!(search.result().score, expected_score);
        assert_eq!(search.best_move(), expected_move);
    }
}

#[test]
fn finished_game_has_no_move() {
    let mut board = Board::builder()
        .piece(s("a1"), PieceKind::King, Color::White)
        .piece(s("a2"), PieceKind::Rook, Color::White)
        .piece(s("a8"), PieceKind::King, Color::Black)
        .build()
        .unwrap();
    board.make_move(Move::onto(
        s("a2"),
        s("a8"),
        Piece::new(PieceKind::King, Color::Black),
    ));
    assert!(pick_best_move(&board, 3).is_none());

    let mut engine = AlphaBetaEngine::with_depth(3);
    let result = engine.search(&board, TickBudget::Steps(64));
    assert_eq!(result.best_move, None);
    assert_eq!(result.move_or_null(), Move::NULL);
}

#[test]
fn single_step_ticks_match_one_shot_search() {
    let board = middlegame();
    let whole = run(&board, 3).result();

    let mut engine = AlphaBetaEngine::with_depth(3);
    engine.start(&board);
    let mut ticks = 0u64;
    let sliced = loop {
        ticks += 1;
        if let SearchStatus::Finished(result) = engine.tick(TickBudget::Steps(1)) {
            break result;
        }
    };
    assert_eq!(sliced, whole);
    assert!(ticks > 1);
}

#[test]
fn searching_leaves_the_callers_board_alone() {
    let board = middlegame();
    let before = board.clone();
    let mut engine = AlphaBetaEngine::with_depth(2);
    engine.start(&board);
    assert_eq!(engine.tick(TickBudget::Steps(3)), SearchStatus::Pending);
    assert_eq!(board, before);
    engine.search(&board, TickBudget::Millis(5));
    assert_eq!(board, before);
}

#[test]
fn tick_without_start_finishes_empty() {
    let mut engine = AlphaBetaEngine::new();
    assert_eq!(
        engine.tick(TickBudget::Steps(10)),
        SearchStatus::Finished(SearchResult::default())
    );
}

#[test]
fn config_reads_partial_toml_style_defaults() {
    let config: crate::AlphaBetaConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.depth, 3);
}
