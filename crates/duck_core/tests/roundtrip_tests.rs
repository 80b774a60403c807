//! Randomized self-play checks of the generator and the make/unmake protocol.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use duck_core::{legal_moves, Board, Color, PieceKind};

const GAMES: u64 = 24;
const MAX_PLIES: usize = 300;

fn mailbox_matches_sets(board: &Board) -> bool {
    let mut from_sets = 0usize;
    for color in Color::ALL {
        for kind in PieceKind::COLORED {
            for sq in board.pieces(color, kind).iter() {
                if !board.piece_at(sq).is(kind, color) {
                    return false;
                }
                from_sets += 1;
            }
        }
    }
    let colored = board
        .squares()
        .iter()
        .filter(|p| p.color().is_some())
        .count();
    let ducks = board.squares().iter().filter(|p| p.is_duck()).count();
    let duck_ok = match board.duck_square() {
        Some(d) => ducks == 1 && board.piece_at(d).is_duck(),
        None => ducks == 0,
    };
    from_sets == colored && duck_ok
}

fn play_random_game(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();

    for _ in 0..MAX_PLIES {
        if board.is_game_over() {
            break;
        }
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), board.legal_moves().len());

        let unique: HashSet<u32> = moves.iter().map(|m| m.to_bits()).collect();
        assert_eq!(unique.len(), moves.len(), "duplicate moves at ply {}", board.ply());
        assert!(moves.iter().all(|m| board.is_move_legal(m)));

        // every move must reverse exactly
        for &mv in &moves {
            let mut probe = board.clone();
            let undo = probe.make_move(mv);
            assert!(mailbox_matches_sets(&probe), "sets diverged after {mv}");
            probe.unmake_move(undo).unwrap();
            assert_eq!(probe, board, "unmake of {mv} did not restore the board");
        }

        let mv = *moves.choose(&mut rng).unwrap();
        board.make_move(mv);
        assert!(mailbox_matches_sets(&board));
    }
}

#[test]
fn random_games_round_trip() {
    (0..GAMES).into_par_iter().for_each(play_random_game);
}

#[test]
fn whole_game_unwinds_to_start() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut board = Board::new();
    let mut undos = Vec::new();
    while !board.is_game_over() && undos.len() < 200 {
        let mv = *board.legal_moves().choose(&mut rng).unwrap();
        undos.push(board.make_move(mv));
    }
    while let Some(undo) = undos.pop() {
        board.unmake_move(undo).unwrap();
    }
    assert_eq!(board, Board::new());
}
