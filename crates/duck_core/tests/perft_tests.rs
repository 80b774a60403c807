use duck_core::{perft, Board};

#[test]
fn perft_startpos_shallow() {
    let mut board = Board::new();
    assert_eq!(perft(&mut board, 0), 1);
    assert_eq!(perft(&mut board, 1), 20);
    // every opening move leaves 32 empty squares for the duck
    assert_eq!(perft(&mut board, 2), 640);
    assert_eq!(board, Board::new());
}

#[test]
fn perft_leaves_board_untouched() {
    let mut board = Board::new();
    let before = board.clone();
    let nodes = perft(&mut board, 3);
    assert!(nodes > 640);
    assert_eq!(board, before);
}
