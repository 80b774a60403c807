use crate::board::Board;

/// Pure perft node count.
/// Counts all positions reachable in exactly `depth` plies, duck plies included.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = board.legal_moves().to_vec();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let undo = board.make_move(mv);
        nodes += perft(board, depth - 1);
        board
            .unmake_move(undo)
            .expect("perft unmakes in reverse order");
    }
    nodes
}
