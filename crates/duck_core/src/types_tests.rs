use super::*;

#[test]
fn piece_packs_kind_and_color() {
    let p = Piece::new(PieceKind::Knight, Color::Black);
    assert_eq!(p.kind(), Some(PieceKind::Knight));
    assert_eq!(p.color(), Some(Color::Black));
    assert!(p.is_enemy_of(Color::White));
    assert!(!p.is_enemy_of(Color::Black));
}

#[test]
fn duck_and_empty_have_no_color() {
    assert_eq!(Piece::DUCK.color(), None);
    assert_eq!(Piece::EMPTY.color(), None);
    assert_eq!(Piece::DUCK.kind(), Some(PieceKind::Duck));
    assert_eq!(Piece::EMPTY.kind(), None);
    assert!(!Piece::DUCK.is_enemy_of(Color::White));
    assert!(!Piece::DUCK.is_enemy_of(Color::Black));
    assert!(Piece::EMPTY.is_empty());
    assert!(!Piece::DUCK.is_empty());
}

#[test]
fn from_bits_rejects_impossible_tags() {
    // colorless king
    assert_eq!(Piece::from_bits(PieceKind::King as u8), None);
    // colored duck
    assert_eq!(Piece::from_bits(PieceKind::Duck as u8 | Color::White.bits()), None);
    // both color bits
    assert_eq!(Piece::from_bits(0b11010), None);
    let q = Piece::new(PieceKind::Queen, Color::White);
    assert_eq!(Piece::from_bits(q.bits()), Some(q));
}

#[test]
fn square_names_round_trip() {
    assert_eq!(square_name(0), "a1");
    assert_eq!(square_name(63), "h8");
    assert_eq!(parse_square("e4"), Some(28));
    assert_eq!(parse_square("i1"), None);
    assert_eq!(parse_square("a9"), None);
    assert_eq!(sq(8, 0), None);
    assert_eq!(sq(4, 3), Some(28));
}

#[test]
fn symbols() {
    assert_eq!(Piece::new(PieceKind::Queen, Color::White).symbol(), 'Q');
    assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).symbol(), 'p');
    assert_eq!(Piece::DUCK.symbol(), '@');
    assert_eq!(Piece::EMPTY.symbol(), '.');
}
