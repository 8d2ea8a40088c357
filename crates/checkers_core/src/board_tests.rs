use super::*;

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

#[test]
fn test_initial_layout() {
    let board = Board::initial();
    assert_eq!(board.piece_count(Player::Red), 8);
    assert_eq!(board.piece_count(Player::Black), 8);
    assert_eq!(board.get(pos(0, 1)), Some(Piece::man(Player::Red)));
    assert_eq!(board.get(pos(1, 0)), Some(Piece::man(Player::Red)));
    assert_eq!(board.get(pos(6, 1)), Some(Piece::man(Player::Black)));
    assert_eq!(board.get(pos(7, 0)), Some(Piece::man(Player::Black)));
    for row in 2..6 {
        for col in 0..8 {
            assert!(board.is_empty(pos(row, col)));
        }
    }
    // Non-playable squares never hold a piece.
    assert!(board.pieces().all(|(p, _)| p.is_playable()));
}

#[test]
fn test_diagram_round_trip() {
    let board = Board::initial();
    let text = board.to_string();
    assert_eq!(text.lines().next(), Some(".r.r.r.r"));
    assert_eq!(Board::from_diagram(&text), Ok(board));
}

#[test]
fn test_diagram_slash_separated() {
    let board = Board::from_diagram(&["........"; 8].join("/")).unwrap();
    assert_eq!(board, Board::empty());

    let board = Board::from_diagram(
        "......../......../...r..../....b.../......../......../......../........",
    )
    .unwrap();
    assert_eq!(board.get(pos(2, 3)), Some(Piece::man(Player::Red)));
    assert_eq!(board.get(pos(3, 4)), Some(Piece::man(Player::Black)));
}

#[test]
fn test_diagram_errors() {
    assert!(matches!(
        Board::from_diagram("........"),
        Err(RulesError::InvalidDiagram(_))
    ));
    let bad_piece = "x......./......../......../......../......../......../......../........";
    assert!(matches!(
        Board::from_diagram(bad_piece),
        Err(RulesError::InvalidDiagram(_))
    ));
    let unplayable = "r......./......../......../......../......../......../......../........";
    assert_eq!(
        Board::from_diagram(unplayable),
        Err(RulesError::UnplayableSquare { row: 0, col: 0 })
    );
}

#[test]
fn test_place_rejects_unplayable() {
    let mut board = Board::empty();
    assert!(board.place(pos(3, 3), Piece::man(Player::Red)).is_err());
    assert!(board.place(pos(3, 4), Piece::man(Player::Red)).is_ok());
    assert_eq!(board.remove(pos(3, 4)), Some(Piece::man(Player::Red)));
    assert!(board.is_empty(pos(3, 4)));
}

#[test]
fn test_apply_simple_move() {
    let board = Board::initial();
    let mv = Move::new(pos(6, 1), pos(5, 0));
    let next = board.apply_move(&mv);
    assert!(next.is_empty(pos(6, 1)));
    assert_eq!(next.get(pos(5, 0)), Some(Piece::man(Player::Black)));
    // The source board is untouched.
    assert_eq!(board.get(pos(6, 1)), Some(Piece::man(Player::Black)));
}

#[test]
fn test_apply_capture_removes_pieces() {
    let mut board = Board::empty();
    board.place(pos(2, 3), Piece::man(Player::Red)).unwrap();
    board.place(pos(3, 4), Piece::man(Player::Black)).unwrap();
    let mv = Move::capture(pos(2, 3), pos(4, 5), vec![pos(3, 4)]);
    let next = board.apply_move(&mv);
    assert_eq!(next.piece_count(Player::Black), 0);
    assert_eq!(next.get(pos(4, 5)), Some(Piece::man(Player::Red)));
}

#[test]
fn test_apply_promotes_on_far_row() {
    let mut board = Board::empty();
    board.place(pos(6, 1), Piece::man(Player::Red)).unwrap();
    board.place(pos(1, 2), Piece::man(Player::Black)).unwrap();

    let next = board.apply_move(&Move::new(pos(6, 1), pos(7, 0)));
    assert_eq!(next.get(pos(7, 0)), Some(Piece::king(Player::Red)));

    let next = board.apply_move(&Move::new(pos(1, 2), pos(0, 3)));
    assert_eq!(next.get(pos(0, 3)), Some(Piece::king(Player::Black)));
}

#[test]
fn test_apply_king_is_never_repromoted() {
    let mut board = Board::empty();
    board.place(pos(6, 1), Piece::king(Player::Red)).unwrap();
    let next = board.apply_move(&Move::new(pos(6, 1), pos(7, 2)));
    assert_eq!(next.get(pos(7, 2)), Some(Piece::king(Player::Red)));
}

#[test]
fn test_apply_from_empty_square_is_noop() {
    let board = Board::initial();
    let next = board.apply_move(&Move::new(pos(3, 2), pos(4, 3)));
    assert_eq!(next, board);
}
