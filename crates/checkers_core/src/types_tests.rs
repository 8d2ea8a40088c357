use super::*;

#[test]
fn test_player_other() {
    assert_eq!(Player::Red.other(), Player::Black);
    assert_eq!(Player::Black.other(), Player::Red);
}

#[test]
fn test_forward_and_promotion_rows_agree() {
    // A man walking forward from its back rank reaches its promotion row.
    assert_eq!(Player::Red.forward(), 1);
    assert_eq!(Player::Red.promotion_row(), 7);
    assert_eq!(Player::Black.forward(), -1);
    assert_eq!(Player::Black.promotion_row(), 0);
}

#[test]
fn test_advancement() {
    assert_eq!(Player::Red.advancement(0), 0);
    assert_eq!(Player::Red.advancement(5), 5);
    assert_eq!(Player::Black.advancement(7), 0);
    assert_eq!(Player::Black.advancement(2), 5);
}

#[test]
fn test_man_directions_are_forward_only() {
    for player in Player::ALL {
        for &(dr, _) in Piece::man(player).directions() {
            assert_eq!(dr, player.forward());
        }
        assert_eq!(Piece::king(player).directions().len(), 4);
    }
}

#[test]
fn test_position_bounds() {
    assert!(Position::try_new(7, 7).is_ok());
    assert_eq!(
        Position::try_new(8, 0),
        Err(RulesError::OutOfBounds { row: 8, col: 0 })
    );
}

#[test]
#[should_panic(expected = "off the board")]
fn test_position_new_panics_out_of_range() {
    let _ = Position::new(0, 9);
}

#[test]
fn test_position_offset() {
    let pos = Position::new(2, 3);
    assert_eq!(pos.offset((1, 1), 2), Some(Position::new(4, 5)));
    assert_eq!(pos.offset((-1, -1), 3), None);
    assert_eq!(Position::new(0, 7).offset((1, 1), 1), None);
}

#[test]
fn test_position_parse() {
    assert_eq!("2,3".parse::<Position>(), Ok(Position::new(2, 3)));
    assert_eq!("(5, 0)".parse::<Position>(), Ok(Position::new(5, 0)));
    assert!("2;3".parse::<Position>().is_err());
    assert!("9,1".parse::<Position>().is_err());
    assert_eq!(Position::new(4, 5).to_string(), "(4,5)");
}

#[test]
fn test_playable_squares() {
    let squares: Vec<Position> = Position::playable().collect();
    assert_eq!(squares.len(), 32);
    assert_eq!(squares[0], Position::new(0, 1));
    assert!(squares.iter().all(|p| (p.row() + p.col()) % 2 == 1));
}

#[test]
fn test_piece_chars() {
    for ch in ['r', 'R', 'b', 'B'] {
        assert_eq!(Piece::from_char(ch).map(Piece::to_char), Some(ch));
    }
    assert_eq!(Piece::from_char('x'), None);
    assert!(Piece::man(Player::Red).promoted().is_king());
}

#[test]
fn test_move_display() {
    let mv = Move::capture(
        Position::new(2, 3),
        Position::new(4, 5),
        vec![Position::new(3, 4)],
    );
    assert_eq!(mv.to_string(), "(2,3)-(4,5) x(3,4)");
    assert!(mv.is_capture());
    assert!(!Move::new(Position::new(5, 0), Position::new(4, 1)).is_capture());
}

#[test]
fn test_position_serde_validates_range() {
    let pos: Position = serde_json::from_str("[3,4]").unwrap();
    assert_eq!(pos, Position::new(3, 4));
    assert!(serde_json::from_str::<Position>("[3,8]").is_err());
    assert_eq!(serde_json::to_string(&Player::Black).unwrap(), "\"black\"");
}
