//! Generator and applier invariants checked on every position of a
//! shallow game tree.

use std::collections::HashSet;

use checkers_core::{
    Board, Move, Player, Position, Rank, moves_for_piece, moves_for_player, outcome,
};

const WALK_DEPTH: u8 = 4;

fn walk(board: &Board, player: Player, depth: u8, check: &mut impl FnMut(&Board, Player, &[Move])) {
    let moves = moves_for_player(board, player);
    check(board, player, &moves);
    if depth == 0 {
        return;
    }
    for mv in &moves {
        walk(&board.apply_move(mv), player.other(), depth - 1, check);
    }
}

fn roots() -> Vec<(Board, Player)> {
    let kings = Board::from_diagram(
        ".R....../......../...b..../......../.....b../......../.b...B../........",
    )
    .unwrap();
    let sparse = Board::from_diagram(
        "......../..r.r.../.r...r../......../...b..../..b.b.b./......../........",
    )
    .unwrap();
    vec![
        (Board::initial(), Player::Black),
        (Board::initial(), Player::Red),
        (kings, Player::Red),
        (sparse, Player::Black),
    ]
}

fn for_every_position(mut check: impl FnMut(&Board, Player, &[Move])) {
    for (board, player) in roots() {
        walk(&board, player, WALK_DEPTH, &mut check);
    }
}

#[test]
fn test_capture_is_mandatory_across_the_board() {
    for_every_position(|board, player, moves| {
        let any_capture = board
            .pieces()
            .filter(|(_, pc)| pc.player == player)
            .any(|(from, _)| moves_for_piece(board, from).iter().any(Move::is_capture));
        if any_capture {
            assert!(
                moves.iter().all(Move::is_capture),
                "quiet move offered while a capture exists\n{board}"
            );
        }
    });
}

#[test]
fn test_moves_belong_to_the_mover() {
    for_every_position(|board, player, moves| {
        for mv in moves {
            let piece = board.get(mv.from).expect("move from an empty square");
            assert_eq!(piece.player, player);
            assert!(mv.to.is_playable());
            assert!(board.is_empty(mv.to) || mv.to == mv.from);
        }
    });
}

#[test]
fn test_quiet_man_moves_step_forward() {
    for_every_position(|board, player, moves| {
        for mv in moves.iter().filter(|mv| !mv.is_capture()) {
            let piece = board.get(mv.from).unwrap();
            if piece.rank != Rank::Man {
                continue;
            }
            let dr = mv.to.row() as i8 - mv.from.row() as i8;
            let dc = mv.to.col() as i8 - mv.from.col() as i8;
            assert_eq!(dr, player.forward(), "man stepped backward: {mv}");
            assert_eq!(dc.abs(), 1);
        }
    });
}

#[test]
fn test_king_slides_cross_only_empty_squares() {
    for_every_position(|board, _, moves| {
        for mv in moves.iter().filter(|mv| !mv.is_capture()) {
            if !board.get(mv.from).unwrap().is_king() {
                continue;
            }
            let dr = (mv.to.row() as i8 - mv.from.row() as i8).signum();
            let dc = (mv.to.col() as i8 - mv.from.col() as i8).signum();
            let mut sq = mv.from;
            while sq != mv.to {
                sq = sq.offset((dr, dc), 1).unwrap();
                assert!(board.is_empty(sq), "king slid through a piece: {mv}");
            }
        }
    });
}

#[test]
fn test_captures_take_distinct_enemy_pieces() {
    for_every_position(|board, player, moves| {
        for mv in moves {
            let unique: HashSet<Position> = mv.captures.iter().copied().collect();
            assert_eq!(unique.len(), mv.captures.len(), "captured twice: {mv}");
            for cap in &mv.captures {
                let victim = board.get(*cap).expect("captured an empty square");
                assert_eq!(victim.player, player.other());
            }
        }
    });
}

#[test]
fn test_apply_removes_captured_and_relocates_mover() {
    for_every_position(|board, player, moves| {
        for mv in moves {
            let next = board.apply_move(mv);
            for cap in &mv.captures {
                assert!(next.is_empty(*cap));
            }
            if mv.to != mv.from {
                assert!(next.is_empty(mv.from));
            }
            assert_eq!(
                next.piece_count(player.other()),
                board.piece_count(player.other()) - mv.captures.len()
            );
            assert_eq!(next.piece_count(player), board.piece_count(player));

            let before = board.get(mv.from).unwrap();
            let after = next.get(mv.to).unwrap();
            assert_eq!(after.player, player);
            let promotes = before.rank == Rank::Man && mv.to.row() == player.promotion_row();
            assert_eq!(after.is_king(), before.is_king() || promotes);
        }
    });
}

#[test]
fn test_generation_is_deterministic() {
    for_every_position(|board, player, moves| {
        assert_eq!(moves, moves_for_player(board, player).as_slice());
    });
}

#[test]
fn test_outcome_agrees_with_generated_moves() {
    for_every_position(|board, player, moves| {
        let status = outcome(board, player);
        let both_present = Player::ALL.iter().all(|&p| board.piece_count(p) > 0);
        if both_present && moves.is_empty() {
            assert_eq!(status.winner, Some(player.other()));
        }
        assert_eq!(status.over, status.winner.is_some());
    });
}
