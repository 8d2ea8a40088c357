//! Terminal-state detection.

use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    movegen::moves_for_player,
    types::{Move, Player},
};

/// Whether the game is over and, if so, who won. The rules have no draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub over: bool,
    pub winner: Option<Player>,
}

impl GameOutcome {
    pub const ONGOING: GameOutcome = GameOutcome {
        over: false,
        winner: None,
    };

    pub fn won_by(player: Player) -> Self {
        Self {
            over: true,
            winner: Some(player),
        }
    }
}

/// Decides the position for `to_move`.
///
/// A side with no pieces left loses, red checked first; otherwise a side to
/// move with no legal move loses by immobilization.
pub fn outcome(board: &Board, to_move: Player) -> GameOutcome {
    outcome_with_moves(board, to_move, &moves_for_player(board, to_move))
}

/// Same as [`outcome`] when the legal moves of `to_move` are already known.
pub fn outcome_with_moves(board: &Board, to_move: Player, moves: &[Move]) -> GameOutcome {
    for player in Player::ALL {
        if board.piece_count(player) == 0 {
            return GameOutcome::won_by(player.other());
        }
    }
    if moves.is_empty() {
        return GameOutcome::won_by(to_move.other());
    }
    GameOutcome::ONGOING
}
