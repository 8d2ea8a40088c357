use crate::{board::Board, types::*};

pub const MAN_VALUE: f64 = 1.0;
pub const KING_VALUE: f64 = 5.0;
/// Bonus per row already advanced toward the promotion row.
pub const ADVANCE_BONUS: f64 = 0.1;

/// Material plus advancement, from `perspective`'s point of view.
///
/// Zero-sum: `score(b, Red) == -score(b, Black)`. Pieces are summed in
/// row-major order so equal positions always produce bit-identical scores.
pub fn score(board: &Board, perspective: Player) -> f64 {
    let mut total = 0.0;
    for (pos, pc) in board.pieces() {
        let base = match pc.rank {
            Rank::Man => MAN_VALUE,
            Rank::King => KING_VALUE,
        };
        let value = base + pc.player.advancement(pos.row()) as f64 * ADVANCE_BONUS;
        if pc.player == perspective {
            total += value;
        } else {
            total -= value;
        }
    }
    total
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
