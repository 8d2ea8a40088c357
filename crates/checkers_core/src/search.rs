//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are always taken from the root player's perspective: the root
//! player maximizes, the opponent minimizes. Finished games are scored
//! like the horizon, by static evaluation. Ties keep the first move in
//! generation order, so results are fully deterministic.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    board::Board,
    eval::score,
    movegen::moves_for_player,
    outcome::outcome_with_moves,
    types::{Move, Player},
};

/// A candidate move with its score for the player who asked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "move")]
    pub mv: Move,
    pub score: f64,
    pub depth: u8,
}

/// Counters collected during a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root included
    pub nodes: u64,
}

/// Best move for `player` searching `depth` plies.
///
/// Returns `None` when `player` has no legal move, or when `depth` is 0
/// (the horizon is the root itself, so no move is searched).
pub fn best_move(board: &Board, player: Player, depth: u8) -> Option<Recommendation> {
    best_move_with_stats(board, player, depth, &mut SearchStats::default())
}

pub fn best_move_with_stats(
    board: &Board,
    player: Player,
    depth: u8,
    stats: &mut SearchStats,
) -> Option<Recommendation> {
    let moves = moves_for_player(board, player);
    if moves.is_empty() || depth == 0 {
        debug!(%player, depth, legal = moves.len(), "no move searched");
        return None;
    }

    let mut searcher = Searcher::new(player);
    searcher.nodes += 1;

    let mut alpha = f64::NEG_INFINITY;
    let mut best: Option<(usize, f64)> = None;
    for (idx, mv) in moves.iter().enumerate() {
        let child = board.apply_move(mv);
        let value = searcher.minimax(&child, depth - 1, alpha, f64::INFINITY, false);
        if best.is_none_or(|(_, best_score)| value > best_score) {
            best = Some((idx, value));
        }
        alpha = alpha.max(value);
    }

    stats.nodes += searcher.nodes;
    let (idx, value) = best?;
    debug!(%player, depth, nodes = searcher.nodes, score = value, mv = %moves[idx], "best move");
    Some(Recommendation {
        mv: moves[idx].clone(),
        score: value,
        depth,
    })
}

/// Every legal move for `player`, each searched to `depth` plies without
/// pruning against its siblings, sorted best first.
///
/// Equal scores keep generation order. At depth 0 each move is scored by
/// the static evaluation of the position it leads to.
pub fn ranked_moves(board: &Board, player: Player, depth: u8) -> Vec<Recommendation> {
    ranked_moves_with_stats(board, player, depth, &mut SearchStats::default())
}

pub fn ranked_moves_with_stats(
    board: &Board,
    player: Player,
    depth: u8,
    stats: &mut SearchStats,
) -> Vec<Recommendation> {
    let mut searcher = Searcher::new(player);
    searcher.nodes += 1;

    let mut ranked: Vec<Recommendation> = moves_for_player(board, player)
        .into_iter()
        .map(|mv| {
            let child = board.apply_move(&mv);
            let score = searcher.minimax(
                &child,
                depth.saturating_sub(1),
                f64::NEG_INFINITY,
                f64::INFINITY,
                false,
            );
            Recommendation { mv, score, depth }
        })
        .collect();

    // Stable sort: ties stay in generation order.
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    stats.nodes += searcher.nodes;
    debug!(%player, depth, nodes = searcher.nodes, moves = ranked.len(), "ranked moves");
    ranked
}

struct Searcher {
    root: Player,
    nodes: u64,
}

impl Searcher {
    fn new(root: Player) -> Self {
        Self { root, nodes: 0 }
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.nodes += 1;

        let mover = if maximizing {
            self.root
        } else {
            self.root.other()
        };
        let moves = moves_for_player(board, mover);

        if depth == 0 || outcome_with_moves(board, mover, &moves).over {
            return score(board, self.root);
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for mv in &moves {
                let value = self.minimax(&board.apply_move(mv), depth - 1, alpha, beta, false);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for mv in &moves {
                let value = self.minimax(&board.apply_move(mv), depth - 1, alpha, beta, true);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
