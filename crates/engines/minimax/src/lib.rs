//! Minimax Checkers Engine
//!
//! Wraps the core alpha-beta search behind the [`Engine`] trait so it can be
//! dropped into matches and the play front end.

use checkers_core::{
    Board, Engine, Player, Recommendation, SearchLimits, SearchResult, SearchStats,
    best_move_with_stats, ranked_moves_with_stats,
};
use tracing::debug;


/// Alpha-beta engine scoring with material and advancement.
///
/// A depth of 0 is raised to 1: an engine asked to move always searches at
/// least its own replies.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Every legal move for `player`, best first, with its score.
    pub fn ranked(&mut self, board: &Board, player: Player, depth: u8) -> Vec<Recommendation> {
        let mut stats = SearchStats::default();
        let ranked = ranked_moves_with_stats(board, player, depth, &mut stats);
        self.nodes = stats.nodes;
        ranked
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, player: Player, limits: SearchLimits) -> SearchResult {
        let depth = limits.depth.max(1);
        let mut stats = SearchStats::default();

        let result = match best_move_with_stats(board, player, depth, &mut stats) {
            Some(rec) => SearchResult {
                best_move: Some(rec.mv),
                score: rec.score,
                depth,
                nodes: stats.nodes,
            },
            None => SearchResult::no_move(depth),
        };

        self.nodes = stats.nodes;
        debug!(engine = self.name(), %player, depth, nodes = self.nodes, "search done");
        result
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
