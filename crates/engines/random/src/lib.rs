//! Random Move Checkers Engine
//!
//! Picks uniformly among the legal moves of the side to move, capture rule
//! included. Any searching engine should beat it comfortably, which makes it
//! the baseline opponent for the match runner.

use checkers_core::{
    Board, Engine, Move, Player, SearchLimits, SearchResult, moves_for_player_into,
};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// An engine that plays random legal moves. It never evaluates a position.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    moves: Vec<Move>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, player: Player, _limits: SearchLimits) -> SearchResult {
        moves_for_player_into(board, player, &mut self.moves);

        SearchResult {
            best_move: self.moves.choose(&mut thread_rng()).cloned(),
            score: 0.0,
            depth: 1,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.moves.clear();
    }
}
