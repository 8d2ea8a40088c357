pub mod board;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod outcome;
pub mod perft;
pub mod search;
pub mod types;

// Re-export the rules engine and search (not engine-specific)
pub use board::*;
pub use error::RulesError;
pub use eval::*;
pub use movegen::*;
pub use outcome::*;
pub use perft::perft;
pub use search::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move-picking player (minimax, random)
// =============================================================================

/// Limits handed to [`Engine::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Plies to search below the root
    pub depth: u8,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self { depth: 4 }
    }
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The move chosen (None if the side to move has no legal move)
    pub best_move: Option<Move>,
    /// Evaluation from the searching player's perspective
    pub score: f64,
    /// Search depth reached
    pub depth: u8,
    /// Number of positions visited
    pub nodes: u64,
}

impl SearchResult {
    pub fn no_move(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0.0,
            depth,
            nodes: 0,
        }
    }
}

/// Trait that all checkers engines implement.
///
/// Lets the match runner and the play front end swap a searching engine
/// for a random mover without caring which one they hold.
pub trait Engine: Send {
    /// Pick a move for `player` on `board` within `limits`.
    fn search(&mut self, board: &Board, player: Player, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
