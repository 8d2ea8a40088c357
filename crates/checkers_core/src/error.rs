//! Error types for the rules core
//!
//! Rules queries on a well-formed board never fail; these errors only come
//! from building positions and boards out of untrusted input.

use thiserror::Error;

/// Errors raised while constructing positions, pieces or boards
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Coordinates outside the 8x8 board
    #[error("Position ({row},{col}) is off the board (rows and columns must be 0-7)")]
    OutOfBounds { row: u8, col: u8 },

    /// Only squares where row + col is odd may hold a piece
    #[error("Square ({row},{col}) is not playable")]
    UnplayableSquare { row: u8, col: u8 },

    /// Text that does not describe a square
    #[error("Invalid position '{0}' (expected r,c)")]
    InvalidPosition(String),

    /// Text that does not name a player
    #[error("Invalid player '{0}' (expected red or black)")]
    InvalidPlayer(String),

    /// Malformed board diagram
    #[error("Invalid board diagram: {0}")]
    InvalidDiagram(String),
}
