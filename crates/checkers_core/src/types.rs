use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

pub const BOARD_SIZE: usize = 8;

/// Diagonal steps a king may take, in generation order.
pub const KING_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Black,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Red, Player::Black];

    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Black => 1,
        }
    }

    /// Row delta of a forward step. Red starts on rows 0-1 and walks down the board.
    pub fn forward(self) -> i8 {
        match self {
            Player::Red => 1,
            Player::Black => -1,
        }
    }

    /// Row on which this player's men are promoted.
    pub fn promotion_row(self) -> u8 {
        match self {
            Player::Red => (BOARD_SIZE - 1) as u8,
            Player::Black => 0,
        }
    }

    /// Number of rows a piece standing on `row` has already advanced.
    pub fn advancement(self, row: u8) -> u8 {
        match self {
            Player::Red => row,
            Player::Black => (BOARD_SIZE - 1) as u8 - row,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => f.write_str("red"),
            Player::Black => f.write_str("black"),
        }
    }
}

impl FromStr for Player {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Player::Red),
            "black" | "b" => Ok(Player::Black),
            _ => Err(RulesError::InvalidPlayer(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub player: Player,
    pub rank: Rank,
}

impl Piece {
    pub fn man(player: Player) -> Self {
        Self {
            player,
            rank: Rank::Man,
        }
    }

    pub fn king(player: Player) -> Self {
        Self {
            player,
            rank: Rank::King,
        }
    }

    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Returns the promoted value of this piece. Kings are returned unchanged.
    pub fn promoted(self) -> Self {
        Self::king(self.player)
    }

    /// Directions used for both stepping and capturing.
    /// Men are confined to their two forward diagonals, including mid-chain.
    pub fn directions(self) -> &'static [(i8, i8)] {
        match (self.rank, self.player) {
            (Rank::King, _) => &KING_DIRECTIONS,
            (Rank::Man, Player::Red) => &[(1, -1), (1, 1)],
            (Rank::Man, Player::Black) => &[(-1, -1), (-1, 1)],
        }
    }

    pub fn to_char(self) -> char {
        match (self.player, self.rank) {
            (Player::Red, Rank::Man) => 'r',
            (Player::Red, Rank::King) => 'R',
            (Player::Black, Rank::Man) => 'b',
            (Player::Black, Rank::King) => 'B',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'r' => Some(Piece::man(Player::Red)),
            'R' => Some(Piece::king(Player::Red)),
            'b' => Some(Piece::man(Player::Black)),
            'B' => Some(Piece::king(Player::Black)),
            _ => None,
        }
    }
}

/// A square on the board. Always in range; construct with [`Position::new`]
/// or [`Position::try_new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Panics if `row` or `col` is off the board.
    pub fn new(row: u8, col: u8) -> Self {
        match Self::try_new(row, col) {
            Ok(pos) => pos,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_new(row: u8, col: u8) -> Result<Self, RulesError> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(RulesError::OutOfBounds { row, col })
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn is_playable(self) -> bool {
        is_playable(self.row, self.col)
    }

    /// The square `steps` diagonal steps away in direction `(dr, dc)`, if on the board.
    pub fn offset(self, (dr, dc): (i8, i8), steps: i8) -> Option<Position> {
        let row = self.row as i8 + dr * steps;
        let col = self.col as i8 + dc * steps;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterates every playable square, rows then columns.
    pub fn playable() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position { row, col }))
            .filter(|pos| pos.is_playable())
    }
}

pub fn is_playable(row: u8, col: u8) -> bool {
    (row + col) % 2 == 1
}

impl TryFrom<[u8; 2]> for Position {
    type Error = RulesError;

    fn try_from([row, col]: [u8; 2]) -> Result<Self, Self::Error> {
        Position::try_new(row, col)
    }
}

impl From<Position> for [u8; 2] {
    fn from(pos: Position) -> Self {
        [pos.row, pos.col]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = RulesError;

    /// Accepts `r,c` or `(r,c)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || RulesError::InvalidPosition(s.to_string());
        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let (row, col) = inner.split_once(',').ok_or_else(bad)?;
        let row: u8 = row.trim().parse().map_err(|_| bad())?;
        let col: u8 = col.trim().parse().map_err(|_| bad())?;
        Position::try_new(row, col)
    }
}

/// A complete move: a single step, a slide, or a whole capture chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    /// Captured squares in the order they were jumped. Empty for a quiet move.
    pub captures: Vec<Position>,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            captures: Vec::new(),
        }
    }

    pub fn capture(from: Position, to: Position, captures: Vec<Position>) -> Self {
        Self { from, to, captures }
    }

    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)?;
        for cap in &self.captures {
            write!(f, " x{cap}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
