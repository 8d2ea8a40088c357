use std::fmt;

use crate::error::RulesError;
use crate::types::*;

/// The 8x8 board, indexed `[row][col]`.
///
/// `Board` is a plain value: every operation that changes it returns a new
/// board, so search can branch without undo bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Starting layout: red men on rows 0-1, black men on rows 6-7.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for pos in Position::playable() {
            let piece = match pos.row() {
                0 | 1 => Piece::man(Player::Red),
                6 | 7 => Piece::man(Player::Black),
                _ => continue,
            };
            board.set(pos, Some(piece));
        }
        board
    }

    /// Parses a diagram of 8 rows of 8 cells: `.` empty, `r`/`R` red man/king,
    /// `b`/`B` black man/king. Rows are separated by newlines or `/`.
    pub fn from_diagram(diagram: &str) -> Result<Self, RulesError> {
        let rows: Vec<&str> = diagram
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(RulesError::InvalidDiagram(format!(
                "expected {BOARD_SIZE} rows, found {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(RulesError::InvalidDiagram(format!(
                    "row {row} has {} cells, expected {BOARD_SIZE}",
                    cells.len()
                )));
            }
            for (col, &ch) in cells.iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece = Piece::from_char(ch).ok_or_else(|| {
                    RulesError::InvalidDiagram(format!("unknown piece '{ch}' at ({row},{col})"))
                })?;
                board.place(Position::new(row as u8, col as u8), piece)?;
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row() as usize][pos.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Puts `piece` on `pos`, replacing whatever was there.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Result<(), RulesError> {
        if !pos.is_playable() {
            return Err(RulesError::UnplayableSquare {
                row: pos.row(),
                col: pos.col(),
            });
        }
        self.squares[pos.row() as usize][pos.col() as usize] = Some(piece);
        Ok(())
    }

    /// Writes a square without the playability check; `pos` must come from
    /// diagonal movement off a playable square.
    #[inline]
    pub(crate) fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.row() as usize][pos.col() as usize] = piece;
    }

    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.row() as usize][pos.col() as usize].take()
    }

    /// All pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::playable().filter_map(move |pos| self.get(pos).map(|pc| (pos, pc)))
    }

    pub fn piece_count(&self, player: Player) -> usize {
        self.pieces().filter(|(_, pc)| pc.player == player).count()
    }

    /// Returns the board after `mv`: the mover relocates, captured pieces are
    /// lifted, and a man reaching its promotion row becomes a king.
    ///
    /// A move whose origin is empty leaves the board unchanged.
    pub fn apply_move(&self, mv: &Move) -> Board {
        let mut next = *self;
        let Some(piece) = next.remove(mv.from) else {
            return next;
        };

        for &cap in &mv.captures {
            next.remove(cap);
        }

        let landed = if !piece.is_king() && mv.to.row() == piece.player.promotion_row() {
            piece.promoted()
        } else {
            piece
        };
        next.set(mv.to, Some(landed));
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    /// Writes the diagram accepted by [`Board::from_diagram`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.squares.iter().enumerate() {
            for sq in squares {
                let ch = sq.map(Piece::to_char).unwrap_or('.');
                write!(f, "{ch}")?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
