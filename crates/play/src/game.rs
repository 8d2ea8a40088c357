
use checkers_core::{
    moves_for_piece, moves_for_player, outcome, ranked_moves, Board, Engine, GameOutcome, Move,
    Player, Position, Recommendation, SearchLimits,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("The game is over")]
    GameOver,
    #[error("There is no {player} piece on {pos}")]
    NotYourPiece { player: Player, pos: Position },
    #[error("{from} to {to} is not a legal move")]
    IllegalMove { from: Position, to: Position },
    #[error("A capture is available and must be taken")]
    CaptureRequired,
}

/// A move as it happened in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayedMove {
    pub player: Player,
    #[serde(rename = "move")]
    pub mv: Move,
    /// The moving man became a king
    pub promoted: bool,
}

/// One game in progress. Black moves first.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<PlayedMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Board::initial(), Player::Black)
    }

    pub fn from_position(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        moves_for_player(&self.board, self.to_move)
    }

    /// Whether the side to move is bound by the capture rule this turn.
    pub fn must_capture(&self) -> bool {
        self.legal_moves().iter().any(Move::is_capture)
    }

    pub fn outcome(&self) -> GameOutcome {
        outcome(&self.board, self.to_move)
    }

    pub fn is_over(&self) -> bool {
        self.outcome().over
    }

    /// Plays the first legal move going from `from` to `to`.
    ///
    /// Different capture chains can share both ends; the first one in
    /// generation order is taken.
    pub fn play(&mut self, from: Position, to: Position) -> Result<PlayedMove, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        match self.board.get(from) {
            Some(piece) if piece.player == self.to_move => {}
            _ => {
                return Err(PlayError::NotYourPiece {
                    player: self.to_move,
                    pos: from,
                })
            }
        }

        let legal = self.legal_moves();
        if let Some(mv) = legal.iter().find(|mv| mv.from == from && mv.to == to) {
            let mv = mv.clone();
            return Ok(self.apply(mv));
        }

        let piece_only = moves_for_piece(&self.board, from);
        if piece_only.iter().any(|mv| mv.to == to) && legal.iter().any(Move::is_capture) {
            return Err(PlayError::CaptureRequired);
        }
        Err(PlayError::IllegalMove { from, to })
    }

    /// Plays a complete move, typically one chosen by an engine.
    pub fn play_move(&mut self, mv: &Move) -> Result<PlayedMove, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        if !self.legal_moves().contains(mv) {
            return Err(PlayError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }
        Ok(self.apply(mv.clone()))
    }

    /// Lets `engine` move for the side on turn. `None` means it found no move.
    pub fn engine_reply(
        &mut self,
        engine: &mut dyn Engine,
        depth: u8,
    ) -> Result<Option<PlayedMove>, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        let result = engine.search(&self.board, self.to_move, SearchLimits::depth(depth));
        debug!(
            engine = engine.name(),
            depth = result.depth,
            nodes = result.nodes,
            score = result.score,
            "engine reply"
        );
        match result.best_move {
            Some(mv) => self.play_move(&mv).map(Some),
            None => Ok(None),
        }
    }

    /// Ranked moves for the side on turn, best first.
    pub fn hints(&self, depth: u8) -> Vec<Recommendation> {
        if self.is_over() {
            return Vec::new();
        }
        ranked_moves(&self.board, self.to_move, depth)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn apply(&mut self, mv: Move) -> PlayedMove {
        let was_king = self.board.get(mv.from).is_some_and(|pc| pc.is_king());
        self.board = self.board.apply_move(&mv);
        let promoted = !was_king && self.board.get(mv.to).is_some_and(|pc| pc.is_king());

        let played = PlayedMove {
            player: self.to_move,
            mv,
            promoted,
        };
        debug!(player = %played.player, mv = %played.mv, promoted, "move played");
        self.history.push(played.clone());
        self.to_move = self.to_move.other();
        played
    }
}

/// The board with row and column numbers, as shown to the player.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   0 1 2 3 4 5 6 7\n");
    for (row, line) in board.to_string().lines().enumerate() {
        out.push_str(&format!("{row} "));
        for ch in line.chars() {
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
