use crate::{board::Board, types::*};

/// Legal moves for `player`, returning a freshly allocated vector.
///
/// Captures are mandatory: if any of the player's pieces can capture, only
/// capturing moves are returned.
pub fn moves_for_player(board: &Board, player: Player) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    moves_for_player_into(board, player, &mut out);
    out
}

/// Legal moves for `player` into the provided buffer, reusing it across calls.
pub fn moves_for_player_into(board: &Board, player: Player, out: &mut Vec<Move>) {
    out.clear();
    for (from, piece) in board.pieces() {
        if piece.player == player {
            piece_moves(board, from, piece, out);
        }
    }

    if out.iter().any(Move::is_capture) {
        out.retain(Move::is_capture);
    }
}

/// Legal moves for the piece on `from`, ignoring what the rest of its side
/// could capture. An empty square yields no moves.
pub fn moves_for_piece(board: &Board, from: Position) -> Vec<Move> {
    let mut out = Vec::new();
    if let Some(piece) = board.get(from) {
        piece_moves(board, from, piece, &mut out);
    }
    out
}

/// Appends the moves of one piece. A piece that can capture is not offered
/// its quiet moves.
fn piece_moves(board: &Board, from: Position, piece: Piece, out: &mut Vec<Move>) {
    let start = out.len();

    if piece.is_king() {
        for dir in KING_DIRECTIONS {
            gen_king_captures(board, from, from, dir, piece, &[], out);
        }
    } else {
        let mut chain = Chain::default();
        gen_man_captures(board, from, from, piece, &mut chain, out);
    }

    if out.len() > start {
        return;
    }

    for &dir in piece.directions() {
        if piece.is_king() {
            gen_king_slides(board, from, dir, out);
        } else if let Some(to) = from.offset(dir, 1) {
            if board.is_empty(to) {
                out.push(Move::new(from, to));
            }
        }
    }
}

fn gen_king_slides(board: &Board, from: Position, dir: (i8, i8), out: &mut Vec<Move>) {
    let mut step = 1;
    while let Some(to) = from.offset(dir, step) {
        if !board.is_empty(to) {
            break;
        }
        out.push(Move::new(from, to));
        step += 1;
    }
}

/// Squares taken and squares jumped from in the chain being explored.
/// Pushed before descending and popped on return, so sibling branches never
/// see each other's captures.
#[derive(Default)]
struct Chain {
    captured: Vec<Position>,
    visited: Vec<Position>,
}

/// Man capture chains from `at`, restricted to the man's forward diagonals.
///
/// The board is never modified: the man still reads as standing on its
/// origin and the captured pieces stay in place, excluded by `chain`.
/// Every prefix of a chain is emitted as its own move. Depth is bounded by
/// the number of opposing pieces since each level captures a new one.
fn gen_man_captures(
    board: &Board,
    origin: Position,
    at: Position,
    piece: Piece,
    chain: &mut Chain,
    out: &mut Vec<Move>,
) {
    for &dir in piece.directions() {
        let (Some(over), Some(land)) = (at.offset(dir, 1), at.offset(dir, 2)) else {
            continue;
        };
        let is_enemy = matches!(board.get(over), Some(pc) if pc.player != piece.player);
        if !is_enemy
            || !board.is_empty(land)
            || chain.captured.contains(&over)
            || chain.visited.contains(&land)
        {
            continue;
        }

        chain.captured.push(over);
        chain.visited.push(at);
        out.push(Move::capture(origin, land, chain.captured.clone()));
        gen_man_captures(board, origin, land, piece, chain, out);
        chain.captured.pop();
        chain.visited.pop();
    }
}

/// King capture chains starting with a scan from `at` along `dir`.
///
/// The first occupied square decides the direction: an uncaptured enemy
/// with an empty square right behind it is taken, anything else blocks.
/// Follow-up captures are searched in all four directions on a snapshot with
/// the king lifted off `at` and every captured piece removed.
fn gen_king_captures(
    board: &Board,
    origin: Position,
    at: Position,
    dir: (i8, i8),
    piece: Piece,
    captured: &[Position],
    out: &mut Vec<Move>,
) {
    let mut step = 1;
    let (over, victim) = loop {
        let Some(sq) = at.offset(dir, step) else {
            return;
        };
        match board.get(sq) {
            None => step += 1,
            Some(pc) => break (sq, pc),
        }
    };

    if victim.player == piece.player || captured.contains(&over) {
        return;
    }
    let Some(land) = over.offset(dir, 1) else {
        return;
    };
    if !board.is_empty(land) {
        return;
    }

    let mut chain = captured.to_vec();
    chain.push(over);
    out.push(Move::capture(origin, land, chain.clone()));

    let mut next = *board;
    for &cap in &chain {
        next.set(cap, None);
    }
    next.set(at, None);
    next.set(land, Some(piece));

    for next_dir in KING_DIRECTIONS {
        gen_king_captures(&next, origin, land, next_dir, piece, &chain, out);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
