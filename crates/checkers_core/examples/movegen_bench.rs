//! Move generation benchmark for profiling with cargo-flamegraph.
//!
//! Runs many iterations of moves_for_player_into on positions from every
//! game phase, including long king capture chains.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p checkers_core

use checkers_core::{Board, Player, moves_for_player_into};
use std::time::Instant;

/// Positions covering different game phases and complexity levels
const TEST_POSITIONS: &[(&str, &str, Player)] = &[
    (
        "Start",
        ".r.r.r.r/r.r.r.r./......../......../......../......../.b.b.b.b/b.b.b.b.",
        Player::Black,
    ),
    (
        "Sparse men",
        "......../..r.r.../.r...r../......../...b..../..b.b.b./......../........",
        Player::Black,
    ),
    (
        "Forced capture",
        "......../......../...r..../..b.b.../......../..b...../......../........",
        Player::Red,
    ),
    (
        "Man chain",
        ".r....../..b...../......../....b.../......../......../......../........",
        Player::Red,
    ),
    (
        "Kings",
        ".R....../......../...b..../......../.....b../......../.b...B../........",
        Player::Red,
    ),
    (
        "King open board",
        "......../......../......../...R..../......../......../......../........",
        Player::Red,
    ),
];

const ITERATIONS: usize = 100_000;

fn main() {
    println!("=== Move Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut move_buf = Vec::with_capacity(64);
    let mut total_moves = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for (name, diagram, player) in TEST_POSITIONS {
        let board = match Board::from_diagram(diagram) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        print!("{name:.<20}");

        let start = Instant::now();
        let mut moves_generated = 0usize;

        for _ in 0..ITERATIONS {
            moves_for_player_into(&board, *player, &mut move_buf);
            moves_generated += move_buf.len();
        }

        let elapsed = start.elapsed();
        total_moves += moves_generated;
        total_time += elapsed;

        let moves_per_pos = moves_generated as f64 / ITERATIONS as f64;
        let pps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {moves_per_pos:>5.1} moves/pos, {pps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    let avg_pps = if total_time.as_secs_f64() > 0.0 {
        (ITERATIONS * TEST_POSITIONS.len()) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_moves} moves in {total_time:.3?} ({avg_pps:.0} positions/sec)");
}
