//! Match Runner for checkers engines
//!
//! This crate provides infrastructure for:
//! - Playing games between two engines with alternating colours
//! - Configuring matches from TOML files
//! - Saving per-game records and totals as JSON reports
//!
//! # Usage
//!
//! ```bash
//! # Minimax against the random baseline
//! cargo run -p match_runner -- match minimax random --games 20 --depth 4
//!
//! # Settings from a file, report written next to it
//! cargo run -p match_runner -- match minimax minimax --config match.toml --out report.json
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
