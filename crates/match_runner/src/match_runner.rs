//! Match runner for playing games between engines

use std::path::{Path, PathBuf};

use checkers_core::{moves_for_player, outcome_with_moves, Board, Engine, Player, SearchLimits};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::results::{GameRecord, GameResult, MatchReport, MatchResult, Termination};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Parses TOML; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    fn search_limits(&self) -> SearchLimits {
        SearchLimits::depth(self.depth)
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Totals in the report are from engine1's perspective. Black moves
    /// first; engine1 takes black in odd-numbered games when colours
    /// alternate, and every game otherwise.
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchReport {
        let mut report = MatchReport::new(engine1.name(), engine2.name(), self.config.clone());

        for game_num in 0..self.config.num_games {
            let engine1_first = !self.config.alternate_colors || game_num % 2 == 0;

            let (engine1_color, mut record) = if engine1_first {
                (Player::Black, self.play_game(engine1, engine2))
            } else {
                (Player::Red, self.play_game(engine2, engine1))
            };
            record.game = game_num + 1;
            record.engine1_color = engine1_color;

            info!(
                game = record.game,
                engine1 = %engine1_color,
                winner = ?record.winner,
                plies = record.plies,
                termination = ?record.termination,
                "game finished"
            );
            let game_result = record.engine1_result();
            report.add_game(record);

            if self.config.verbose {
                let color = if engine1_first { "B" } else { "R" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    report.result.wins,
                    report.result.losses,
                    report.result.draws
                );
            }
        }

        report
    }

    /// Play a single game from the starting layout, black to move
    pub fn play_game(&self, black: &mut dyn Engine, red: &mut dyn Engine) -> GameRecord {
        black.new_game();
        red.new_game();
        self.play_from(Board::initial(), Player::Black, black, red)
    }

    /// Play out `board` with `to_move` on turn until the rules decide the
    /// game, an engine forfeits, or the ply limit runs out.
    ///
    /// The returned record's `engine1_color` is black and `game` is 0; the
    /// caller fills them in.
    pub fn play_from(
        &self,
        mut board: Board,
        mut to_move: Player,
        black: &mut dyn Engine,
        red: &mut dyn Engine,
    ) -> GameRecord {
        let finish = |winner, plies, termination| GameRecord {
            game: 0,
            engine1_color: Player::Black,
            winner,
            plies,
            termination,
        };

        let mut plies = 0;
        loop {
            let legal = moves_for_player(&board, to_move);
            let status = outcome_with_moves(&board, to_move, &legal);
            if status.over {
                return finish(status.winner, plies, Termination::Decided);
            }
            if plies >= self.config.max_moves {
                return finish(None, plies, Termination::MoveLimit);
            }

            let limits = self.config.search_limits();
            let result = match to_move {
                Player::Black => black.search(&board, to_move, limits),
                Player::Red => red.search(&board, to_move, limits),
            };

            match result.best_move {
                Some(mv) if legal.contains(&mv) => {
                    board = board.apply_move(&mv);
                }
                other => {
                    let name = match to_move {
                        Player::Black => black.name(),
                        Player::Red => red.name(),
                    };
                    warn!(
                        engine = name,
                        player = %to_move,
                        mv = ?other,
                        "engine failed to return a legal move, forfeiting"
                    );
                    return finish(Some(to_move.other()), plies, Termination::Forfeit);
                }
            }

            to_move = to_move.other();
            plies += 1;
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2).result
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
