//! Match results storage and reporting

use std::path::Path;

use checkers_core::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::match_runner::MatchConfig;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to access report file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode or decode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a single game for one engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The rules decided it: a side had no pieces or no legal move
    Decided,
    /// An engine returned no move or an illegal one while moves existed
    Forfeit,
    /// The ply limit ran out
    MoveLimit,
}

/// One finished game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    /// 1-based game number within the match
    pub game: u32,
    /// Colour engine1 played
    pub engine1_color: Player,
    pub winner: Option<Player>,
    /// Plies actually played
    pub plies: u32,
    pub termination: Termination,
}

impl GameRecord {
    /// Result from engine1's perspective
    pub fn engine1_result(&self) -> GameResult {
        match self.winner {
            None => GameResult::Draw,
            Some(p) if p == self.engine1_color => GameResult::Win,
            Some(_) => GameResult::Loss,
        }
    }
}

/// Everything a match produced, as written to disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub config: MatchConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    pub fn new(engine1: &str, engine2: &str, config: MatchConfig) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            config,
            result: MatchResult::new(),
            games: Vec::new(),
        }
    }

    /// Add a finished game and count it toward the totals
    pub fn add_game(&mut self, record: GameRecord) {
        self.result.record(record.engine1_result());
        self.games.push(record);
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load report from JSON file
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            self.engine1, self.engine2
        ));
        report.push_str(&format!(
            "Config: {} games, depth {}, {} plies max\n\n",
            self.config.num_games, self.config.depth, self.config.max_moves
        ));

        report.push_str(&format!(
            "{:<6} {:<8} {:<8} {:>6} {:<12}\n",
            "Game", "Engine1", "Winner", "Plies", "End"
        ));
        report.push_str(&"-".repeat(44));
        report.push('\n');

        for game in &self.games {
            let winner = game.winner.map_or("-".to_string(), |p| p.to_string());
            let end = match game.termination {
                Termination::Decided => "decided",
                Termination::Forfeit => "forfeit",
                Termination::MoveLimit => "move limit",
            };
            report.push_str(&format!(
                "{:<6} {:<8} {:<8} {:>6} {:<12}\n",
                game.game, game.engine1_color, winner, game.plies, end
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
