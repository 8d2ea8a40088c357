//! Match CLI
//!
//! Play checkers engines against each other and save the results.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use checkers_core::Engine;
use match_runner::{MatchConfig, MatchRunner};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Checkers Match Runner");
    println!();
    println!("Usage:");
    println!("  checkers_match match <engine1> <engine2> [--games N] [--depth D]");
    println!("                 [--max-moves M] [--config FILE] [--out FILE]");
    println!();
    println!("Engines:");
    println!("  minimax       - Alpha-beta with material and advancement eval");
    println!("  random        - Uniformly random legal moves");
    println!();
    println!("Examples:");
    println!("  checkers_match match minimax random --games 20 --depth 4");
    println!("  checkers_match match minimax minimax --config match.toml --out report.json");
}

fn create_engine(spec: &str) -> Result<Box<dyn Engine>> {
    match spec.to_lowercase().as_str() {
        "minimax" | "mm" => Ok(Box::new(MinimaxEngine::new())),
        "random" | "rand" => Ok(Box::new(RandomEngine::new())),
        _ => bail!("Unknown engine: {spec}"),
    }
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{flag} requires a value"))
}

fn run_match(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine names");
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    // File values first, flags override them
    let mut config = MatchConfig::default();
    let mut games = None;
    let mut depth = None;
    let mut max_moves = None;
    let mut out: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--games" | "-g" => {
                let value = flag_value(args, i, flag)?;
                games = Some(value.parse().with_context(|| format!("invalid game count '{value}'"))?);
                i += 1;
            }
            "--depth" | "-d" => {
                let value = flag_value(args, i, flag)?;
                depth = Some(value.parse().with_context(|| format!("invalid depth '{value}'"))?);
                i += 1;
            }
            "--max-moves" | "-m" => {
                let value = flag_value(args, i, flag)?;
                max_moves = Some(value.parse().with_context(|| format!("invalid ply limit '{value}'"))?);
                i += 1;
            }
            "--config" | "-c" => {
                let path = flag_value(args, i, flag)?;
                config = MatchConfig::load(Path::new(path))
                    .with_context(|| format!("failed to load match config from {path}"))?;
                i += 1;
            }
            "--out" | "-o" => {
                out = Some(PathBuf::from(flag_value(args, i, flag)?));
                i += 1;
            }
            other => bail!("Unknown option: {other}"),
        }
        i += 1;
    }

    if let Some(games) = games {
        config.num_games = games;
    }
    if let Some(depth) = depth {
        config.depth = depth;
    }
    if let Some(max_moves) = max_moves {
        config.max_moves = max_moves;
    }

    let mut engine1 = create_engine(engine1_spec)?;
    let mut engine2 = create_engine(engine2_spec)?;

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Depth: {}, Max plies: {}",
        config.num_games, config.depth, config.max_moves
    );
    println!();

    let runner = MatchRunner::new(config);
    let report = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, report.result.wins, report.result.losses, report.result.draws
    );
    println!("Score: {:.1}%", report.result.score() * 100.0);

    if let Some(path) = out {
        report
            .save(&path)
            .with_context(|| format!("failed to save report to {}", path.display()))?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("Unknown command: {other}")
        }
    }
}
