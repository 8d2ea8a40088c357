//! Interactive checkers against the minimax engine, driven from stdin.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use checkers_core::{Engine, Player, Position};
use checkers_play::{render_board, Game, PlayConfig, PlayedMove};
use minimax_engine::MinimaxEngine;
use tracing_subscriber::EnvFilter;

const HINTS_SHOWN: usize = 3;

fn print_help() {
    println!("Commands:");
    println!("  show              print the board");
    println!("  moves             list your legal moves");
    println!("  hint [json]       rank your moves");
    println!("  move r,c r,c      move a piece (the word 'move' is optional)");
    println!("  new               start over");
    println!("  quit              leave");
}

fn parse_args() -> Result<PlayConfig> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = PlayConfig::default();
    let mut depth = None;
    let mut human = None;

    let mut i = 0;
    while i < args.len() {
        let value = || {
            args.get(i + 1)
                .with_context(|| format!("{} requires a value", args[i]))
        };
        match args[i].as_str() {
            "--config" | "-c" => {
                let path = value()?;
                config = PlayConfig::load(Path::new(path))
                    .with_context(|| format!("failed to load play config from {path}"))?;
            }
            "--depth" | "-d" => {
                let raw = value()?;
                depth = Some(raw.parse::<u8>().with_context(|| format!("invalid depth '{raw}'"))?);
            }
            "--human" => {
                human = Some(value()?.parse::<Player>()?);
            }
            other => bail!("Unknown option: {other}"),
        }
        i += 2;
    }

    if let Some(depth) = depth {
        config.engine_depth = depth;
    }
    if let Some(human) = human {
        config.human = human;
    }
    Ok(config)
}

fn report(played: &PlayedMove, who: &str) {
    print!("{who} ({}) played {}", played.player, played.mv);
    if played.promoted {
        print!(", crowned");
    }
    println!();
}

/// Prints the result and returns true once the game has ended.
fn announce_if_over(game: &Game) -> bool {
    let status = game.outcome();
    if let (true, Some(winner)) = (status.over, status.winner) {
        println!("Game over: {winner} wins.");
        return true;
    }
    false
}

/// Engine moves until the human is on turn or the game ends.
fn engine_turns(game: &mut Game, engine: &mut MinimaxEngine, config: &PlayConfig) -> Result<()> {
    while game.to_move() == config.engine_player() && !game.is_over() {
        match game.engine_reply(engine, config.engine_depth)? {
            Some(played) => report(&played, "Engine"),
            None => break,
        }
    }
    Ok(())
}

fn prompt(game: &Game, config: &PlayConfig) {
    if game.is_over() {
        return;
    }
    println!();
    print!("{}", render_board(game.board()));
    if game.must_capture() {
        println!("You must capture.");
    }
    if config.show_hints {
        for (idx, rec) in game.hints(config.hint_depth).iter().take(HINTS_SHOWN).enumerate() {
            println!("  hint {}: {} ({:+.2})", idx + 1, rec.mv, rec.score);
        }
    }
    print!("{} to move> ", game.to_move());
    io::stdout().flush().ok();
}

fn parse_squares(parts: &[&str]) -> Result<(Position, Position)> {
    let [from, to] = parts else {
        bail!("expected two squares, e.g. 'move 5,0 4,1'");
    };
    Ok((from.parse()?, to.parse()?))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = parse_args()?;
    let mut engine = MinimaxEngine::new();
    let mut game = Game::new();

    println!(
        "You play {}. Black moves first. Type 'help' for commands.",
        config.human
    );
    engine_turns(&mut game, &mut engine, &config)?;
    announce_if_over(&game);
    prompt(&game, &config);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            prompt(&game, &config);
            continue;
        }

        match parts[0] {
            "quit" | "exit" => break,
            "help" => print_help(),
            "show" => print!("{}", render_board(game.board())),
            "moves" => {
                for mv in game.legal_moves() {
                    println!("  {mv}");
                }
            }
            "hint" => {
                let hints = game.hints(config.hint_depth);
                if parts.get(1) == Some(&"json") {
                    println!("{}", serde_json::to_string_pretty(&hints)?);
                } else {
                    for rec in &hints {
                        println!("  {} ({:+.2})", rec.mv, rec.score);
                    }
                }
            }
            "new" => {
                game.reset();
                engine.new_game();
                engine_turns(&mut game, &mut engine, &config)?;
            }
            cmd => {
                let squares = if cmd == "move" { &parts[1..] } else { &parts[..] };
                match parse_squares(squares) {
                    Ok((from, to)) => match game.play(from, to) {
                        Ok(played) => {
                            report(&played, "You");
                            engine_turns(&mut game, &mut engine, &config)?;
                        }
                        Err(e) => println!("{e}"),
                    },
                    Err(e) => println!("{e}"),
                }
            }
        }

        if announce_if_over(&game) {
            println!("Type 'new' to play again or 'quit' to leave.");
        }
        prompt(&game, &config);
    }

    Ok(())
}
