//! Console front-end: the main menu and the interactive game loop. This is
//! the only place where the engine, the input parser and the storage
//! collaborators meet.

pub mod input;
pub mod render;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use tracing::{info, warn};

use crate::game::{Game, Player, Side, StandardRules};
use crate::storage::scores::{self, ScoreEntry, DEFAULT_KEEP_TOP, DEFAULT_SCORES_FILE};
use crate::storage::saves;
use crate::ui::input::Command;

/// How many moves the `:moves` listing prints before truncating.
const MOVES_LISTING_CAP: usize = 30;

/// What a finished game loop asks the caller to do next.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    BackToMenu,
    Quit,
}

/// Runs the main menu until the player quits or input ends.
///
/// # Errors
///
/// Only unrecoverable terminal I/O failures; rejected input re-prompts.
pub fn run() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();
    loop {
        println!();
        println!("=== Breakthrough ===");
        println!("1) New game");
        println!("2) How to play");
        println!("3) Scores");
        println!("0) Quit");
        prompt()?;

        let Some(choice) = read_line(&mut lines)? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                if start_new_game(&mut lines)? == Outcome::Quit {
                    return Ok(());
                }
            }
            "2" => println!("\n{}", render::HELP),
            "3" => show_scores(Path::new(DEFAULT_SCORES_FILE)),
            "0" | ":exit" => return Ok(()),
            _ => println!("Pick one of the numbers above."),
        }
    }
}

fn start_new_game(lines: &mut impl BufRead) -> anyhow::Result<Outcome> {
    println!("Name of the White player (bottom, moves up): ");
    prompt()?;
    let Some(white_name) = read_line(lines)? else {
        return Ok(Outcome::Quit);
    };
    println!("Name of the Black player (top, moves down): ");
    prompt()?;
    let Some(black_name) = read_line(lines)? else {
        return Ok(Outcome::Quit);
    };

    let game = Game::new(
        Player::new(&white_name, Side::White),
        Player::new(&black_name, Side::Black),
        Box::new(StandardRules),
    );
    info!(
        white = game.player(Side::White).name(),
        black = game.player(Side::Black).name(),
        "new game"
    );
    run_game_loop(game, lines)
}

fn run_game_loop(mut game: Game, lines: &mut impl BufRead) -> anyhow::Result<Outcome> {
    loop {
        println!("\n{}", render::render(&game));
        prompt()?;
        let Some(line) = read_line(lines)? else {
            return Ok(Outcome::Quit);
        };
        if line.is_empty() {
            continue;
        }

        let command = match input::parse(&line) {
            Ok(command) => command,
            Err(reason) => {
                println!("{reason}");
                continue;
            }
        };
        match command {
            Command::Exit => return Ok(Outcome::Quit),
            Command::Menu => return Ok(Outcome::BackToMenu),
            Command::Help => println!("\n{}", render::HELP),
            Command::Scores => show_scores(Path::new(DEFAULT_SCORES_FILE)),
            Command::Moves => list_moves(&game),
            Command::Save(path) => match saves::save(&path, &game.snapshot()) {
                Ok(()) => println!("Saved to {}", path.display()),
                Err(error) => {
                    warn!(%error, "save failed");
                    println!("Could not save: {error:#}");
                }
            },
            Command::Load(path) => {
                match load_game(&path) {
                    Ok(loaded) => {
                        game = loaded;
                        println!("Loaded from {}", path.display());
                    }
                    Err(error) => {
                        warn!(%error, "load failed");
                        println!("Could not load: {error:#}");
                    }
                }
            }
            Command::Move(m) => match game.try_apply_move(m) {
                Err(reason) => println!("{reason}"),
                Ok(None) => {}
                Ok(Some(winner)) => {
                    announce_winner(&game, winner);
                    return Ok(Outcome::BackToMenu);
                }
            },
        }
    }
}

fn load_game(path: &Path) -> anyhow::Result<Game> {
    let snapshot = saves::load(path)?;
    Game::from_snapshot(&snapshot, Box::new(StandardRules))
        .with_context(|| format!("restoring game from {}", path.display()))
}

fn list_moves(game: &Game) {
    let moves = game.legal_moves(game.turn());
    println!("\nLegal moves: {}", moves.len());
    for m in moves.iter().take(MOVES_LISTING_CAP) {
        println!("{} -> {}", m.from, m.to);
    }
    if moves.len() > MOVES_LISTING_CAP {
        println!("... (first {MOVES_LISTING_CAP} shown)");
    }
}

fn announce_winner(game: &Game, winner: Side) {
    println!("\n{}", render::render(game));
    let winner_name = game.player(winner).name();
    let loser_name = game.player(winner.opponent()).name();
    println!("{winner_name} ({winner}) wins in {} plies!", game.ply_count());
    info!(winner = winner_name, plies = game.ply_count(), "game over");

    let entry = ScoreEntry {
        winner_name: winner_name.to_owned(),
        winner_side: winner,
        loser_name: loser_name.to_owned(),
        ply_count: game.ply_count(),
        finished_at: Utc::now(),
    };
    match scores::add_result(Path::new(DEFAULT_SCORES_FILE), entry, DEFAULT_KEEP_TOP) {
        Ok(()) => println!("Result recorded in {DEFAULT_SCORES_FILE}."),
        Err(error) => {
            warn!(%error, "recording score failed");
            println!("Could not record the result: {error:#}");
        }
    }
}

fn show_scores(path: &Path) {
    let board = match scores::load(path) {
        Ok(board) => board,
        Err(error) => {
            warn!(%error, "loading scores failed");
            println!("Could not read the scoreboard: {error:#}");
            return;
        }
    };
    if board.entries().is_empty() {
        println!("No scores yet.");
        return;
    }
    println!("=== Scores (fewer plies rank higher) ===");
    for (i, e) in board.entries().iter().enumerate().take(10) {
        println!(
            "{:2}. {} ({}) beat {} | plies: {} | {} UTC",
            i + 1,
            e.winner_name,
            e.winner_side,
            e.loser_name,
            e.ply_count,
            e.finished_at.format("%Y-%m-%d %H:%M")
        );
    }
}

fn prompt() -> anyhow::Result<()> {
    print!("> ");
    io::stdout().flush().context("flushing the prompt")
}

fn read_line(lines: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let read = lines.read_line(&mut line).context("reading input")?;
    if read == 0 {
        // EOF: the caller treats this as a request to quit.
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}
