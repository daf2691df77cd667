//! Turning raw input lines into commands. Nothing malformed gets past this
//! layer: a move only reaches the engine once both squares have parsed.

use std::path::PathBuf;

use thiserror::Error;

use crate::game::core::{Move, ParseSquareError, Square};
use crate::storage::saves;

/// Everything a player can type at the in-game prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `:menu` — abandon the match and return to the main menu.
    Menu,
    /// `:exit` — quit the application.
    Exit,
    /// `:help` — print rules and command reference.
    Help,
    /// `:moves` — list the legal moves of the side to move.
    Moves,
    /// `:scores` — show the scoreboard.
    Scores,
    /// `:save [file]` — save the game (default `save.json`).
    Save(PathBuf),
    /// `:load [file]` — load a game (default `save.json`).
    Load(PathBuf),
    /// Two algebraic squares, e.g. `a2 a3`.
    Move(Move),
}

/// Why an input line was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    /// A token starting with ':' that is not a known command.
    #[error("unknown command \"{0}\"; type :help for the list")]
    UnknownCommand(String),
    /// A move needs exactly two tokens.
    #[error("a move is two squares separated by a space (e.g. \"a2 a3\"), got {0} token(s)")]
    TokenCount(usize),
    /// A move token that is not a square.
    #[error("\"{token}\" is not a square: {source}")]
    BadSquare {
        #[allow(missing_docs)]
        token: String,
        #[allow(missing_docs)]
        source: ParseSquareError,
    },
}

/// Parses one line of player input. Commands are case-insensitive; anything
/// not starting with ':' is treated as a move.
///
/// # Errors
///
/// [`ParseCommandError`] describing what went wrong; the caller re-prompts.
pub fn parse(line: &str) -> Result<Command, ParseCommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if let Some(first) = tokens.first().filter(|t| t.starts_with(':')) {
        return match first.to_lowercase().as_str() {
            ":menu" => Ok(Command::Menu),
            ":exit" => Ok(Command::Exit),
            ":help" => Ok(Command::Help),
            ":moves" => Ok(Command::Moves),
            ":scores" => Ok(Command::Scores),
            ":save" => Ok(Command::Save(optional_path(&tokens, saves::DEFAULT_SAVE_FILE))),
            ":load" => Ok(Command::Load(optional_path(&tokens, saves::DEFAULT_SAVE_FILE))),
            _ => Err(ParseCommandError::UnknownCommand((*first).to_owned())),
        };
    }
    if tokens.len() != 2 {
        return Err(ParseCommandError::TokenCount(tokens.len()));
    }
    let from = parse_square(tokens[0])?;
    let to = parse_square(tokens[1])?;
    Ok(Command::Move(Move::new(from, to)))
}

fn parse_square(token: &str) -> Result<Square, ParseCommandError> {
    Square::try_from(token).map_err(|source| ParseCommandError::BadSquare {
        token: token.to_owned(),
        source,
    })
}

fn optional_path(tokens: &[&str], default: &str) -> PathBuf {
    tokens.get(1).map_or_else(|| PathBuf::from(default), PathBuf::from)
}
