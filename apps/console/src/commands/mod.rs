//! Console commands.

pub mod game;
pub mod settings;

use crate::state::AppState;
use quiz_core::{ArithmeticLevel, GameKind, SessionEvent};
use serde::Serialize;
use std::fmt;

/// Error surfaced to the player as a single line.
#[derive(Debug, Serialize)]
pub struct CommandError {
    pub message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<crate::db::DbError> for CommandError {
    fn from(e: crate::db::DbError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<quiz_core::QuizError> for CommandError {
    fn from(e: quiz_core::QuizError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(e: serde_json::Error) -> Self {
        Self { message: e.to_string() }
    }
}

/// A parsed input line. Positions typed by the player are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(GameKind),
    Pick(usize),
    Drop { letter: usize, slot: usize },
    Tap(usize),
    Remove(usize),
    Ok,
    Speak,
    Back,
    Stars,
    Level(ArithmeticLevel),
    Auto(bool),
    Snapshot,
    Help,
    Quit,
}

fn position(arg: Option<&str>, what: &str) -> Result<usize, CommandError> {
    arg.and_then(|s| s.parse::<usize>().ok())
        .filter(|n| *n > 0)
        .ok_or_else(|| CommandError::new(format!("expected a {} number", what)))
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let name = words
            .next()
            .ok_or_else(|| CommandError::new("empty command"))?
            .to_lowercase();
        let arg = words.next();

        let command = match name.as_str() {
            "play" => {
                let game = arg.ok_or_else(|| CommandError::new("which game?"))?;
                Self::Play(
                    GameKind::from_str(game)
                        .ok_or_else(|| CommandError::new(format!("unknown game '{}'", game)))?,
                )
            }
            "pick" => Self::Pick(position(arg, "option")?),
            "drop" => Self::Drop {
                letter: position(arg, "letter")?,
                slot: position(words.next(), "slot")?,
            },
            "tap" => Self::Tap(position(arg, "letter")?),
            "remove" => Self::Remove(position(arg, "slot")?),
            "ok" => Self::Ok,
            "speak" => Self::Speak,
            "back" => Self::Back,
            "stars" => Self::Stars,
            "level" => {
                let max = arg.and_then(|s| s.parse::<u32>().ok()).unwrap_or(0);
                Self::Level(
                    ArithmeticLevel::from_max(max)
                        .ok_or_else(|| CommandError::new("level must be 10 or 20"))?,
                )
            }
            "auto" => match arg {
                Some("on") => Self::Auto(true),
                Some("off") => Self::Auto(false),
                _ => return Err(CommandError::new("auto takes on or off")),
            },
            "snapshot" => Self::Snapshot,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::new(format!("unknown command '{}'", other))),
        };
        Ok(command)
    }
}

/// What a command produced.
#[derive(Debug)]
pub enum Reply {
    /// The game changed; redraw it.
    Events(Vec<SessionEvent>),
    Text(String),
    /// Left the game; back to the menu.
    Menu,
    Quit,
}

pub fn execute(state: &mut AppState, command: Command) -> Result<Reply, CommandError> {
    tracing::debug!(?command, "execute");
    match command {
        Command::Play(kind) => game::enter_game(state, kind).map(Reply::Events),
        Command::Pick(n) => game::pick_option(state, n - 1).map(Reply::Events),
        Command::Drop { letter, slot } => {
            game::drop_letter(state, letter - 1, slot - 1).map(Reply::Events)
        }
        Command::Tap(letter) => game::tap_letter(state, letter - 1).map(Reply::Events),
        Command::Remove(slot) => game::remove_letter(state, slot - 1).map(Reply::Events),
        Command::Ok => game::acknowledge(state).map(Reply::Events),
        Command::Speak => game::speak(state).map(|_| Reply::Events(Vec::new())),
        Command::Back => {
            game::exit_game(state);
            Ok(Reply::Menu)
        }
        Command::Stars => settings::get_stars(state).map(|n| Reply::Text(format!("⭐ x {}", n))),
        Command::Level(level) => settings::set_arithmetic_level(state, level)
            .map(|_| Reply::Text(format!("math up to {}", level.max_value()))),
        Command::Auto(on) => settings::set_auto_dismiss(state, on)
            .map(|_| Reply::Text(format!("auto dismiss {}", if on { "on" } else { "off" }))),
        Command::Snapshot => game::snapshot(state).map(Reply::Text),
        Command::Help => Ok(Reply::Text(crate::view::help())),
        Command::Quit => Ok(Reply::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_game_commands() {
        assert_eq!(Command::parse("play math").unwrap(), Command::Play(GameKind::Math));
        assert_eq!(Command::parse("  PICK 2 ").unwrap(), Command::Pick(2));
        assert_eq!(
            Command::parse("drop 3 1").unwrap(),
            Command::Drop { letter: 3, slot: 1 }
        );
        assert_eq!(
            Command::parse("level 20").unwrap(),
            Command::Level(ArithmeticLevel::UpToTwenty)
        );
        assert_eq!(Command::parse("auto off").unwrap(), Command::Auto(false));
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("play chess").is_err());
        assert!(Command::parse("pick 0").is_err());
        assert!(Command::parse("pick two").is_err());
        assert!(Command::parse("drop 1").is_err());
        assert!(Command::parse("level 15").is_err());
        assert!(Command::parse("dance").is_err());
    }
}
