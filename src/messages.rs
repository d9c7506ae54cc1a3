//! This module holds everything the game says to the player that is not a prompt: the error types
//! shown when input is rejected or the word list cannot be used, and the lines printed around each
//! turn and at the end of a game.

use std::io;
use std::path::PathBuf;

use console::style;

use crate::game::{GameState, Round};

/// The reasons a guess can be turned down. None of them is fatal; the prompt simply asks again.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InvalidGuess {
    /// The letter is already part of the guessed set.
    #[error("{} has already been guessed", style(.0).bold().underlined())]
    AlreadyGuessed(char),
    /// Nothing but whitespace was entered.
    #[error("{}", style("a letter is required").bold().underlined())]
    Empty,
    /// The input holds something other than letters.
    #[error("{} is not made up of letters only", style(.0).bold().underlined())]
    NotAlphabetic(String),
    /// The input is a run of letters, but not a single one and not the whole-word command.
    #[error("{} is more than a single letter", style(.0).bold().underlined())]
    NotSingleLetter(String),
}

/// The reasons no word could be picked from a word list file. Either one stops the game before it
/// starts, unless the secret word was given explicitly.
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    /// The file holds no usable word.
    #[error("the word list at {} holds no usable word", style(.path.display()).bold())]
    Empty {
        /// The path of the word list.
        path: PathBuf,
    },
    /// The file could not be read.
    #[error("the word list at {} could not be read", style(.path.display()).bold())]
    Unreadable {
        /// The path of the word list.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
}

/// Returns the line shown once the game is over, or `None` while it is still being played.
pub(crate) fn conclusion(state: GameState, secret: &str) -> Option<String> {
    match state {
        GameState::Active => None,
        GameState::Lost => Some(defeat_message(secret)),
        GameState::Won => Some(victory_message()),
    }
}

/// Returns the line shown when the player runs out of turns, which reveals the secret word.
pub(crate) fn defeat_message(secret: &str) -> String {
    format!(
        "{}\nThe word was: {}",
        style("You lose :(").red().bold(),
        style(secret).bold().underlined()
    )
}

/// Returns the lines printed before every prompt: the turn separator, the masked word and, once
/// there are any, the letters guessed so far.
pub(crate) fn round_lines(round: &Round<'_>) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        turn_banner(round.turns_remaining),
        String::new(),
        format!("{}", style(&round.masked).bold()),
    ];

    if !round.guessed.is_empty() {
        lines.push(format!("Guessed so far: {}", style(round.guessed).dim()));
    }

    lines.push(String::new());
    lines
}

/// Returns the separator printed at the start of every turn, together with the turns left.
pub(crate) fn turn_banner(turns_remaining: u32) -> String {
    format!(
        "{}\nTurns left: {}",
        style("<---------------------------- New turn ---------------------------->").dim(),
        style(turns_remaining).bold()
    )
}

/// Returns the line shown when the word is guessed.
pub(crate) fn victory_message() -> String {
    format!(
        "{}",
        style("Congratulations, you guessed the word!").green().bold()
    )
}
