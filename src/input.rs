//! This module contains all functions related to taking input from the player. They all use the
//! `dialoguer` crate to process the input.
//!
//! The checks themselves live in `validate()`, which knows nothing about terminals. The letter
//! prompt runs it on every line typed and asks again until it passes, so a bad letter never costs a
//! turn. The whole-word prompt takes any line as it is.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use tracing::debug;

use crate::game::{GameState, Move, Player, Round};
use crate::messages::{conclusion, round_lines, InvalidGuess};
use crate::word::{is_word, GuessedLetters};

/// The command that switches from guessing a letter to guessing the whole word.
pub const WHOLE_WORD_COMMAND: &str = "CHECK";

/// A guess that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guess {
    /// A single uppercase letter not guessed before.
    Letter(char),
    /// The whole-word command; the word itself is asked for next.
    WholeWord,
}

/// The player sitting at the terminal.
pub struct ConsolePlayer {
    /// The terminal every line is written to and read from.
    term: Term,
    /// The theme shared by every prompt.
    theme: ColorfulTheme,
}

impl ConsolePlayer {
    /// Creates a player that talks through the given terminal.
    #[must_use]
    pub fn new(term: Term) -> Self {
        Self {
            term,
            theme: ColorfulTheme::default(),
        }
    }
}

impl Player for ConsolePlayer {
    fn conclude(&mut self, state: GameState, secret: &str) -> Result<()> {
        if let Some(message) = conclusion(state, secret) {
            self.term.write_line("")?;
            self.term.write_line(&message)?;
        }

        Ok(())
    }

    fn next_move(&mut self, round: &Round<'_>) -> Result<Move> {
        for line in round_lines(round) {
            self.term.write_line(&line)?;
        }

        let guess = take_letter(&self.term, &self.theme, round.guessed)?;
        into_move(guess, || take_word(&self.term, &self.theme))
    }
}

/// Turns a validated guess into the move for the round. The whole word is only asked for when the
/// player entered the whole-word command.
fn into_move<F>(guess: Guess, take_word: F) -> Result<Move>
where
    F: FnOnce() -> Result<String>,
{
    match guess {
        Guess::Letter(letter) => Ok(Move::Letter(letter)),
        Guess::WholeWord => Ok(Move::Word(take_word()?)),
    }
}

/// This function is in charge of taking a letter guess, or the whole-word command, from the player.
/// It keeps prompting until the input passes `validate()`, showing the reason after every miss.
fn take_letter(term: &Term, theme: &ColorfulTheme, guessed: &GuessedLetters) -> Result<Guess> {
    let input: String = Input::with_theme(theme)
        .with_prompt(format!(
            "{}",
            style(format!(
                "Enter a letter, or {WHOLE_WORD_COMMAND} to guess the whole word"
            ))
            .bold()
        ))
        .validate_with(|input: &String| -> Result<(), InvalidGuess> {
            validate(input, guessed).map(drop)
        })
        .interact_text_on(term)?;

    // the prompt only returns once the input validates, so this is the same guess it accepted
    let guess = validate(&input, guessed)?;
    debug!(?guess, "accepted guess");

    Ok(guess)
}

/// This function is in charge of taking the whole-word guess after the player entered the
/// whole-word command. Whatever is typed, an empty line included, is the guess; a wrong one costs a
/// turn like any other miss.
fn take_word(term: &Term, theme: &ColorfulTheme) -> Result<String> {
    let input: String = Input::with_theme(theme)
        .with_prompt(format!(
            "{}",
            style("Enter what you think the word is").bold()
        ))
        .allow_empty(true)
        .interact_text_on(term)?;

    Ok(input)
}

/// Checks a line typed at the letter prompt against the letters already guessed.
///
/// The line is trimmed and uppercased first. It must then be either the whole-word command or a
/// single alphabetic letter that has not been guessed yet.
///
/// # Errors
///
/// Returns the `InvalidGuess` variant naming the first check the line failed.
pub fn validate(candidate: &str, already_guessed: &GuessedLetters) -> Result<Guess, InvalidGuess> {
    let candidate = candidate.trim().to_uppercase();

    if candidate.is_empty() {
        return Err(InvalidGuess::Empty);
    }

    if !is_word(&candidate) {
        return Err(InvalidGuess::NotAlphabetic(candidate));
    }

    if candidate == WHOLE_WORD_COMMAND {
        return Ok(Guess::WholeWord);
    }

    let mut letters = candidate.chars();

    match (letters.next(), letters.next()) {
        (Some(letter), None) if already_guessed.contains(letter) => {
            Err(InvalidGuess::AlreadyGuessed(letter))
        }
        (Some(letter), None) => Ok(Guess::Letter(letter)),
        _ => Err(InvalidGuess::NotSingleLetter(candidate)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_new_letter_in_either_case() {
        let guessed = GuessedLetters::new();

        assert_eq!(validate("a", &guessed), Ok(Guess::Letter('A')));
        assert_eq!(validate("Q", &guessed), Ok(Guess::Letter('Q')));
        assert_eq!(validate("  e \n", &guessed), Ok(Guess::Letter('E')));
    }

    #[test]
    fn rejects_empty_input() {
        let guessed = GuessedLetters::new();

        assert_eq!(validate("", &guessed), Err(InvalidGuess::Empty));
        assert_eq!(validate("   ", &guessed), Err(InvalidGuess::Empty));
    }

    #[test]
    fn rejects_non_alphabetic_input() {
        let guessed = GuessedLetters::new();

        for input in ["1", "?", "a1", "x y", "_"] {
            assert!(
                matches!(validate(input, &guessed), Err(InvalidGuess::NotAlphabetic(_))),
                "{input}"
            );
        }
    }

    #[test]
    fn rejects_more_than_one_letter() {
        let guessed = GuessedLetters::new();

        assert_eq!(
            validate("ab", &guessed),
            Err(InvalidGuess::NotSingleLetter("AB".to_owned()))
        );
        assert_eq!(
            validate("checks", &guessed),
            Err(InvalidGuess::NotSingleLetter("CHECKS".to_owned()))
        );
    }

    #[test]
    fn rejects_a_letter_guessed_before() {
        let guessed: GuessedLetters = "AE".chars().collect();

        assert_eq!(validate("a", &guessed), Err(InvalidGuess::AlreadyGuessed('A')));
        assert_eq!(validate("E", &guessed), Err(InvalidGuess::AlreadyGuessed('E')));
        assert_eq!(validate("i", &guessed), Ok(Guess::Letter('I')));
    }

    #[test]
    fn whole_word_command_is_case_insensitive() {
        let guessed = GuessedLetters::new();

        assert_eq!(validate("CHECK", &guessed), Ok(Guess::WholeWord));
        assert_eq!(validate("check", &guessed), Ok(Guess::WholeWord));
        assert_eq!(validate(" Check ", &guessed), Ok(Guess::WholeWord));
    }

    #[test]
    fn letter_guess_never_asks_for_the_word() {
        let chosen = into_move(Guess::Letter('E'), || unreachable!("no word prompt for a letter"));
        assert_eq!(chosen.unwrap(), Move::Letter('E'));
    }

    #[test]
    fn whole_word_is_passed_on_as_typed() {
        for typed in ["dog", "d0g", "", " Dog "] {
            let chosen = into_move(Guess::WholeWord, || Ok(typed.to_owned()));
            assert_eq!(chosen.unwrap(), Move::Word(typed.to_owned()));
        }
    }

    #[test]
    fn whole_word_prompt_errors_are_passed_on() {
        let chosen = into_move(Guess::WholeWord, || Err(anyhow::anyhow!("terminal gone")));
        assert!(chosen.is_err());
    }

    #[test]
    fn whole_word_command_is_accepted_whatever_was_guessed() {
        let guessed: GuessedLetters = "CHEK".chars().collect();
        assert_eq!(validate("check", &guessed), Ok(Guess::WholeWord));
    }
}
