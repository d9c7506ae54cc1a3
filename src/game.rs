//! The game module contains the core parts of the game, except for input handling and word lists.
//!
//! It contains the `init()` function to set up and play a game, the command-line arguments it
//! reads, and the `Game` state machine that counts turns and decides when a game is over.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::{style, Term};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::input::ConsolePlayer;
use crate::source::WordList;
use crate::word::{is_word, GuessedLetters, WordState};

/// The number of turns a game gets unless told otherwise.
const DEFAULT_TURNS: u32 = 10;

/// This struct holds information about the application when it comes to the command-line argument
/// parser of choice, which is clap. Every argument is optional; a bare `hangman` picks a word from
/// `words.txt` and gives the player ten turns.
#[derive(Parser)]
#[command(name = "hangman", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// The number of turns the player gets.
    ///
    /// A turn is spent on every letter or whole-word guess that does not win the game. With zero
    /// turns the game is lost before it starts.
    #[arg(short, long, default_value_t = DEFAULT_TURNS, value_name = "TURNS")]
    turns: u32,
    /// The secret word to play with, instead of one picked from the word list.
    ///
    /// It has to be made up of letters only. Handy for handing the keyboard over to a friend.
    #[arg(long, conflicts_with = "words", value_parser = verify_word)]
    word: Option<String>,
    /// The word list the secret word is picked from, one word per line.
    #[arg(short, long, default_value = "words.txt", value_name = "PATH")]
    words: PathBuf,
}

/// The stages a game goes through. It starts `Active` and ends in either of the other two, never
/// to leave them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// The game is still being played.
    Active,
    /// The player ran out of turns.
    Lost,
    /// The player found the word.
    Won,
}

/// A validated move for a single round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Move {
    /// Guess a single letter.
    Letter(char),
    /// Guess the whole word.
    Word(String),
}

/// What the player gets to see before making a move.
#[derive(Debug)]
pub struct Round<'game> {
    /// The letters guessed so far.
    pub guessed: &'game GuessedLetters,
    /// The secret word with every unguessed letter hidden.
    pub masked: String,
    /// The turns left, this one included.
    pub turns_remaining: u32,
}

/// Whoever is making the moves. The game asks it for a move every round and tells it how the game
/// ended once it is over.
pub trait Player {
    /// Shows the final state of the game. The secret word is passed along so a lost game can
    /// reveal it.
    ///
    /// # Errors
    ///
    /// Returns any error hit while reporting the result.
    fn conclude(&mut self, state: GameState, secret: &str) -> Result<()>;

    /// Returns the move for the given round.
    ///
    /// # Errors
    ///
    /// Returns any error hit while getting the move, which ends the game.
    fn next_move(&mut self, round: &Round<'_>) -> Result<Move>;
}

/// A single game of hangman.
///
/// The game owns the only mutable copy of the guessed letters; the secret word only ever sees a
/// borrowed snapshot of them.
#[derive(Debug)]
pub struct Game {
    /// The letters guessed so far.
    guessed: GuessedLetters,
    /// Where the game stands.
    state: GameState,
    /// The turns left before the game is lost.
    turns_remaining: u32,
    /// The secret word.
    word: WordState,
}

impl Game {
    /// The letters guessed so far.
    #[must_use]
    pub const fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    /// Starts a game for the given word with the given number of turns. A game with no turns is
    /// lost from the start.
    #[must_use]
    pub fn new(word: WordState, turns: u32) -> Self {
        let state = if turns == 0 {
            GameState::Lost
        } else {
            GameState::Active
        };

        info!(turns, length = word.secret().chars().count(), "new game");

        Self {
            guessed: GuessedLetters::new(),
            state,
            turns_remaining: turns,
            word,
        }
    }

    /// Plays rounds until the game is over, then lets the player know how it went.
    ///
    /// # Errors
    ///
    /// Returns any error the player runs into while making a move or reporting the result.
    pub fn play<P: Player + ?Sized>(&mut self, player: &mut P) -> Result<GameState> {
        while self.state == GameState::Active {
            let round = Round {
                guessed: &self.guessed,
                masked: self.word.render(&self.guessed),
                turns_remaining: self.turns_remaining,
            };
            let chosen = player.next_move(&round)?;
            let state = self.play_round(chosen);

            debug!(?state, turns_remaining = self.turns_remaining, "round over");
        }

        info!(state = ?self.state, "game over");
        player.conclude(self.state, self.word.secret())?;

        Ok(self.state)
    }

    /// Applies a single move and returns where the game stands afterwards.
    ///
    /// A letter is added to the guessed set and wins if it completes the word; a whole word wins if
    /// it is the secret word and leaves the guessed set alone. A winning move does not use up a
    /// turn; any other move does. Moves made once the game is over are ignored.
    pub fn play_round(&mut self, chosen: Move) -> GameState {
        if self.state != GameState::Active {
            return self.state;
        }

        let found = match chosen {
            Move::Letter(letter) => {
                let fresh = self.guessed.insert(letter);
                debug!(%letter, fresh, guessed = self.guessed.len(), "letter guessed");
                self.word.is_fully_revealed(&self.guessed)
            }
            Move::Word(candidate) => {
                debug!(length = candidate.chars().count(), "whole word guessed");
                self.word.matches(&candidate)
            }
        };

        if found {
            self.state = GameState::Won;
        } else {
            self.turns_remaining = self.turns_remaining.saturating_sub(1);

            if self.turns_remaining == 0 {
                self.state = GameState::Lost;
            }
        }

        self.state
    }

    /// Where the game stands.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The turns left before the game is lost.
    #[must_use]
    pub const fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    /// The secret word.
    #[must_use]
    pub const fn word(&self) -> &WordState {
        &self.word
    }
}

/// Sets up everything and plays a single game. This is a `main()` function of sorts though it is
/// still called from main.rs.
///
/// The secret word comes from `--word` if it was given, and is otherwise picked from the word list
/// file. The function returns once the game is over, whichever way it ended.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - hangman::SourceError
/// - io::Error
/// - dialoguer::Error
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let word = if let Some(ref word) = cli.word {
        info!("playing with a word given on the command line");
        WordState::new(word)
    } else {
        let mut list = WordList::load(&cli.words)?;
        info!(
            path = %cli.words.display(),
            words = list.words().len(),
            "playing with a word from the word list"
        );
        WordState::from_source(&mut list)
    };

    let term = Term::stdout();
    init_message(&term)?;

    let mut game = Game::new(word, cli.turns);
    let mut player = ConsolePlayer::new(term);
    let outcome = game.play(&mut player)?;
    debug!(?outcome, "leaving");

    Ok(())
}

/// This function writes the message shown at the start of the game, and sets the title of the
/// console window to the name of the game.
fn init_message(term: &Term) -> Result<()> {
    const MSG: &str = "Welcome to the game of hangman";
    let msg = style(MSG).bold();

    term.set_title("hangman");
    term.write_line(&format!("{msg}"))?;
    Ok(())
}

/// Installs the log subscriber. Logs go to standard error so they never mix with the game, and
/// only warnings are shown unless `RUST_LOG` asks for more.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// This function serves as a value parser for the command line argument parser in the `word`
/// field. It checks that the word is made up of letters only, as no guess could ever reveal
/// anything else.
fn verify_word(string: &str) -> Result<String, String> {
    let word = string.trim();

    if is_word(word) {
        Ok(word.to_owned())
    } else {
        Err("The secret word should be made up of letters only.".to_owned())
    }
}
