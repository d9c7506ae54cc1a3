//! The library components of the game. They allow setting up a game, picking a secret word, taking
//! guesses from the player and deciding when the game is won or lost.
//!
//! The starting point of the library is the game.rs file, which contains the game loop and the
//! `init()` function the binary calls.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod game;
mod input;
mod messages;
mod source;
mod word;

pub use game::{init, Game, GameState, Move, Player, Round};
pub use input::{validate, ConsolePlayer, Guess, WHOLE_WORD_COMMAND};
pub use messages::{InvalidGuess, SourceError};
pub use source::{WordList, WordSource};
pub use word::{GuessedLetters, WordState, PLACEHOLDER};
