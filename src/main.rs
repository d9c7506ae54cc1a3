//! # hangman
//!
//! This crate is the game of hangman, played in the terminal. A secret word is picked from a word
//! list, or given on the command line, and the player guesses it one letter at a time. Typing
//! `CHECK` instead of a letter lets the player try the whole word at once.
//!
//! Every guess that does not win the game costs a turn, and the game is lost once the turns run
//! out, at which point the word is revealed.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use hangman::init;

fn main() -> Result<()> {
    init()
}
