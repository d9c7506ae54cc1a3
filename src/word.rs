//! The word module holds the secret word of a game and the set of letters guessed against it.
//!
//! Neither type knows about turns or prompts. `WordState` only answers questions about the secret
//! word given a snapshot of the guessed letters, and `GuessedLetters` is the growing set those
//! snapshots are taken from.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::source::WordSource;

/// The symbol shown in place of a letter that has not been guessed yet.
pub const PLACEHOLDER: char = '_';

/// Matches a non-empty run of alphabetic characters and nothing else.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A\p{Alphabetic}+\z").expect("the word pattern is a valid regular expression")
});

/// The letters guessed so far in a game. The set only ever grows.
///
/// Letters are stored uppercase, and lookups are case-insensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    /// The uppercase letters, kept sorted so they display in alphabetical order.
    letters: BTreeSet<char>,
}

impl GuessedLetters {
    /// Returns whether the letter has been guessed, ignoring case.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&normalize(letter))
    }

    /// Adds a letter to the set. Returns `false` if it was already there.
    pub fn insert(&mut self, letter: char) -> bool {
        self.letters.insert(normalize(letter))
    }

    /// Returns whether no letter has been guessed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the number of distinct letters guessed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Creates an empty set of guessed letters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: BTreeSet::new(),
        }
    }
}

impl fmt::Display for GuessedLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, letter) in self.letters.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{letter}")?;
        }

        Ok(())
    }
}

impl FromIterator<char> for GuessedLetters {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self {
            letters: iter.into_iter().map(normalize).collect(),
        }
    }
}

/// The secret word of a single game.
///
/// The word is stored uppercase and never changes once the game has started. Every query takes
/// the guessed letters as a borrowed snapshot, so the state of the game lives with whoever owns
/// that set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordState {
    /// The uppercase secret word.
    secret: String,
}

impl WordState {
    /// Creates the state for a word picked by the given source.
    pub fn from_source<S: WordSource + ?Sized>(source: &mut S) -> Self {
        Self::new(&source.pick())
    }

    /// Returns whether every character of the secret word has been guessed.
    ///
    /// Characters are compared one by one against the guessed set, so the placeholder symbol can
    /// never be mistaken for a revealed letter. An empty word is trivially revealed.
    #[must_use]
    pub fn is_fully_revealed(&self, guessed: &GuessedLetters) -> bool {
        self.secret.chars().all(|letter| guessed.contains(letter))
    }

    /// Returns whether the candidate is the secret word, ignoring case.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.to_uppercase() == self.secret
    }

    /// Creates the state for an explicitly chosen word, which is stored uppercase.
    #[must_use]
    pub fn new(word: &str) -> Self {
        Self {
            secret: word.to_uppercase(),
        }
    }

    /// Renders the word as the player sees it: guessed letters in place, a placeholder for every
    /// other character, all separated by single spaces.
    #[must_use]
    pub fn render(&self, guessed: &GuessedLetters) -> String {
        let mut output = String::with_capacity(self.secret.len() * 2);

        for (index, letter) in self.secret.chars().enumerate() {
            if index > 0 {
                output.push(' ');
            }

            if guessed.contains(letter) {
                output.push(letter);
            } else {
                output.push(PLACEHOLDER);
            }
        }

        output
    }

    /// The uppercase secret word.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

/// Returns whether the given text is a non-empty, purely alphabetic word.
pub(crate) fn is_word(text: &str) -> bool {
    WORD_RE.is_match(text)
}

/// Uppercases a single character, keeping it as is when its uppercase form spans more than one
/// character.
fn normalize(letter: char) -> char {
    let mut upper = letter.to_uppercase();

    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(text: &str) -> GuessedLetters {
        text.chars().collect()
    }

    #[test]
    fn explicit_word_is_uppercased() {
        let word = WordState::new("apple");
        assert_eq!(word.secret(), "APPLE");
    }

    #[test]
    fn render_shows_guessed_letters_and_placeholders() {
        let word = WordState::new("APPLE");

        assert_eq!(word.render(&GuessedLetters::new()), "_ _ _ _ _");
        assert_eq!(word.render(&letters("P")), "_ P P _ _");
        assert_eq!(word.render(&letters("ALPE")), "A P P L E");
    }

    #[test]
    fn render_has_one_token_per_character() {
        for secret in ["A", "DOG", "MISSISSIPPI", "QUIZZICAL"] {
            let word = WordState::new(secret);

            for guessed in ["", "I", "S", "AEIOU", "MISP"] {
                let rendered = word.render(&letters(guessed));
                assert_eq!(rendered.split(' ').count(), secret.chars().count());
            }
        }
    }

    #[test]
    fn guessing_every_letter_reveals_the_word() {
        for secret in ["APPLE", "DOG", "BANANA", "RHYTHM"] {
            let word = WordState::new(secret);
            assert!(word.is_fully_revealed(&letters(secret)));
        }
    }

    #[test]
    fn nothing_guessed_reveals_only_the_empty_word() {
        assert!(!WordState::new("DOG").is_fully_revealed(&GuessedLetters::new()));
        assert!(WordState::new("").is_fully_revealed(&GuessedLetters::new()));
    }

    #[test]
    fn word_is_revealed_exactly_when_the_last_letter_is_added() {
        let word = WordState::new("BANANA");

        for order in ["BAN", "NAB", "ANB", "NBA"] {
            let mut guessed = GuessedLetters::new();
            let mut reveals = Vec::new();

            for letter in order.chars() {
                assert!(guessed.insert(letter));
                reveals.push(word.is_fully_revealed(&guessed));
            }

            assert_eq!(reveals, vec![false, false, true], "order {order}");
        }
    }

    #[test]
    fn placeholder_does_not_count_as_revealed() {
        let word = WordState::new("DOG");
        let guessed = letters("_");

        assert_eq!(word.render(&guessed), "_ _ _");
        assert!(!word.is_fully_revealed(&guessed));
    }

    #[test]
    fn matches_ignores_case() {
        let word = WordState::new("Apple");

        assert!(word.matches("apple"));
        assert!(word.matches("APPLE"));
        assert!(word.matches("aPpLe"));
        assert!(!word.matches("apples"));
        assert!(!word.matches("appl"));
        assert!(!word.matches(""));
    }

    #[test]
    fn guessed_letters_are_case_insensitive() {
        let mut guessed = GuessedLetters::new();

        assert!(guessed.is_empty());
        assert!(guessed.insert('a'));
        assert!(!guessed.insert('A'));
        assert!(guessed.contains('a'));
        assert!(guessed.contains('A'));
        assert_eq!(guessed.len(), 1);
    }

    #[test]
    fn guessed_letters_display_sorted() {
        assert_eq!(letters("zeb").to_string(), "B E Z");
        assert_eq!(GuessedLetters::new().to_string(), "");
    }

    #[test]
    fn is_word_accepts_only_alphabetic_runs() {
        assert!(is_word("APPLE"));
        assert!(is_word("\u{e9}t\u{e9}"));
        assert!(!is_word(""));
        assert!(!is_word("ICE CREAM"));
        assert!(!is_word("R2D2"));
        assert!(!is_word("-"));
    }
}
