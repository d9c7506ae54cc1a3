//! Where secret words come from when the player does not pick one.
//!
//! The game only ever asks a `WordSource` for a word. The one shipped here, `WordList`, reads a
//! plain text file with a word per line and picks among its entries at random.

use std::fs;
use std::path::{Path, PathBuf};

use fastrand::Rng;
use tracing::{debug, warn};

use crate::messages::SourceError;
use crate::word::is_word;

/// Anything able to hand out a secret word.
pub trait WordSource {
    /// Returns the next secret word.
    fn pick(&mut self) -> String;
}

/// A list of candidate words and the generator used to pick among them.
///
/// A list is never empty; both constructors refuse to build one without a usable word.
#[derive(Debug)]
pub struct WordList {
    /// The generator behind every pick. It is created once and reused for the life of the list.
    rng: Rng,
    /// The uppercase candidate words.
    words: Vec<String>,
}

impl WordList {
    /// Builds a list from words held in memory, with the same cleanup applied to a word list file.
    ///
    /// Returns `None` if no usable word is left.
    pub fn from_words<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (words, _) = normalize(words);

        (!words.is_empty()).then(|| Self {
            rng: Rng::new(),
            words,
        })
    }

    /// Reads a word list file. Each line is trimmed and uppercased; blank lines are dropped, and so
    /// are lines that are not a single alphabetic word.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unreadable` if the file cannot be read, and `SourceError::Empty` if
    /// it does not hold a single usable word.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let content = fs::read_to_string(path).map_err(|source| SourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let (words, skipped) = normalize(content.lines());

        if skipped > 0 {
            warn!(path = %path.display(), skipped, "ignored lines that are not single words");
        }

        if words.is_empty() {
            return Err(SourceError::Empty {
                path: PathBuf::from(path),
            });
        }

        debug!(path = %path.display(), words = words.len(), "loaded word list");

        Ok(Self {
            rng: Rng::new(),
            words,
        })
    }

    /// Replaces the generator used to pick words, which makes picks reproducible with a seeded
    /// one.
    #[must_use]
    pub const fn with_rng(mut self, rng: Rng) -> Self {
        self.rng = rng;
        self
    }

    /// The candidate words, uppercase and in file order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl WordSource for WordList {
    fn pick(&mut self) -> String {
        // never empty; both constructors reject a list without words
        self.rng.choice(&self.words).cloned().unwrap_or_default()
    }
}

/// Trims and uppercases every entry, keeping only alphabetic words. Returns the kept words along
/// with how many non-blank entries were thrown away.
fn normalize<I, S>(entries: I) -> (Vec<String>, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = Vec::new();
    let mut skipped = 0_usize;

    for entry in entries {
        let word = entry.as_ref().trim().to_uppercase();

        if word.is_empty() {
            continue;
        }

        if is_word(&word) {
            words.push(word);
        } else {
            skipped += 1;
        }
    }

    (words, skipped)
}
