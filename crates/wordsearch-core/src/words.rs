use serde::Serialize;
use std::collections::HashSet;

/// Why a word-list entry was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Longer than the grid is wide
    TooLong,
    /// Already listed earlier
    Duplicate,
}

/// Normalized word list ready for the generator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordList {
    /// Accepted words, in input order
    pub words: Vec<String>,
    /// Dropped entries with the reason
    pub rejected: Vec<(String, Rejection)>,
}

impl WordList {
    /// Parse text with one word per line.
    ///
    /// Lines are trimmed and uppercased; blank lines are skipped silently.
    pub fn parse(text: &str, grid_size: usize) -> Self {
        Self::from_words(text.lines(), grid_size)
    }

    /// Build from already-split entries
    pub fn from_words<I, S>(entries: I, grid_size: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        let mut seen = HashSet::new();
        for entry in entries {
            let word = entry.as_ref().trim().to_uppercase();
            if word.is_empty() {
                continue;
            }
            if word.chars().count() > grid_size {
                list.rejected.push((word, Rejection::TooLong));
            } else if !seen.insert(word.clone()) {
                list.rejected.push((word, Rejection::Duplicate));
            } else {
                list.words.push(word);
            }
        }
        list
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}
