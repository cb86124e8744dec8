use crate::{Direction, Grid, Position};
use serde::{Deserialize, Serialize};

/// A word written into the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub direction: Direction,
    /// Cells occupied, first letter to last
    pub path: Vec<Position>,
}

impl PlacedWord {
    pub fn start(&self) -> Option<Position> {
        self.path.first().copied()
    }

    pub fn end(&self) -> Option<Position> {
        self.path.last().copied()
    }
}

/// What happened to one input word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOutcome {
    pub word: String,
    /// Attempts consumed from the per-word budget
    pub attempts: usize,
    /// Where the word went, if it fit
    pub placement: Option<PlacedWord>,
}

impl WordOutcome {
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }
}

/// A finished word search: filled grid plus the placed-word registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Seed the generator ran with
    pub seed: u64,
    pub grid: Grid,
    /// One entry per distinct input word, in the order they were attempted
    pub outcomes: Vec<WordOutcome>,
}

impl Puzzle {
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Placed words in placement order
    pub fn placed(&self) -> impl Iterator<Item = &PlacedWord> {
        self.outcomes.iter().filter_map(|o| o.placement.as_ref())
    }

    pub fn placed_count(&self) -> usize {
        self.placed().count()
    }

    /// Words that exhausted their attempt budget
    pub fn unplaced(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_placed())
            .map(|o| o.word.as_str())
    }

    /// Path of a placed word
    pub fn path(&self, word: &str) -> Option<&[Position]> {
        self.placed()
            .find(|p| p.word == word)
            .map(|p| p.path.as_slice())
    }

    /// Placed words sorted alphabetically, paired with their placement index
    pub fn word_list(&self) -> Vec<(usize, &str)> {
        let mut words: Vec<(usize, &str)> = self
            .placed()
            .enumerate()
            .map(|(i, p)| (i, p.word.as_str()))
            .collect();
        words.sort_by(|a, b| a.1.cmp(b.1));
        words
    }
}
