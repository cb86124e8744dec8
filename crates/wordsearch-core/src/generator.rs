use crate::{ConfigError, Direction, GenerateError, Grid, PlacedWord, Position, Puzzle, WordOutcome};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Default grid width and height
pub const DEFAULT_SIZE: usize = 15;
/// Default per-word placement budget
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Configuration for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Grid width and height
    pub size: usize,
    /// Random placements tried per word before giving up on it
    pub max_attempts: usize,
    /// Letters used to fill cells no word claimed
    pub alphabet: Vec<char>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            alphabet: ('A'..='Z').collect(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(size: usize, max_attempts: usize) -> Self {
        Self {
            size,
            max_attempts,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if let Some(&bad) = self.alphabet.iter().find(|c| !c.is_uppercase()) {
            return Err(ConfigError::InvalidFiller(bad));
        }
        Ok(())
    }
}

/// Word search generator.
///
/// Owns the only random source used during generation, so a generator built
/// with [`Generator::with_seed`] reproduces the same puzzle for the same input.
pub struct Generator {
    config: GeneratorConfig,
    seed: u64,
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration and a fresh seed
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration and a fresh seed
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self::with_config_and_seed(config, fresh_seed())
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config_and_seed(GeneratorConfig::default(), seed)
    }

    pub fn with_config_and_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Build a puzzle from `words`.
    ///
    /// Duplicates are dropped and the rest attempted longest first. Words
    /// that do not fit are skipped and reported in [`Puzzle::outcomes`]; only
    /// a run that places nothing is an error.
    pub fn generate<S: AsRef<str>>(&mut self, words: &[S]) -> Result<Puzzle, GenerateError> {
        self.config.validate()?;

        let mut seen = HashSet::new();
        let mut candidates: Vec<&str> = Vec::with_capacity(words.len());
        for word in words {
            let word = word.as_ref();
            if seen.insert(word) {
                candidates.push(word);
            } else {
                debug!(word, "skipping duplicate word");
            }
        }
        if candidates.is_empty() {
            return Err(GenerateError::NoWords);
        }

        // Stable sort keeps input order among words of equal length
        candidates.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));

        let mut grid = Grid::new(self.config.size);
        let mut outcomes = Vec::with_capacity(candidates.len());
        for word in candidates {
            let outcome = self.place_word(&mut grid, word);
            if !outcome.is_placed() {
                warn!(word, attempts = outcome.attempts, "could not place word");
            }
            outcomes.push(outcome);
        }

        if !outcomes.iter().any(WordOutcome::is_placed) {
            return Err(GenerateError::NothingPlaced {
                unplaced: outcomes.into_iter().map(|o| o.word).collect(),
            });
        }

        let filled = grid.fill_remaining(&self.config.alphabet, &mut self.rng);
        let placed = outcomes.iter().filter(|o| o.is_placed()).count();
        info!(
            placed,
            unplaced = outcomes.len() - placed,
            filler_cells = filled,
            seed = self.seed,
            "word search generated"
        );

        Ok(Puzzle {
            seed: self.seed,
            grid,
            outcomes,
        })
    }

    /// Try to place one word with a bounded randomized search.
    ///
    /// The four directions are shuffled once, then cycled through by attempt
    /// number. The first legal spot found is taken.
    pub fn place_word(&mut self, grid: &mut Grid, word: &str) -> WordOutcome {
        let len = word.chars().count();
        let size = grid.size();
        if len == 0 || len > size {
            debug!(word, size, "word cannot fit on grid");
            return WordOutcome {
                word: word.to_string(),
                attempts: 0,
                placement: None,
            };
        }

        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.rng);

        for attempt in 0..self.config.max_attempts {
            let direction = directions[attempt % directions.len()];
            let Some((rows, cols)) = direction.start_range(len, size) else {
                continue;
            };

            let start = Position::new(self.rng.gen_range(rows), self.rng.gen_range(cols));
            if grid.is_legal(word, start, direction) {
                let path = grid.place(word, start, direction);
                debug!(
                    word,
                    row = start.row,
                    col = start.col,
                    %direction,
                    attempts = attempt + 1,
                    "placed word"
                );
                return WordOutcome {
                    word: word.to_string(),
                    attempts: attempt + 1,
                    placement: Some(PlacedWord {
                        word: word.to_string(),
                        direction,
                        path,
                    }),
                };
            }
        }

        WordOutcome {
            word: word.to_string(),
            attempts: self.config.max_attempts,
            placement: None,
        }
    }
}

/// Seed from the OS entropy source
fn fresh_seed() -> u64 {
    let mut seed_bytes = [0u8; 8];
    if getrandom::getrandom(&mut seed_bytes).is_err() {
        // Fallback: use a static counter if getrandom fails
        static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
        let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        seed_bytes = counter.to_le_bytes();
    }
    u64::from_le_bytes(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(size: usize, max_attempts: usize, seed: u64) -> Generator {
        Generator::with_config_and_seed(GeneratorConfig::new(size, max_attempts), seed)
    }

    fn assert_straight_line(placed: &PlacedWord) {
        let (dr, dc) = placed.direction.delta();
        for pair in placed.path.windows(2) {
            assert_eq!(pair[1].row as isize - pair[0].row as isize, dr);
            assert_eq!(pair[1].col as isize - pair[0].col as isize, dc);
        }
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.size, 15);
        assert_eq!(config.max_attempts, 100);
        assert_eq!(config.alphabet.len(), 26);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(GeneratorConfig::new(0, 10).validate(), Err(ConfigError::ZeroSize));
        assert_eq!(GeneratorConfig::new(10, 0).validate(), Err(ConfigError::ZeroAttempts));

        let mut config = GeneratorConfig::default();
        config.alphabet.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptyAlphabet));

        config.alphabet = vec!['A', 'b'];
        assert_eq!(config.validate(), Err(ConfigError::InvalidFiller('b')));
    }

    #[test]
    fn test_small_words_on_roomy_grid() {
        for seed in 0..20 {
            let mut generator = generator(10, 100, seed);
            let puzzle = generator.generate(&["CAT", "DOG"]).unwrap();

            assert_eq!(puzzle.placed_count(), 2, "seed {seed}");
            for placed in puzzle.placed() {
                assert_eq!(placed.path.len(), 3);
                assert_straight_line(placed);
                for (pos, ch) in placed.path.iter().zip(placed.word.chars()) {
                    assert_eq!(puzzle.grid.get(*pos), Some(ch));
                }
            }
            assert!(puzzle.grid.is_complete());
        }
    }

    #[test]
    fn test_oversized_word_fails_generation() {
        let mut generator = generator(3, 100, 42);
        let mut grid = Grid::new(3);
        let outcome = generator.place_word(&mut grid, "ELEPHANT");
        assert!(!outcome.is_placed());
        assert_eq!(outcome.attempts, 0);
        assert_eq!(grid.empty_count(), 9);

        let err = generator.generate(&["ELEPHANT"]).unwrap_err();
        assert_eq!(
            err,
            GenerateError::NothingPlaced {
                unplaced: vec!["ELEPHANT".to_string()]
            }
        );
    }

    #[test]
    fn test_empty_word_is_unplaced() {
        let mut generator = generator(5, 10, 1);
        let mut grid = Grid::new(5);
        let outcome = generator.place_word(&mut grid, "");
        assert!(!outcome.is_placed());
        assert_eq!(grid.empty_count(), 25);
    }

    #[test]
    fn test_no_words() {
        let mut generator = generator(5, 10, 1);
        let words: [&str; 0] = [];
        assert_eq!(generator.generate(&words).unwrap_err(), GenerateError::NoWords);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let mut generator = generator(0, 10, 1);
        assert_eq!(
            generator.generate(&["A"]).unwrap_err(),
            GenerateError::Config(ConfigError::ZeroSize)
        );
    }

    #[test]
    fn test_word_crosses_matching_letters() {
        let mut grid = Grid::new(4);
        grid.place("ABBA", Position::new(0, 0), Direction::Right);
        // Fill everything else so the only legal spots reuse existing letters
        for row in 1..4 {
            grid.place("ZZZZ", Position::new(row, 0), Direction::Right);
        }

        let mut generator = generator(4, 400, 3);
        let outcome = generator.place_word(&mut grid, "AB");
        let placed = outcome.placement.expect("AB should overlap ABBA");
        assert_eq!(placed.path, vec![Position::new(0, 0), Position::new(0, 1)]);
        assert_eq!(grid.empty_count(), 0);
    }

    #[test]
    fn test_longest_words_attempted_first() {
        let mut generator = generator(6, 100, 9);
        let puzzle = generator
            .generate(&["AB", "ABCDEFG", "ABCD", "XY", "ABCDEF"])
            .unwrap();

        let order: Vec<&str> = puzzle.outcomes.iter().map(|o| o.word.as_str()).collect();
        assert_eq!(order, vec!["ABCDEFG", "ABCDEF", "ABCD", "AB", "XY"]);
        assert!(!puzzle.outcomes[0].is_placed());
        assert!(puzzle.outcomes[1].is_placed());
    }

    #[test]
    fn test_duplicates_attempted_once() {
        let mut generator = generator(8, 100, 5);
        let puzzle = generator.generate(&["OWL", "OWL", "BAT"]).unwrap();
        assert_eq!(puzzle.outcomes.len(), 2);
    }

    #[test]
    fn test_single_attempt_budget() {
        for seed in 0..50 {
            let mut generator = generator(12, 1, seed);
            let mut grid = Grid::new(12);
            grid.place("QQQQQQQQQQQQ", Position::new(6, 0), Direction::Right);
            let before = grid.clone();

            let outcome = generator.place_word(&mut grid, "PUZZLE");
            assert_eq!(outcome.attempts, 1);
            match outcome.placement {
                Some(placed) => {
                    assert_eq!(placed.path.len(), 6);
                    assert_eq!(grid.empty_count(), before.empty_count() - 6);
                }
                None => assert_eq!(grid, before),
            }
        }
    }

    /// 4x4 grid where only the main diagonal is free, so a four-letter word
    /// fits nowhere except down-right from the corner
    fn diagonal_only_grid() -> Grid {
        let mut grid = Grid::new(4);
        for row in 0..4 {
            for col in (0..4).filter(|&col| col != row) {
                grid.place("Z", Position::new(row, col), Direction::Right);
            }
        }
        grid
    }

    #[test]
    fn test_directions_cycle_through_one_shuffle() {
        let mut first_hits = HashSet::new();
        for seed in 0..200 {
            let mut generator = generator(4, 100, seed);
            let mut grid = diagonal_only_grid();

            let outcome = generator.place_word(&mut grid, "ABCD");
            let placed = outcome.placement.expect("diagonal is always free");
            assert_eq!(placed.direction, Direction::DownRight);
            assert_eq!(placed.start(), Some(Position::new(0, 0)));
            // Every direction comes up within the first cycle of four
            assert!((1..=4).contains(&outcome.attempts), "seed {seed}: {}", outcome.attempts);
            first_hits.insert(outcome.attempts);
        }
        // The shuffle puts down-right in every slot for some seed
        assert_eq!(first_hits, HashSet::from([1, 2, 3, 4]));
    }

    #[test]
    fn test_four_attempts_cover_every_direction() {
        for seed in 0..200 {
            let mut generator = generator(4, 4, seed);
            let mut grid = diagonal_only_grid();
            assert!(generator.place_word(&mut grid, "ABCD").is_placed(), "seed {seed}");
        }
    }

    #[test]
    fn test_attempts_never_exceed_budget() {
        let mut generator = generator(5, 7, 11);
        let puzzle = generator
            .generate(&["ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXY", "ZABCD"])
            .unwrap();
        for outcome in &puzzle.outcomes {
            assert!(outcome.attempts <= 7);
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let words = ["RUST", "CARGO", "CRATE", "TRAIT", "BORROW"];
        let a = generator(10, 100, 1234).generate(&words).unwrap();
        let b = generator(10, 100, 1234).generate(&words).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, 1234);
    }

    #[test]
    fn test_placed_letters_survive_fill() {
        let words = ["LOOP", "MATCH", "ENUM", "STRUCT", "IMPL", "MACRO", "TRAIT"];
        for seed in 0..10 {
            let puzzle = generator(8, 100, seed).generate(&words).unwrap();
            assert!(puzzle.grid.is_complete());
            for placed in puzzle.placed() {
                assert_straight_line(placed);
                let letters: String = placed
                    .path
                    .iter()
                    .filter_map(|pos| puzzle.grid.get(*pos))
                    .collect();
                assert_eq!(letters, placed.word);
            }
        }
    }
}
