use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// A cell position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction a word runs in, first letter to last.
///
/// Only the four "forward" readings are allowed; their mirrors are never used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// (0, 1)
    Right,
    /// (1, 0)
    Down,
    /// (1, 1)
    DownRight,
    /// (-1, 1)
    UpRight,
}

impl Direction {
    /// All allowed directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::UpRight,
    ];

    /// Row and column step for this direction
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
        }
    }

    /// Position of the `offset`-th letter of a word starting at `start`,
    /// or `None` if it would leave a grid of the given size.
    pub fn step(self, start: Position, offset: usize, size: usize) -> Option<Position> {
        let (dr, dc) = self.delta();
        let offset = isize::try_from(offset).ok()?;
        let row = start.row as isize + offset * dr;
        let col = start.col as isize + offset * dc;
        if row < 0 || col < 0 || row as usize >= size || col as usize >= size {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }

    /// Start rows and columns from which a word of `len` letters stays on a
    /// `size` grid. `None` when the word cannot fit in this direction at all.
    pub fn start_range(
        self,
        len: usize,
        size: usize,
    ) -> Option<(RangeInclusive<usize>, RangeInclusive<usize>)> {
        if len == 0 || len > size {
            return None;
        }
        let (dr, dc) = self.delta();
        Some((axis_range(dr, len, size), axis_range(dc, len, size)))
    }
}

fn axis_range(step: isize, len: usize, size: usize) -> RangeInclusive<usize> {
    let span = len - 1;
    match step {
        0 => 0..=size - 1,
        s if s > 0 => 0..=size - 1 - span,
        _ => span..=size - 1,
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::DownRight => write!(f, "down-right"),
            Direction::UpRight => write!(f, "up-right"),
        }
    }
}

/// Square letter grid.
///
/// Cells start empty and are written by word placements, then once by
/// [`Grid::fill_remaining`]. After the fill the grid is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
    filled: bool,
}

impl Grid {
    /// Create an empty `size × size` grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            filled: false,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    /// Letter at a position, `None` if the cell is empty or off the grid
    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        self.cells[self.index(pos)]
    }

    /// Number of cells not yet holding a letter
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True when every cell holds a letter
    pub fn is_complete(&self) -> bool {
        self.empty_count() == 0
    }

    /// Whether the filler pass has run
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Check whether `word` can be written starting at `start` in `direction`.
    ///
    /// Every target cell must be on the grid and either empty or already
    /// holding the same letter, so words may cross where their letters agree.
    pub fn is_legal(&self, word: &str, start: Position, direction: Direction) -> bool {
        for (i, ch) in word.chars().enumerate() {
            let Some(pos) = direction.step(start, i, self.size) else {
                return false;
            };
            match self.cells[self.index(pos)] {
                Some(existing) if existing != ch => return false,
                _ => {}
            }
        }
        true
    }

    /// Write `word` into the grid and return the path it occupies.
    ///
    /// Does not re-check legality; callers validate with [`Grid::is_legal`].
    pub fn place(&mut self, word: &str, start: Position, direction: Direction) -> Vec<Position> {
        debug_assert!(!self.filled, "word placed after filler pass");
        let mut path = Vec::with_capacity(word.chars().count());
        for (i, ch) in word.chars().enumerate() {
            let Some(pos) = direction.step(start, i, self.size) else {
                break;
            };
            let idx = self.index(pos);
            self.cells[idx] = Some(ch);
            path.push(pos);
        }
        path
    }

    /// Fill every empty cell with a random letter from `alphabet`.
    ///
    /// Returns the number of cells filled. An empty alphabet leaves the grid
    /// untouched.
    pub fn fill_remaining<R: Rng + ?Sized>(&mut self, alphabet: &[char], rng: &mut R) -> usize {
        let mut count = 0;
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            if let Some(&letter) = alphabet.choose(rng) {
                *cell = Some(letter);
                count += 1;
            }
        }
        self.filled = true;
        count
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.map_or_else(|| ".".to_string(), |ch| ch.to_string()))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
