//! Word search engine
//!
//! Places a list of words on a square letter grid along four forward
//! directions (right, down, down-right, up-right) with a bounded randomized
//! search, fills the remaining cells with random letters, and renders the
//! puzzle and its solution as SVG.
//!
//! ```no_run
//! use wordsearch_core::{render, Generator, GeneratorConfig};
//!
//! let mut generator = Generator::with_config(GeneratorConfig::new(10, 100));
//! let puzzle = generator.generate(&["RUST", "CARGO", "CRATE"])?;
//! let _svg = render::render_solution_svg(&puzzle, &render::SvgConfig::default());
//! # Ok::<(), wordsearch_core::GenerateError>(())
//! ```

mod error;
mod generator;
mod grid;
mod puzzle;
pub mod render;
mod words;

pub use error::{ConfigError, GenerateError};
pub use generator::{Generator, GeneratorConfig, DEFAULT_MAX_ATTEMPTS, DEFAULT_SIZE};
pub use grid::{Direction, Grid, Position};
pub use puzzle::{PlacedWord, Puzzle, WordOutcome};
pub use words::{Rejection, WordList};
