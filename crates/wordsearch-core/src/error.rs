use thiserror::Error;

/// Invalid generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    ZeroSize,
    #[error("max attempts must be at least 1")]
    ZeroAttempts,
    #[error("filler alphabet is empty")]
    EmptyAlphabet,
    #[error("filler alphabet contains non-uppercase letter {0:?}")]
    InvalidFiller(char),
    #[error("cell size must be at least 1")]
    ZeroCellSize,
    #[error("a {size}x{size} grid with {cell_size}px cells is too large to render")]
    CanvasTooLarge { size: usize, cell_size: u32 },
}

/// Failure of a whole generation run.
///
/// A single word that does not fit is not an error; it is reported in the
/// puzzle's outcomes instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no words to place")]
    NoWords,
    #[error("could not place any of {} words; try shorter words or a larger grid", .unplaced.len())]
    NothingPlaced { unplaced: Vec<String> },
}
