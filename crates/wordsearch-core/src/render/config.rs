use crate::ConfigError;
use serde::{Deserialize, Serialize};

/// Highlight colours for solution paths, assigned in placement order
pub const PALETTE: [&str; 10] = [
    "#FF0000", "#00AA00", "#0000FF", "#FF6600", "#9900CC", "#009999", "#FF00FF", "#666600",
    "#663300", "#003366",
];

/// Layout settings shared by the puzzle and solution views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgConfig {
    /// Width and height of one grid cell in pixels
    pub cell_size: u32,
    /// Words stacked per column in the word list
    pub words_per_column: usize,
    /// Space below the grid for the word list
    pub footer_height: u32,
    pub font_family: String,
    /// Letter colour in the solution view for cells behind the highlights
    pub faded_color: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            cell_size: 40,
            words_per_column: 5,
            footer_height: 100,
            font_family: "Arial".to_string(),
            faded_color: "#CCCCCC".to_string(),
        }
    }
}

impl SvgConfig {
    pub fn with_cell_size(cell_size: u32) -> Self {
        Self {
            cell_size,
            ..Default::default()
        }
    }

    /// Colour for the word at `index` in placement order
    pub fn color(&self, index: usize) -> &'static str {
        PALETTE[index % PALETTE.len()]
    }

    /// Check that a `grid_size` grid fits on a canvas whose coordinates stay
    /// within `u32`
    pub fn validate(&self, grid_size: usize) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        let words_per_column = u64::try_from(self.words_per_column).unwrap_or(u64::MAX);
        let list_depth = words_per_column.saturating_mul(20).saturating_add(50);
        let footer = u64::from(self.footer_height).max(list_depth);
        let height = u64::try_from(grid_size)
            .ok()
            .and_then(|size| size.checked_mul(u64::from(self.cell_size)))
            .and_then(|grid_px| grid_px.checked_add(footer));
        match height {
            Some(height) if height <= u64::from(u32::MAX) => Ok(()),
            _ => Err(ConfigError::CanvasTooLarge {
                size: grid_size,
                cell_size: self.cell_size,
            }),
        }
    }
}
