//! SVG rendering of finished puzzles
//!
//! Both views draw the same grid; the solution view adds a coloured stroke
//! along each placed word and lists the words in matching colours.

pub mod config;
pub mod svg;

pub use config::{SvgConfig, PALETTE};
pub use svg::{render_puzzle_svg, render_solution_svg};
