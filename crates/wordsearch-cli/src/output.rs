use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use wordsearch_core::render::{render_puzzle_svg, render_solution_svg, SvgConfig};
use wordsearch_core::Puzzle;

/// Files written for one puzzle
#[derive(Debug)]
pub struct Written {
    pub puzzle: PathBuf,
    pub solution: PathBuf,
    pub json: Option<PathBuf>,
}

/// `puzzle.svg` -> `puzzle_solution.svg`; no extension gets `.svg`
pub fn solution_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "wordsearch".to_string());
    let ext = output
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "svg".to_string());
    output.with_file_name(format!("{stem}_solution.{ext}"))
}

/// Write the puzzle and solution SVGs, plus the JSON export if requested
pub fn write_all(
    puzzle: &Puzzle,
    config: &SvgConfig,
    output: &Path,
    json: Option<&Path>,
) -> Result<Written> {
    let solution = solution_path(output);

    fs::write(output, render_puzzle_svg(puzzle, config))
        .with_context(|| format!("writing puzzle to {}", output.display()))?;
    fs::write(&solution, render_solution_svg(puzzle, config))
        .with_context(|| format!("writing solution to {}", solution.display()))?;

    if let Some(path) = json {
        let body = serde_json::to_string_pretty(puzzle)?;
        fs::write(path, body).with_context(|| format!("writing JSON to {}", path.display()))?;
    }

    Ok(Written {
        puzzle: output.to_path_buf(),
        solution,
        json: json.map(Path::to_path_buf),
    })
}
