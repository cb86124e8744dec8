use super::SvgConfig;
use crate::{Position, Puzzle};
use std::fmt::{self, Write};

/// Render the unsolved puzzle: grid, letters and the words to find
pub fn render_puzzle_svg(puzzle: &Puzzle, config: &SvgConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_puzzle_svg(&mut out, puzzle, config);
    out
}

/// Render the solution: faded grid, a highlight along every placed word and
/// the word list in matching colours
pub fn render_solution_svg(puzzle: &Puzzle, config: &SvgConfig) -> String {
    let mut out = String::new();
    let _ = write_solution_svg(&mut out, puzzle, config);
    out
}

pub fn write_puzzle_svg<W: Write>(out: &mut W, puzzle: &Puzzle, config: &SvgConfig) -> fmt::Result {
    let layout = Layout::new(puzzle, config);
    layout.open(out)?;
    layout.grid_lines(out)?;
    layout.letters(out, puzzle, None)?;
    layout.word_list(out, puzzle, "Words to find:", false)?;
    layout.close(out)
}

pub fn write_solution_svg<W: Write>(
    out: &mut W,
    puzzle: &Puzzle,
    config: &SvgConfig,
) -> fmt::Result {
    let layout = Layout::new(puzzle, config);
    layout.open(out)?;
    layout.grid_lines(out)?;
    layout.letters(out, puzzle, Some(config.faded_color.as_str()))?;

    let font_size = config.cell_size / 2;
    for (index, placed) in puzzle.placed().enumerate() {
        let color = config.color(index);
        let (Some(start), Some(end)) = (placed.start(), placed.end()) else {
            continue;
        };
        let (x1, y1) = layout.center(start);
        let (x2, y2) = layout.center(end);

        // Translucent band under a thin solid line
        writeln!(
            out,
            r#"  <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="{}" stroke-opacity="0.3" stroke-linecap="round"/>"#,
            band_width(config.cell_size)
        )?;
        writeln!(
            out,
            r#"  <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="3" stroke-linecap="round"/>"#
        )?;

        for &pos in &placed.path {
            let Some(letter) = puzzle.grid.get(pos) else {
                continue;
            };
            let (x, y) = layout.text_anchor(pos);
            writeln!(
                out,
                r#"  <text x="{x}" y="{y}" font-family="{}" font-size="{font_size}" text-anchor="middle" font-weight="bold" fill="{color}">{}</text>"#,
                escape(&config.font_family),
                escape_char(letter)
            )?;
        }
    }

    layout.word_list(out, puzzle, "Solution:", true)?;
    layout.close(out)
}

/// Pixel geometry for one puzzle
///
/// Coordinates are `u64` with saturating arithmetic; [`SvgConfig::validate`]
/// is what keeps them inside `u32` for real output.
struct Layout<'a> {
    config: &'a SvgConfig,
    size: u64,
    cell: u64,
    grid_px: u64,
    width: u64,
    height: u64,
}

impl<'a> Layout<'a> {
    fn new(puzzle: &Puzzle, config: &'a SvgConfig) -> Self {
        let size = u64::try_from(puzzle.size()).unwrap_or(u64::MAX);
        let cell = u64::from(config.cell_size);
        let grid_px = size.saturating_mul(cell);
        Self {
            config,
            size,
            cell,
            grid_px,
            width: grid_px,
            height: grid_px.saturating_add(u64::from(config.footer_height)),
        }
    }

    fn center(&self, pos: Position) -> (u64, u64) {
        let half = self.cell / 2;
        let axis = |i: usize| {
            u64::try_from(i)
                .unwrap_or(u64::MAX)
                .saturating_mul(self.cell)
                .saturating_add(half)
        };
        (axis(pos.col), axis(pos.row))
    }

    /// Text baseline sits slightly below the cell centre
    fn text_anchor(&self, pos: Position) -> (u64, u64) {
        let (x, y) = self.center(pos);
        (x, y.saturating_add(5))
    }

    fn open<W: Write>(&self, out: &mut W) -> fmt::Result {
        let (width, height) = (self.width, self.height);
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
        )?;
        writeln!(out, r#"  <rect width="{width}" height="{height}" fill="white"/>"#)
    }

    fn close<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "</svg>")
    }

    fn grid_lines<W: Write>(&self, out: &mut W) -> fmt::Result {
        for i in 0..=self.size {
            let offset = i.saturating_mul(self.cell);
            writeln!(
                out,
                r#"  <line x1="0" y1="{offset}" x2="{}" y2="{offset}" stroke="black" stroke-width="1"/>"#,
                self.width
            )?;
            writeln!(
                out,
                r#"  <line x1="{offset}" y1="0" x2="{offset}" y2="{}" stroke="black" stroke-width="1"/>"#,
                self.grid_px
            )?;
        }
        Ok(())
    }

    fn letters<W: Write>(&self, out: &mut W, puzzle: &Puzzle, fill: Option<&str>) -> fmt::Result {
        let font_size = self.config.cell_size / 2;
        let fill = fill
            .map(|color| format!(r#" fill="{}""#, escape(color)))
            .unwrap_or_default();
        for (row, cells) in puzzle.grid.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let Some(letter) = cell else {
                    continue;
                };
                let (x, y) = self.text_anchor(Position::new(row, col));
                writeln!(
                    out,
                    r#"  <text x="{x}" y="{y}" font-family="{}" font-size="{font_size}" text-anchor="middle"{fill}>{}</text>"#,
                    escape(&self.config.font_family),
                    escape_char(*letter)
                )?;
            }
        }
        Ok(())
    }

    /// Alphabetical word list under the grid, `words_per_column` per column
    fn word_list<W: Write>(
        &self,
        out: &mut W,
        puzzle: &Puzzle,
        heading: &str,
        colored: bool,
    ) -> fmt::Result {
        let family = escape(&self.config.font_family);
        writeln!(
            out,
            r#"  <text x="10" y="{}" font-family="{family}" font-size="16" font-weight="bold">{}</text>"#,
            self.grid_px.saturating_add(30),
            escape(heading)
        )?;

        let words = puzzle.word_list();
        let per_column = self.config.words_per_column.max(1);
        let columns = u64::try_from(words.len() / per_column + 1).unwrap_or(u64::MAX);
        let column_width = self.width / columns;

        for (i, (placement_index, word)) in words.iter().enumerate() {
            let column = u64::try_from(i / per_column).unwrap_or(u64::MAX);
            let line = u64::try_from(i % per_column).unwrap_or(u64::MAX);
            let x = column.saturating_mul(column_width).saturating_add(10);
            let y = self
                .grid_px
                .saturating_add(50)
                .saturating_add(line.saturating_mul(20));
            let fill = if colored {
                format!(r#" fill="{}""#, self.config.color(*placement_index))
            } else {
                String::new()
            };
            writeln!(
                out,
                r#"  <text x="{x}" y="{y}" font-family="{family}" font-size="14"{fill}>{}</text>"#,
                escape(word)
            )?;
        }
        Ok(())
    }
}

/// Highlight band at 80% of the cell, in whole tenths of a pixel
fn band_width(cell_size: u32) -> String {
    let tenths = u64::from(cell_size) * 8;
    match tenths % 10 {
        0 => (tenths / 10).to_string(),
        frac => format!("{}.{frac}", tenths / 10),
    }
}

fn escape_char(ch: char) -> String {
    let mut buf = [0u8; 4];
    escape(ch.encode_utf8(&mut buf))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, Generator, GeneratorConfig, Grid, PlacedWord, WordOutcome};

    fn hand_built() -> Puzzle {
        let mut grid = Grid::new(3);
        let cab = grid.place("CAB", Position::new(0, 0), Direction::Right);
        let at = grid.place("AT", Position::new(0, 1), Direction::Down);
        let outcome = |word: &str, direction, path| WordOutcome {
            word: word.to_string(),
            attempts: 1,
            placement: Some(PlacedWord {
                word: word.to_string(),
                direction,
                path,
            }),
        };
        Puzzle {
            seed: 0,
            grid,
            outcomes: vec![
                outcome("CAB", Direction::Right, cab),
                outcome("AT", Direction::Down, at),
            ],
        }
    }

    #[test]
    fn test_puzzle_svg_structure() {
        let svg = render_puzzle_svg(&hand_built(), &SvgConfig::default());

        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="220">"#));
        assert!(svg.trim_end().ends_with("</svg>"));
        // 4 horizontal + 4 vertical grid lines
        assert_eq!(svg.matches("<line").count(), 8);
        assert!(svg.contains(">Words to find:</text>"));
        // Letter C at (0, 0): centre 20, baseline 25
        assert!(svg.contains(r#"<text x="20" y="25" font-family="Arial" font-size="20" text-anchor="middle">C</text>"#));
        // Sorted word list
        let at = svg.find(">AT</text>").unwrap();
        let cab = svg.find(">CAB</text>").unwrap();
        assert!(at < cab);
        assert!(!svg.contains("stroke-opacity"));
    }

    #[test]
    fn test_solution_svg_highlights_paths() {
        let svg = render_solution_svg(&hand_built(), &SvgConfig::default());

        assert!(svg.contains(">Solution:</text>"));
        assert!(svg.contains(r##"fill="#CCCCCC">C</text>"##));
        // CAB runs (0,0) -> (0,2) in the first colour
        assert!(svg.contains(
            r##"<line x1="20" y1="20" x2="100" y2="20" stroke="#FF0000" stroke-width="32" stroke-opacity="0.3" stroke-linecap="round"/>"##
        ));
        // AT runs (0,1) -> (1,1) in the second colour
        assert!(svg.contains(
            r##"<line x1="60" y1="20" x2="60" y2="60" stroke="#00AA00" stroke-width="3" stroke-linecap="round"/>"##
        ));
    }

    #[test]
    fn test_word_list_colors_match_paths() {
        let svg = render_solution_svg(&hand_built(), &SvgConfig::default());
        assert!(svg.contains(r##"font-size="14" fill="#FF0000">CAB</text>"##));
        assert!(svg.contains(r##"font-size="14" fill="#00AA00">AT</text>"##));
    }

    #[test]
    fn test_palette_cycles() {
        let config = SvgConfig::default();
        assert_eq!(config.color(0), config.color(10));
        assert_ne!(config.color(0), config.color(1));
    }

    #[test]
    fn test_band_width_has_no_float_noise() {
        assert_eq!(band_width(40), "32");
        assert_eq!(band_width(41), "32.8");
        assert_eq!(band_width(1), "0.8");

        let svg = render_solution_svg(&hand_built(), &SvgConfig::with_cell_size(41));
        assert!(svg.contains(r#"stroke-width="32.8" stroke-opacity="0.3""#));
    }

    #[test]
    fn test_huge_cell_size_does_not_overflow() {
        let mut generator = Generator::with_config_and_seed(GeneratorConfig::new(15, 100), 4);
        let puzzle = generator.generate(&["OVERFLOW", "CANVAS"]).unwrap();
        let config = SvgConfig::with_cell_size(400_000_000);
        assert!(config.validate(puzzle.size()).is_err());

        let svg = render_puzzle_svg(&puzzle, &config);
        assert!(svg.contains(r#"width="6000000000""#));
        assert!(svg.contains(r#"y1="6000000000""#));
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(escape("<A&B>"), "&lt;A&amp;B&gt;");
        assert_eq!(escape_char('&'), "&amp;");
    }

    #[test]
    fn test_generated_puzzle_renders_every_cell() {
        let mut generator = Generator::with_config_and_seed(GeneratorConfig::new(6, 100), 21);
        let puzzle = generator.generate(&["SVG", "GRID", "LINE"]).unwrap();
        let svg = render_puzzle_svg(&puzzle, &SvgConfig::with_cell_size(30));

        assert!(svg.contains(r#"width="180" height="280""#));
        let letters = svg.matches(r#"text-anchor="middle">"#).count();
        assert_eq!(letters, 36);
    }
}
