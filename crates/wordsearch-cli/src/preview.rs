//! Colored terminal rendering of a solved puzzle

use crate::theme::Theme;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::collections::HashMap;
use std::io::{self, Write};
use wordsearch_core::{Position, Puzzle};

/// Print the grid with each placed word in its solution color
pub fn render<W: Write>(out: &mut W, puzzle: &Puzzle, theme: &Theme) -> io::Result<()> {
    // First placed word owns a shared cell
    let mut owners: HashMap<Position, usize> = HashMap::new();
    for (index, placed) in puzzle.placed().enumerate() {
        for &pos in &placed.path {
            owners.entry(pos).or_insert(index);
        }
    }

    for (row, cells) in puzzle.grid.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let letter = cell.unwrap_or('.');
            match owners.get(&Position::new(row, col)) {
                Some(&index) => queue!(
                    out,
                    SetForegroundColor(theme.word(index)),
                    SetAttribute(Attribute::Bold),
                    Print(letter),
                    SetAttribute(Attribute::Reset)
                )?,
                None => queue!(out, SetForegroundColor(theme.filler), Print(letter))?,
            }
            queue!(out, Print(' '))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }

    queue!(out, Print('\n'))?;
    heading(out, theme.heading, "Solution:")?;
    for (index, word) in puzzle.word_list() {
        queue!(
            out,
            SetForegroundColor(theme.word(index)),
            Print(format!("  {word}\n"))
        )?;
    }

    let unplaced: Vec<&str> = puzzle.unplaced().collect();
    if !unplaced.is_empty() {
        queue!(out, Print('\n'))?;
        heading(out, theme.warning, "Not placed:")?;
        queue!(
            out,
            SetForegroundColor(theme.warning),
            Print(format!("  {}\n", unplaced.join(", ")))
        )?;
    }

    queue!(out, ResetColor)?;
    out.flush()
}

fn heading<W: Write>(out: &mut W, color: Color, text: &str) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(color),
        SetAttribute(Attribute::Bold),
        Print(text),
        SetAttribute(Attribute::Reset),
        Print('\n')
    )
}
