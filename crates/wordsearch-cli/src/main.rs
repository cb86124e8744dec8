mod output;
mod preview;
mod settings;
mod theme;

use anyhow::{Context, Result};
use clap::Parser;
use settings::Settings;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use theme::Theme;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use wordsearch_core::{GenerateError, Generator, Rejection, WordList};

#[derive(Parser)]
#[command(name = "wordsearch", version, about = "Generate a word search puzzle as SVG")]
struct Cli {
    /// Text file containing words, one per line
    word_file: PathBuf,

    /// Output SVG file; the solution goes next to it with a `_solution` suffix
    #[arg(short, long, default_value = "wordsearch.svg")]
    output: PathBuf,

    /// Grid size (default: 15)
    #[arg(short, long)]
    size: Option<usize>,

    /// Max attempts to place each word (default: 100)
    #[arg(short, long)]
    attempts: Option<usize>,

    /// Seed to regenerate a puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Pixel size of one grid cell (default: 40)
    #[arg(long)]
    cell_size: Option<u32>,

    /// Also write the grid and word paths as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Print the solution to the terminal
    #[arg(long)]
    preview: bool,

    /// Settings file to read defaults from
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Store the effective size, attempts and cell size as new defaults
    #[arg(long)]
    save_settings: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn settings(&self) -> (Settings, PathBuf) {
        let path = self.config.clone().unwrap_or_else(Settings::default_path);
        let mut settings = Settings::load(&path);
        if let Some(size) = self.size {
            settings.grid_size = size;
        }
        if let Some(attempts) = self.attempts {
            settings.max_attempts = attempts;
        }
        if let Some(cell_size) = self.cell_size {
            settings.cell_size = cell_size;
        }
        (settings, path)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Returns whether a puzzle was produced
fn run(cli: &Cli) -> Result<bool> {
    let (settings, settings_path) = cli.settings();
    let config = settings.generator_config();
    config.validate()?;
    let svg_config = settings.svg_config();
    svg_config.validate(config.size)?;

    // Only settings that passed validation are stored
    if cli.save_settings {
        settings.save(&settings_path)?;
        debug!(path = %settings_path.display(), "saved settings");
    }

    let text = fs::read_to_string(&cli.word_file)
        .with_context(|| format!("reading word list {}", cli.word_file.display()))?;
    let list = WordList::parse(&text, config.size);
    for (word, reason) in &list.rejected {
        match reason {
            Rejection::TooLong => warn!(word, size = config.size, "word longer than grid, skipped"),
            Rejection::Duplicate => debug!(word, "duplicate word skipped"),
        }
    }
    if list.is_empty() {
        println!("No valid words found in the input file.");
        return Ok(false);
    }

    let mut generator = match cli.seed {
        Some(seed) => Generator::with_config_and_seed(config, seed),
        None => Generator::with_config(config),
    };
    let puzzle = match generator.generate(&list.words) {
        Ok(puzzle) => puzzle,
        Err(GenerateError::NothingPlaced { .. }) => {
            println!("Could not place any words. Try reducing word length or increasing grid size.");
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    let written = output::write_all(
        &puzzle,
        &svg_config,
        &cli.output,
        cli.json.as_deref(),
    )?;

    if cli.preview {
        let mut stdout = io::stdout();
        preview::render(&mut stdout, &puzzle, &Theme::default())?;
        println!();
    }

    let placed: Vec<&str> = puzzle.placed().map(|p| p.word.as_str()).collect();
    println!("Word search generated with {} words", placed.len());
    println!("Placed words: {}", placed.join(", "));
    let unplaced: Vec<&str> = puzzle.unplaced().collect();
    if !unplaced.is_empty() {
        println!("Could not place: {}", unplaced.join(", "));
    }
    println!("Puzzle saved to {}", written.puzzle.display());
    println!("Solution saved to {}", written.solution.display());
    if let Some(json) = &written.json {
        println!("JSON saved to {}", json.display());
    }
    println!("Seed: {}", puzzle.seed);

    Ok(true)
}
