use crossterm::style::Color;
use wordsearch_core::render::PALETTE;

/// Colors for the terminal preview
#[derive(Debug, Clone)]
pub struct Theme {
    /// Letters not covered by any word
    pub filler: Color,
    /// Headings
    pub heading: Color,
    /// Words that could not be placed
    pub warning: Color,
    /// One color per placed word, cycled
    pub words: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::svg_palette()
    }
}

impl Theme {
    /// Same word colors as the SVG solution
    pub fn svg_palette() -> Self {
        Self {
            filler: Color::Rgb { r: 110, g: 110, b: 120 },
            heading: Color::Rgb { r: 230, g: 230, b: 240 },
            warning: Color::Rgb { r: 255, g: 210, b: 100 },
            words: PALETTE.iter().filter_map(|hex| parse_hex(hex)).collect(),
        }
    }

    /// Color for the word at `index` in placement order
    pub fn word(&self, index: usize) -> Color {
        if self.words.is_empty() {
            return self.heading;
        }
        self.words[index % self.words.len()]
    }
}

/// Parse `#RRGGBB`
fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}
