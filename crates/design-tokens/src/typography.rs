//! Typography tokens
//!
//! Font sizes carry their pixel line heights; font weights carry the style
//! name used to load the font variant from the host.

use serde::Serialize;

// =============================================================================
// Font Size Scale
// =============================================================================

/// A named font size with its line height, both in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSizeToken {
    /// Size key (e.g. "lg")
    pub name: &'static str,
    /// Font size in pixels
    pub size: f64,
    /// Line height in pixels
    pub line_height: f64,
}

impl FontSizeToken {
    const fn new(name: &'static str, size: f64, line_height: f64) -> Self {
        Self {
            name,
            size,
            line_height,
        }
    }
}

/// Font size scale, smallest first
pub const FONT_SIZES: &[FontSizeToken] = &[
    FontSizeToken::new("xs", 12.0, 16.0),
    FontSizeToken::new("sm", 14.0, 20.0),
    FontSizeToken::new("base", 16.0, 24.0),
    FontSizeToken::new("lg", 18.0, 28.0),
    FontSizeToken::new("xl", 20.0, 28.0),
    FontSizeToken::new("2xl", 24.0, 32.0),
    FontSizeToken::new("3xl", 30.0, 36.0),
    FontSizeToken::new("4xl", 36.0, 40.0),
    FontSizeToken::new("5xl", 48.0, 48.0),
    FontSizeToken::new("6xl", 60.0, 60.0),
    FontSizeToken::new("7xl", 72.0, 72.0),
    FontSizeToken::new("8xl", 96.0, 96.0),
    FontSizeToken::new("9xl", 128.0, 128.0),
];

// =============================================================================
// Font Weights
// =============================================================================

/// A font weight, named the way font files name their styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FontWeightToken {
    /// Style name (e.g. "SemiBold")
    pub name: &'static str,
    /// Numeric weight (100-900)
    pub weight: u16,
}

impl FontWeightToken {
    const fn new(name: &'static str, weight: u16) -> Self {
        Self { name, weight }
    }

    /// Lowercased style name used as the style-name suffix
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Font weights, lightest first
pub const FONT_WEIGHTS: &[FontWeightToken] = &[
    FontWeightToken::new("Thin", 100),
    FontWeightToken::new("ExtraLight", 200),
    FontWeightToken::new("Light", 300),
    FontWeightToken::new("Regular", 400),
    FontWeightToken::new("Medium", 500),
    FontWeightToken::new("SemiBold", 600),
    FontWeightToken::new("Bold", 700),
    FontWeightToken::new("ExtraBold", 800),
    FontWeightToken::new("Black", 900),
];

/// Look up a font size by key
pub fn font_size(name: &str) -> Option<&'static FontSizeToken> {
    FONT_SIZES.iter().find(|t| t.name == name)
}
