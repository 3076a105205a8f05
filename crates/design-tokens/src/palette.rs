//! Color palettes
//!
//! Each palette carries exactly ten shades, indexed by [`Shade`]. Shades
//! store the hex string alongside its 8-bit channels; normalized RGB is
//! derived from the channels so the two representations can never drift.

use serde::{Deserialize, Serialize};

use crate::{Result, TokenError};

// =============================================================================
// Color Types
// =============================================================================

/// An RGB color with channels normalized to `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
}

impl Rgb {
    /// Create a color from normalized channels
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Attach an alpha channel
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

/// An RGBA color with channels normalized to `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
    /// Alpha channel
    pub a: f64,
}

impl Rgba {
    /// Create a color from normalized channels
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Black at the given alpha
    pub const fn black(a: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, a)
    }
}

/// Parse a `#RRGGBB` hex string into 8-bit channels
pub fn parse_hex(hex: &str) -> Result<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(TokenError::InvalidHex(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| TokenError::InvalidHex(hex.to_string()))
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

// =============================================================================
// Shades
// =============================================================================

/// One step of a palette's color ramp, lightest (50) to darkest (900)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Shade {
    /// 50
    #[serde(rename = "50")]
    S50,
    /// 100
    #[serde(rename = "100")]
    S100,
    /// 200
    #[serde(rename = "200")]
    S200,
    /// 300
    #[serde(rename = "300")]
    S300,
    /// 400
    #[serde(rename = "400")]
    S400,
    /// 500
    #[serde(rename = "500")]
    S500,
    /// 600
    #[serde(rename = "600")]
    S600,
    /// 700
    #[serde(rename = "700")]
    S700,
    /// 800
    #[serde(rename = "800")]
    S800,
    /// 900
    #[serde(rename = "900")]
    S900,
}

impl Shade {
    /// All shades in ascending order
    pub const ALL: [Shade; 10] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
    ];

    /// Shade key as used in style names
    pub fn as_str(&self) -> &'static str {
        match self {
            Shade::S50 => "50",
            Shade::S100 => "100",
            Shade::S200 => "200",
            Shade::S300 => "300",
            Shade::S400 => "400",
            Shade::S500 => "500",
            Shade::S600 => "600",
            Shade::S700 => "700",
            Shade::S800 => "800",
            Shade::S900 => "900",
        }
    }

    /// Numeric value of the shade
    pub fn value(&self) -> u16 {
        match self {
            Shade::S50 => 50,
            other => other.index() as u16 * 100,
        }
    }

    /// Position of the shade in [`Shade::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Adjacent `(lower, higher)` shade pairs in ascending order
    pub fn adjacent_pairs() -> impl Iterator<Item = (Shade, Shade)> {
        Self::ALL.windows(2).map(|w| (w[0], w[1]))
    }
}

impl std::fmt::Display for Shade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorShade {
    /// Hex string (`#RRGGBB`)
    pub hex: &'static str,
    /// 8-bit channels
    pub channels: (u8, u8, u8),
}

impl ColorShade {
    const fn new(hex: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            hex,
            channels: (r, g, b),
        }
    }

    /// Normalized RGB of the shade
    pub fn rgb(&self) -> Rgb {
        let (r, g, b) = self.channels;
        Rgb::from_u8(r, g, b)
    }
}

/// A named palette with its ten shades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    /// Palette name (e.g. "blue")
    pub name: &'static str,
    shades: [ColorShade; 10],
}

impl PaletteEntry {
    const fn new(name: &'static str, shades: [ColorShade; 10]) -> Self {
        Self { name, shades }
    }

    /// Color for a shade
    pub fn shade(&self, shade: Shade) -> &ColorShade {
        &self.shades[shade.index()]
    }

    /// Shades with their colors in ascending order
    pub fn shades(&self) -> impl Iterator<Item = (Shade, &ColorShade)> {
        Shade::ALL.iter().map(move |s| (*s, self.shade(*s)))
    }
}

// =============================================================================
// Palettes
// =============================================================================

/// Palettes in declaration order
pub const PALETTES: &[PaletteEntry] = &[
    PaletteEntry::new(
        "gray",
        [
            ColorShade::new("#F9FAFB", 249, 250, 251),
            ColorShade::new("#F3F4F6", 243, 244, 246),
            ColorShade::new("#E5E7EB", 229, 231, 235),
            ColorShade::new("#D1D5DB", 209, 213, 219),
            ColorShade::new("#9CA3AF", 156, 163, 175),
            ColorShade::new("#6B7280", 107, 114, 128),
            ColorShade::new("#4B5563", 75, 85, 99),
            ColorShade::new("#374151", 55, 65, 81),
            ColorShade::new("#1F2937", 31, 41, 55),
            ColorShade::new("#111827", 17, 24, 39),
        ],
    ),
    PaletteEntry::new(
        "red",
        [
            ColorShade::new("#FEF2F2", 254, 242, 242),
            ColorShade::new("#FEE2E2", 254, 226, 226),
            ColorShade::new("#FECACA", 254, 202, 202),
            ColorShade::new("#FCA5A5", 252, 165, 165),
            ColorShade::new("#F87171", 248, 113, 113),
            ColorShade::new("#EF4444", 239, 68, 68),
            ColorShade::new("#DC2626", 220, 38, 38),
            ColorShade::new("#B91C1C", 185, 28, 28),
            ColorShade::new("#991B1B", 153, 27, 27),
            ColorShade::new("#7F1D1D", 127, 29, 29),
        ],
    ),
    PaletteEntry::new(
        "amber",
        [
            ColorShade::new("#FFFBEB", 255, 251, 235),
            ColorShade::new("#FEF3C7", 254, 243, 199),
            ColorShade::new("#FDE68A", 253, 230, 138),
            ColorShade::new("#FCD34D", 252, 211, 77),
            ColorShade::new("#FBBF24", 251, 191, 36),
            ColorShade::new("#F59E0B", 245, 158, 11),
            ColorShade::new("#D97706", 217, 119, 6),
            ColorShade::new("#B45309", 180, 83, 9),
            ColorShade::new("#92400E", 146, 64, 14),
            ColorShade::new("#78350F", 120, 53, 15),
        ],
    ),
    PaletteEntry::new(
        "emerald",
        [
            ColorShade::new("#ECFDF5", 236, 253, 245),
            ColorShade::new("#D1FAE5", 209, 250, 229),
            ColorShade::new("#A7F3D0", 167, 243, 208),
            ColorShade::new("#6EE7B7", 110, 231, 183),
            ColorShade::new("#34D399", 52, 211, 153),
            ColorShade::new("#10B981", 16, 185, 129),
            ColorShade::new("#059669", 5, 150, 105),
            ColorShade::new("#047857", 4, 120, 87),
            ColorShade::new("#065F46", 6, 95, 70),
            ColorShade::new("#064E3B", 6, 78, 59),
        ],
    ),
    PaletteEntry::new(
        "blue",
        [
            ColorShade::new("#EFF6FF", 239, 246, 255),
            ColorShade::new("#DBEAFE", 219, 234, 254),
            ColorShade::new("#BFDBFE", 191, 219, 254),
            ColorShade::new("#93C5FD", 147, 197, 253),
            ColorShade::new("#60A5FA", 96, 165, 250),
            ColorShade::new("#3B82F6", 59, 130, 246),
            ColorShade::new("#2563EB", 37, 99, 235),
            ColorShade::new("#1D4ED8", 29, 78, 216),
            ColorShade::new("#1E40AF", 30, 64, 175),
            ColorShade::new("#1E3A8A", 30, 58, 138),
        ],
    ),
    PaletteEntry::new(
        "indigo",
        [
            ColorShade::new("#EEF2FF", 238, 242, 255),
            ColorShade::new("#E0E7FF", 224, 231, 255),
            ColorShade::new("#C7D2FE", 199, 210, 254),
            ColorShade::new("#A5B4FC", 165, 180, 252),
            ColorShade::new("#818CF8", 129, 140, 248),
            ColorShade::new("#6366F1", 99, 102, 241),
            ColorShade::new("#4F46E5", 79, 70, 229),
            ColorShade::new("#4338CA", 67, 56, 202),
            ColorShade::new("#3730A3", 55, 48, 163),
            ColorShade::new("#312E81", 49, 46, 129),
        ],
    ),
    PaletteEntry::new(
        "violet",
        [
            ColorShade::new("#F5F3FF", 245, 243, 255),
            ColorShade::new("#EDE9FE", 237, 233, 254),
            ColorShade::new("#DDD6FE", 221, 214, 254),
            ColorShade::new("#C4B5FD", 196, 181, 253),
            ColorShade::new("#A78BFA", 167, 139, 250),
            ColorShade::new("#8B5CF6", 139, 92, 246),
            ColorShade::new("#7C3AED", 124, 58, 237),
            ColorShade::new("#6D28D9", 109, 40, 217),
            ColorShade::new("#5B21B6", 91, 33, 182),
            ColorShade::new("#4C1D95", 76, 29, 149),
        ],
    ),
    PaletteEntry::new(
        "pink",
        [
            ColorShade::new("#FDF2F8", 253, 242, 248),
            ColorShade::new("#FCE7F3", 252, 231, 243),
            ColorShade::new("#FBCFE8", 251, 207, 232),
            ColorShade::new("#F9A8D4", 249, 168, 212),
            ColorShade::new("#F472B6", 244, 114, 182),
            ColorShade::new("#EC4899", 236, 72, 153),
            ColorShade::new("#DB2777", 219, 39, 119),
            ColorShade::new("#BE185D", 190, 24, 93),
            ColorShade::new("#9D174D", 157, 23, 77),
            ColorShade::new("#831843", 131, 24, 67),
        ],
    ),
];
