//! Scalar token scales: spacing, border radius and opacity

use serde::Serialize;

/// A named scalar token
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleToken {
    /// Token key (e.g. "0.5", "full")
    pub name: &'static str,
    /// Token value
    pub value: f64,
}

impl ScaleToken {
    const fn new(name: &'static str, value: f64) -> Self {
        Self { name, value }
    }
}

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels, based on a 4px unit
pub const SPACING: &[ScaleToken] = &[
    ScaleToken::new("px", 1.0),
    ScaleToken::new("0", 0.0),
    ScaleToken::new("0.5", 2.0),
    ScaleToken::new("1", 4.0),
    ScaleToken::new("2", 8.0),
    ScaleToken::new("3", 12.0),
    ScaleToken::new("4", 16.0),
    ScaleToken::new("5", 20.0),
    ScaleToken::new("6", 24.0),
    ScaleToken::new("8", 32.0),
    ScaleToken::new("10", 40.0),
    ScaleToken::new("12", 48.0),
    ScaleToken::new("16", 64.0),
    ScaleToken::new("20", 80.0),
    ScaleToken::new("24", 96.0),
];

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius scale in pixels
pub const RADIUS: &[ScaleToken] = &[
    ScaleToken::new("none", 0.0),
    ScaleToken::new("sm", 2.0),
    ScaleToken::new("md", 6.0),
    ScaleToken::new("lg", 8.0),
    ScaleToken::new("xl", 12.0),
    ScaleToken::new("2xl", 16.0),
    ScaleToken::new("3xl", 24.0),
    ScaleToken::new("full", 9999.0),
];

// =============================================================================
// Opacity Tokens
// =============================================================================

/// Opacity scale, keyed by percentage
pub const OPACITY: &[ScaleToken] = &[
    ScaleToken::new("0", 0.0),
    ScaleToken::new("5", 0.05),
    ScaleToken::new("10", 0.1),
    ScaleToken::new("20", 0.2),
    ScaleToken::new("30", 0.3),
    ScaleToken::new("40", 0.4),
    ScaleToken::new("50", 0.5),
    ScaleToken::new("60", 0.6),
    ScaleToken::new("70", 0.7),
    ScaleToken::new("80", 0.8),
    ScaleToken::new("90", 0.9),
    ScaleToken::new("100", 1.0),
];

/// Look up a token by key
pub fn get(scale: &[ScaleToken], name: &str) -> Option<f64> {
    scale.iter().find(|t| t.name == name).map(|t| t.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_lookup() {
        assert_eq!(get(SPACING, "px"), Some(1.0));
        assert_eq!(get(SPACING, "0.5"), Some(2.0));
        assert_eq!(get(SPACING, "24"), Some(96.0));
        assert_eq!(get(SPACING, "7"), None);
    }

    #[test]
    fn test_numeric_spacing_keys_follow_4px_unit() {
        for token in SPACING.iter().filter(|t| t.name != "px") {
            let steps: f64 = token.name.parse().unwrap();
            assert_eq!(token.value, steps * 4.0, "spacing-{}", token.name);
        }
    }

    #[test]
    fn test_radius_full() {
        assert_eq!(get(RADIUS, "full"), Some(9999.0));
        assert_eq!(RADIUS.len(), 8);
    }

    #[test]
    fn test_opacity_matches_percentage() {
        for token in OPACITY {
            let percent: f64 = token.name.parse().unwrap();
            assert!((token.value - percent / 100.0).abs() < 1e-9, "opacity-{}", token.name);
        }
    }
}
