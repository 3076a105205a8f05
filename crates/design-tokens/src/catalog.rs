//! Token catalog
//!
//! Bundles every token table so generators receive them as injected,
//! read-only data rather than reaching for module constants.

use crate::direction::GradientDirection;
use crate::effects::{BlurToken, ShadowToken, BLURS, SHADOWS};
use crate::palette::{PaletteEntry, PALETTES};
use crate::scales::{ScaleToken, OPACITY, RADIUS, SPACING};
use crate::typography::{FontSizeToken, FontWeightToken, FONT_SIZES, FONT_WEIGHTS};

/// Read-only view over all token tables
#[derive(Debug, Clone, Copy)]
pub struct TokenCatalog {
    /// Font sizes
    pub font_sizes: &'static [FontSizeToken],
    /// Font weights
    pub font_weights: &'static [FontWeightToken],
    /// Color palettes
    pub palettes: &'static [PaletteEntry],
    /// Gradient directions
    pub gradient_directions: &'static [GradientDirection],
    /// Spacing scale
    pub spacing: &'static [ScaleToken],
    /// Border radius scale
    pub radius: &'static [ScaleToken],
    /// Opacity scale
    pub opacity: &'static [ScaleToken],
    /// Shadow presets
    pub shadows: &'static [ShadowToken],
    /// Blur presets
    pub blurs: &'static [BlurToken],
}

impl TokenCatalog {
    /// The Tailwind default token set
    pub const fn tailwind() -> Self {
        Self {
            font_sizes: FONT_SIZES,
            font_weights: FONT_WEIGHTS,
            palettes: PALETTES,
            gradient_directions: &GradientDirection::ALL,
            spacing: SPACING,
            radius: RADIUS,
            opacity: OPACITY,
            shadows: SHADOWS,
            blurs: BLURS,
        }
    }

    /// Look up a palette by name
    pub fn palette(&self, name: &str) -> Option<&'static PaletteEntry> {
        self.palettes.iter().find(|p| p.name == name)
    }
}

impl Default for TokenCatalog {
    fn default() -> Self {
        Self::tailwind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Shade;

    #[test]
    fn test_tailwind_table_sizes() {
        let catalog = TokenCatalog::tailwind();
        assert_eq!(catalog.font_sizes.len(), 13);
        assert_eq!(catalog.font_weights.len(), 9);
        assert_eq!(catalog.palettes.len(), 8);
        assert_eq!(catalog.gradient_directions.len(), 8);
        assert_eq!(catalog.spacing.len(), 15);
        assert_eq!(catalog.radius.len(), 8);
        assert_eq!(catalog.opacity.len(), 12);
        assert_eq!(catalog.shadows.len(), 8);
        assert_eq!(catalog.blurs.len(), 4);
    }

    #[test]
    fn test_palette_lookup() {
        let catalog = TokenCatalog::default();
        let pink = catalog.palette("pink").unwrap();
        assert_eq!(pink.shade(Shade::S900).hex, "#831843");
        assert!(catalog.palette("teal").is_none());
    }
}
