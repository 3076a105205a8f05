//! Cartesian style expansion
//!
//! Pure functions from token tables to artifacts. Tables are walked in
//! declaration order, so the same tables (and the same loaded fonts) always
//! produce the same artifacts in the same order.

use design_tokens::{BlurToken, FontSizeToken, FontWeightToken, PaletteEntry, ScaleToken, ShadowToken};
use style_host::{FontName, StyleArtifact, StyleKind};

use crate::fonts::LoadedFontSet;

// =============================================================================
// Typography
// =============================================================================

/// Style name for a text style, e.g. `text-lg/semibold`
pub fn text_style_name(size: &FontSizeToken, weight: &FontWeightToken) -> String {
    format!("text-{}/{}", size.name, weight.slug())
}

/// Text styles for every size and every loaded weight of `family`
///
/// Sizes are the outer loop, weights the inner one. Weights missing from
/// `loaded` are skipped for every size.
pub fn expand_text_styles(
    sizes: &[FontSizeToken],
    weights: &[FontWeightToken],
    family: &str,
    loaded: &LoadedFontSet,
) -> Vec<StyleArtifact> {
    let usable: Vec<&FontWeightToken> = weights.iter().filter(|w| loaded.contains(family, w)).collect();

    for weight in weights.iter().filter(|w| !loaded.contains(family, w)) {
        tracing::debug!(family, weight = weight.name, "Skipping unloaded font");
    }

    sizes
        .iter()
        .flat_map(|size| {
            usable.iter().map(move |weight| {
                StyleArtifact::text(
                    text_style_name(size, weight),
                    FontName::new(family, weight.name),
                    size.size,
                    size.line_height,
                )
            })
        })
        .collect()
}

// =============================================================================
// Color
// =============================================================================

/// Solid paint styles named `{palette}-{shade}`, shades ascending
pub fn expand_color_styles(palettes: &[PaletteEntry]) -> Vec<StyleArtifact> {
    palettes
        .iter()
        .flat_map(|palette| {
            palette
                .shades()
                .map(move |(shade, color)| StyleArtifact::solid(format!("{}-{}", palette.name, shade), color.rgb()))
        })
        .collect()
}

// =============================================================================
// Effects
// =============================================================================

/// Effect styles named `shadow-{name}`, layers copied verbatim
pub fn expand_shadow_styles(shadows: &[ShadowToken]) -> Vec<StyleArtifact> {
    shadows
        .iter()
        .map(|token| StyleArtifact::effects(format!("shadow-{}", token.name), token.layers))
        .collect()
}

/// Effect styles named `blur-{name}`, layers copied verbatim
pub fn expand_blur_styles(blurs: &[BlurToken]) -> Vec<StyleArtifact> {
    blurs
        .iter()
        .map(|token| StyleArtifact::effects(format!("blur-{}", token.name), token.layers))
        .collect()
}

// =============================================================================
// Scalar Scales
// =============================================================================

/// Effect styles named `spacing-{name}` carrying the spacing in pixels
pub fn expand_spacing_styles(spacing: &[ScaleToken]) -> Vec<StyleArtifact> {
    spacing
        .iter()
        .map(|token| StyleArtifact::scalar(format!("spacing-{}", token.name), StyleKind::Effect, token.value))
        .collect()
}

/// Paint styles named `radius-{name}` carrying the radius in pixels
pub fn expand_radius_styles(radius: &[ScaleToken]) -> Vec<StyleArtifact> {
    radius
        .iter()
        .map(|token| {
            StyleArtifact::scalar(format!("radius-{}", token.name), StyleKind::Paint, token.value)
                .with_description(format!("Border radius: {}px", token.value))
        })
        .collect()
}

/// Paint styles named `opacity-{name}` carrying the opacity fraction
pub fn expand_opacity_styles(opacity: &[ScaleToken]) -> Vec<StyleArtifact> {
    opacity
        .iter()
        .map(|token| {
            StyleArtifact::scalar(format!("opacity-{}", token.name), StyleKind::Paint, token.value)
                .with_description(format!("Opacity: {}", token.value))
        })
        .collect()
}
