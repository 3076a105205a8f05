//! Shadow and blur presets
//!
//! Each preset is an ordered list of effect layers, handed to the host
//! verbatim.

use serde::Serialize;

use crate::palette::Rgba;

// =============================================================================
// Effect Layers
// =============================================================================

/// Effect layer type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    /// Shadow cast outside the shape
    DropShadow,
    /// Shadow cast inside the shape
    InnerShadow,
    /// Gaussian blur of the layer itself
    LayerBlur,
}

/// Blend mode of a shadow layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlendMode {
    /// Normal blending
    Normal,
}

/// Shadow offset in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Offset {
    /// Horizontal offset
    pub x: f64,
    /// Vertical offset
    pub y: f64,
}

/// A single effect layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    /// Layer type
    #[serde(rename = "type")]
    pub kind: EffectKind,
    /// Shadow color (shadows only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    /// Shadow offset (shadows only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Offset>,
    /// Blur radius in pixels
    pub radius: f64,
    /// Whether the layer is visible
    pub visible: bool,
    /// Blend mode (shadows only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
}

impl Effect {
    const fn shadow(kind: EffectKind, alpha: f64, y: f64, radius: f64) -> Self {
        Self {
            kind,
            color: Some(Rgba::black(alpha)),
            offset: Some(Offset { x: 0.0, y }),
            radius,
            visible: true,
            blend_mode: Some(BlendMode::Normal),
        }
    }

    /// Black drop shadow, offset vertically
    pub const fn drop_shadow(alpha: f64, y: f64, radius: f64) -> Self {
        Self::shadow(EffectKind::DropShadow, alpha, y, radius)
    }

    /// Black inner shadow, offset vertically
    pub const fn inner_shadow(alpha: f64, y: f64, radius: f64) -> Self {
        Self::shadow(EffectKind::InnerShadow, alpha, y, radius)
    }

    /// Visible layer blur
    pub const fn layer_blur(radius: f64) -> Self {
        Self {
            kind: EffectKind::LayerBlur,
            color: None,
            offset: None,
            radius,
            visible: true,
            blend_mode: None,
        }
    }
}

// =============================================================================
// Shadow Presets
// =============================================================================

/// A named shadow preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowToken {
    /// Preset key (e.g. "md")
    pub name: &'static str,
    /// Layers, bottom-most first
    pub layers: &'static [Effect],
}

/// Shadow presets
pub const SHADOWS: &[ShadowToken] = &[
    ShadowToken {
        name: "sm",
        layers: &[Effect::drop_shadow(0.05, 1.0, 2.0)],
    },
    ShadowToken {
        name: "base",
        layers: &[
            Effect::drop_shadow(0.1, 1.0, 3.0),
            Effect::drop_shadow(0.06, 1.0, 2.0),
        ],
    },
    ShadowToken {
        name: "md",
        layers: &[
            Effect::drop_shadow(0.1, 4.0, 6.0),
            Effect::drop_shadow(0.06, 2.0, 4.0),
        ],
    },
    ShadowToken {
        name: "lg",
        layers: &[
            Effect::drop_shadow(0.1, 10.0, 15.0),
            Effect::drop_shadow(0.05, 4.0, 6.0),
        ],
    },
    ShadowToken {
        name: "xl",
        layers: &[
            Effect::drop_shadow(0.1, 20.0, 25.0),
            Effect::drop_shadow(0.04, 10.0, 10.0),
        ],
    },
    ShadowToken {
        name: "2xl",
        layers: &[Effect::drop_shadow(0.25, 25.0, 50.0)],
    },
    ShadowToken {
        name: "inner",
        layers: &[Effect::inner_shadow(0.06, 2.0, 4.0)],
    },
    ShadowToken {
        name: "none",
        layers: &[],
    },
];

// =============================================================================
// Blur Presets
// =============================================================================

/// A named blur preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlurToken {
    /// Preset key (e.g. "lg")
    pub name: &'static str,
    /// Layers
    pub layers: &'static [Effect],
}

/// Blur presets
pub const BLURS: &[BlurToken] = &[
    BlurToken {
        name: "sm",
        layers: &[Effect::layer_blur(4.0)],
    },
    BlurToken {
        name: "md",
        layers: &[Effect::layer_blur(8.0)],
    },
    BlurToken {
        name: "lg",
        layers: &[Effect::layer_blur(16.0)],
    },
    BlurToken {
        name: "xl",
        layers: &[Effect::layer_blur(24.0)],
    },
];
