//! Style artifacts
//!
//! A [`StyleArtifact`] is a fully-resolved instruction to create one named
//! style in the host document. Artifacts are built by the engine and handed
//! off immediately; nothing keeps them afterwards.

use design_tokens::{Effect, Rgb, Rgba};
use serde::Serialize;

/// Font identity as the host knows it: family plus style name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FontName {
    /// Font family (e.g. "Inter")
    pub family: String,
    /// Style within the family (e.g. "Bold")
    pub style: String,
}

impl FontName {
    /// Create a font name
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl std::fmt::Display for FontName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// Line height with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    /// Absolute line height in pixels
    Pixels(f64),
}

/// 2x3 affine transform, row-major: `[[a, b, tx], [c, d, ty]]`
pub type Transform = [[f64; 3]; 2];

/// A color stop along a gradient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position along the gradient, `0.0..=1.0`
    pub position: f64,
    /// Stop color
    pub color: Rgba,
}

/// Linear gradient paint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearGradient {
    /// Spatial transform of the gradient handles
    pub gradient_transform: Transform,
    /// Color stops, ordered by position
    pub gradient_stops: Vec<GradientStop>,
}

/// Which kind of host style an artifact becomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleKind {
    /// Text style
    Text,
    /// Paint (fill) style
    Paint,
    /// Effect style
    Effect,
}

/// Style contents
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StylePayload {
    /// Text style settings
    #[serde(rename_all = "camelCase")]
    Text {
        /// Resolved font
        font_name: FontName,
        /// Font size in pixels
        font_size: f64,
        /// Line height
        line_height: LineHeight,
    },
    /// Single solid fill
    Solid {
        /// Fill color
        color: Rgb,
    },
    /// Single linear gradient fill
    Gradient(LinearGradient),
    /// Ordered effect layers
    Effects {
        /// Layers, verbatim from the token
        effects: Vec<Effect>,
    },
    /// Bare scalar token value
    Scalar {
        /// Token value
        value: f64,
    },
}

/// A named style ready to be created by the host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleArtifact {
    /// Style name, unique within its category
    pub name: String,
    /// Host style kind
    pub kind: StyleKind,
    /// Optional human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Style contents
    pub payload: StylePayload,
}

impl StyleArtifact {
    /// Text style with a pixel line height
    pub fn text(name: impl Into<String>, font_name: FontName, font_size: f64, line_height_px: f64) -> Self {
        Self {
            name: name.into(),
            kind: StyleKind::Text,
            description: None,
            payload: StylePayload::Text {
                font_name,
                font_size,
                line_height: LineHeight::Pixels(line_height_px),
            },
        }
    }

    /// Paint style with one solid fill
    pub fn solid(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            kind: StyleKind::Paint,
            description: None,
            payload: StylePayload::Solid { color },
        }
    }

    /// Paint style with one linear gradient fill
    pub fn gradient(name: impl Into<String>, gradient: LinearGradient) -> Self {
        Self {
            name: name.into(),
            kind: StyleKind::Paint,
            description: None,
            payload: StylePayload::Gradient(gradient),
        }
    }

    /// Effect style with the given layers
    pub fn effects(name: impl Into<String>, effects: &[Effect]) -> Self {
        Self {
            name: name.into(),
            kind: StyleKind::Effect,
            description: None,
            payload: StylePayload::Effects {
                effects: effects.to_vec(),
            },
        }
    }

    /// Style of the given kind carrying a scalar token value
    pub fn scalar(name: impl Into<String>, kind: StyleKind, value: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            payload: StylePayload::Scalar { value },
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_artifact() {
        let artifact = StyleArtifact::text("text-lg/bold", FontName::new("Inter", "Bold"), 18.0, 28.0);
        assert_eq!(artifact.kind, StyleKind::Text);
        match artifact.payload {
            StylePayload::Text {
                font_name,
                font_size,
                line_height,
            } => {
                assert_eq!(font_name.to_string(), "Inter Bold");
                assert_eq!(font_size, 18.0);
                assert_eq!(line_height, LineHeight::Pixels(28.0));
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_line_height_serialization() {
        let json = serde_json::to_value(LineHeight::Pixels(24.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "unit": "PIXELS", "value": 24.0 }));
    }

    #[test]
    fn test_scalar_with_description() {
        let artifact = StyleArtifact::scalar("radius-md", StyleKind::Paint, 6.0)
            .with_description("Border radius: 6px");
        assert_eq!(artifact.description.as_deref(), Some("Border radius: 6px"));
        assert_eq!(artifact.payload, StylePayload::Scalar { value: 6.0 });
    }

    #[test]
    fn test_payload_tagging() {
        let artifact = StyleArtifact::solid("blue-500", Rgb::from_u8(59, 130, 246));
        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["kind"], "paint");
        assert_eq!(json["payload"]["type"], "solid");
        assert!(json.get("description").is_none());
    }
}
