//! Messages exchanged with the UI
//!
//! The UI sends one `generate` message per session; the engine sends the
//! font catalog once at startup.

use design_tokens::ContainerSize;
use serde::{Deserialize, Serialize};
use style_host::StylingHost;

use crate::error::{GenerateError, Result};
use crate::orchestrator::StyleCategory;

/// A generation request: which categories to produce, plus their parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    /// Generate text styles
    pub generate_styles: bool,
    /// Generate shadow styles
    pub generate_shadows: bool,
    /// Generate color styles
    pub generate_colors: bool,
    /// Create a container frame
    pub generate_container: bool,
    /// Generate spacing styles
    pub generate_spacing: bool,
    /// Generate border radius styles
    pub generate_radius: bool,
    /// Generate blur styles
    pub generate_blur: bool,
    /// Generate gradient styles
    pub generate_gradients: bool,
    /// Generate opacity styles
    pub generate_opacity: bool,
    /// Font family for text styles
    pub font: String,
    /// Container breakpoint
    pub container_size: ContainerSize,
    /// Add a layout grid to the container
    pub add_grid: bool,
}

impl GenerationRequest {
    /// Whether a category's flag is set
    pub fn is_enabled(&self, category: StyleCategory) -> bool {
        match category {
            StyleCategory::Typography => self.generate_styles,
            StyleCategory::Shadow => self.generate_shadows,
            StyleCategory::Color => self.generate_colors,
            StyleCategory::Container => self.generate_container,
            StyleCategory::Spacing => self.generate_spacing,
            StyleCategory::Radius => self.generate_radius,
            StyleCategory::Blur => self.generate_blur,
            StyleCategory::Gradient => self.generate_gradients,
            StyleCategory::Opacity => self.generate_opacity,
        }
    }

    /// Enabled categories in execution order
    pub fn enabled_categories(&self) -> Vec<StyleCategory> {
        StyleCategory::ORDER
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }

    /// Request with every category enabled
    pub fn everything(font: impl Into<String>, container_size: ContainerSize, add_grid: bool) -> Self {
        Self {
            generate_styles: true,
            generate_shadows: true,
            generate_colors: true,
            generate_container: true,
            generate_spacing: true,
            generate_radius: true,
            generate_blur: true,
            generate_gradients: true,
            generate_opacity: true,
            font: font.into(),
            container_size,
            add_grid,
        }
    }
}

/// Inbound UI message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    /// Run a generation pass
    Generate(GenerationRequest),
    /// Any message type the engine does not handle
    #[serde(other)]
    Unknown,
}

impl UiMessage {
    /// Decode a message from JSON
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether `json` is tagged as a `generate` message, even if its body
    /// does not decode
    pub fn is_generate(json: &str) -> bool {
        serde_json::from_str::<serde_json::Value>(json)
            .ok()
            .and_then(|value| value.get("type").and_then(|t| t.as_str()).map(|t| t == "generate"))
            .unwrap_or(false)
    }
}

/// Outbound message to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginMessage {
    /// Font families available on the host
    UpdateFonts {
        /// Distinct family names, in first-seen order
        fonts: Vec<String>,
    },
}

/// Build the font catalog message from the host's installed fonts
pub async fn font_catalog<H>(host: &H) -> Result<PluginMessage>
where
    H: StylingHost + ?Sized,
{
    let fonts = host
        .list_available_fonts()
        .await
        .map_err(GenerateError::FontCatalog)?;

    let mut families: Vec<String> = Vec::new();
    for font in fonts {
        if !families.contains(&font.family) {
            families.push(font.family);
        }
    }

    tracing::info!(families = families.len(), "Collected font catalog");
    Ok(PluginMessage::UpdateFonts { fonts: families })
}
