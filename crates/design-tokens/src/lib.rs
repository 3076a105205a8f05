//! Design token tables for Tailwind Stylegen
//!
//! This crate holds the static catalogs that style generation expands into
//! named style artifacts: typography, color palettes, gradient directions,
//! spacing/radius/opacity scales, shadow and blur presets, and container
//! breakpoints.
//!
//! # Modules
//!
//! - [`typography`] - Font sizes and font weights
//! - [`palette`] - Color palettes, shades and hex/RGB conversion
//! - [`direction`] - Gradient direction tokens
//! - [`scales`] - Spacing, radius and opacity scales
//! - [`effects`] - Shadow and blur presets
//! - [`layout`] - Container breakpoints
//! - [`catalog`] - The bundled [`TokenCatalog`]
//!
//! # Example
//!
//! ```rust
//! use design_tokens::{Shade, TokenCatalog};
//!
//! let catalog = TokenCatalog::tailwind();
//! assert_eq!(catalog.font_sizes.len(), 13);
//!
//! let blue = catalog.palette("blue").unwrap();
//! assert_eq!(blue.shade(Shade::S500).hex, "#3B82F6");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod direction;
pub mod effects;
pub mod layout;
pub mod palette;
pub mod scales;
pub mod typography;

use thiserror::Error;

pub use catalog::TokenCatalog;
pub use direction::GradientDirection;
pub use effects::{BlendMode, BlurToken, Effect, EffectKind, Offset, ShadowToken};
pub use layout::ContainerSize;
pub use palette::{parse_hex, ColorShade, PaletteEntry, Rgb, Rgba, Shade};
pub use scales::ScaleToken;
pub use typography::{FontSizeToken, FontWeightToken};

/// Token lookup and parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Container size key is not one of the known breakpoints
    #[error("Unknown container size: {0}")]
    UnknownContainerSize(String),

    /// Hex color string could not be parsed
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
}

/// Result type for token operations
pub type Result<T> = std::result::Result<T, TokenError>;
