//! Tailwind Stylegen
//!
//! Generates a design system's text, color, gradient, effect and scale styles
//! from Tailwind token tables and writes them into a host document.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`tokens`] - Token tables (`design-tokens`)
//! - [`host`] - Styling host boundary (`style-host`)
//! - [`engine`] - Generation engine (`style-engine`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use design_tokens as tokens;
pub use style_engine as engine;
pub use style_host as host;

pub use style_engine::{
    font_catalog, EngineConfig, GenerateError, GenerationReport, GenerationRequest, GenerationState,
    Orchestrator, PluginMessage, StyleCategory, UiMessage,
};
pub use style_host::{RecordingHost, StylingHost};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a formatted tracing subscriber filtered by `RUST_LOG` (default `info`)
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
