//! Token-to-style generation engine for Tailwind Stylegen
//!
//! This crate expands the token tables from `design-tokens` into named style
//! artifacts and drives a [`style_host::StylingHost`] to create them.
//!
//! # Pipeline
//!
//! 1. A [`GenerationRequest`] arrives from the UI (see [`messages`]).
//! 2. The [`Orchestrator`] runs each enabled category in a fixed order,
//!    stopping at the first failure.
//! 3. Text styles first go through [`fonts::resolve_fonts`], which decides
//!    which weights of the selected family are usable.
//! 4. The [`expander`] and [`gradient`] modules turn tables into artifacts;
//!    [`container`] plans the layout frame.
//! 5. The orchestrator notifies the user and closes the session, whatever
//!    the outcome.
//!
//! # Example
//!
//! ```rust
//! use style_engine::{GenerationRequest, Orchestrator, GenerationState};
//! use style_host::RecordingHost;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let host = RecordingHost::new();
//! let mut orchestrator = Orchestrator::new(&host);
//! let report = orchestrator.handle_request(GenerationRequest::default()).await;
//! assert_eq!(report.state, GenerationState::Completed);
//! assert!(host.is_closed());
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod container;
pub mod error;
pub mod expander;
pub mod fonts;
pub mod gradient;
pub mod messages;
pub mod orchestrator;

pub use config::{EngineConfig, FrameConfig};
pub use container::plan_container_frame;
pub use error::{GenerateError, Result};
pub use fonts::{resolve_fonts, FontLoadReport, LoadedFontSet};
pub use messages::{font_catalog, GenerationRequest, PluginMessage, UiMessage};
pub use orchestrator::{GenerationReport, GenerationState, Orchestrator, StyleCategory};
