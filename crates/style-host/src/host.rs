//! The styling host trait
//!
//! The host is the external document the engine writes into. The engine
//! only ever appends: it never reads back the styles it creates.

use async_trait::async_trait;
use thiserror::Error;

use crate::artifact::{FontName, StyleArtifact};
use crate::frame::{FrameSpec, Viewport};

/// Styling host errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// Font variant could not be loaded
    #[error("Font unavailable: {0}")]
    FontUnavailable(String),

    /// Host refused to create a style or node
    #[error("Rejected by host: {0}")]
    Rejected(String),

    /// Session has already been closed
    #[error("Host session closed")]
    Closed,

    /// Any other host failure
    #[error("{0}")]
    Other(String),
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;

/// Severity of a user notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotifyLevel {
    /// Informational message
    Info,
    /// Error message
    Error,
}

/// Document and styling API the engine drives
#[async_trait]
pub trait StylingHost: Send + Sync {
    /// Every font variant installed on the host, possibly with repeated families
    async fn list_available_fonts(&self) -> Result<Vec<FontName>>;

    /// Load a font variant so styles may reference it
    async fn load_font(&self, font: &FontName) -> Result<()>;

    /// Create a named style in the document
    async fn create_style(&self, artifact: StyleArtifact) -> Result<()>;

    /// Current visible region of the canvas
    fn viewport(&self) -> Viewport;

    /// Create a frame on the current page, select it and scroll it into view
    async fn create_frame(&self, frame: FrameSpec) -> Result<()>;

    /// Show a message to the user
    fn notify(&self, message: &str, level: NotifyLevel);

    /// End the session
    fn close(&self);
}
