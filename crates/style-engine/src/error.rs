//! Generation errors

use style_host::HostError;
use thiserror::Error;

use crate::orchestrator::StyleCategory;

/// Errors that abort a generation request
///
/// Font load failures are not represented here: they are absorbed by the
/// font resolver and only shrink the set of text styles produced.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Host failed to create a style
    #[error("Failed to create {category} style {name}: {source}")]
    StyleCreation {
        /// Category being generated
        category: StyleCategory,
        /// Name of the style that failed
        name: String,
        /// Underlying host error
        #[source]
        source: HostError,
    },

    /// Host failed to create the container frame
    #[error("Failed to create container frame: {0}")]
    FrameCreation(#[source] HostError),

    /// Host could not list its fonts
    #[error("Failed to list fonts: {0}")]
    FontCatalog(#[source] HostError),

    /// UI message could not be decoded
    #[error("Invalid message: {0}")]
    InvalidMessage(#[from] serde_json::Error),

    /// Engine configuration is unusable
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Anything else that went wrong during a pass
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenerateError>;
