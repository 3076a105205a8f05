//! Styling host boundary for Tailwind Stylegen
//!
//! This crate defines what the generation engine hands to the host document:
//! style artifacts, container frames, and the [`StylingHost`] trait that
//! persists them. It also ships [`RecordingHost`], an in-memory host that
//! records every call.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artifact;
pub mod frame;
pub mod host;
pub mod recording;

pub use artifact::{
    FontName, GradientStop, LineHeight, LinearGradient, StyleArtifact, StyleKind, StylePayload,
    Transform,
};
pub use frame::{FrameSpec, GridAlignment, GridPattern, LayoutGrid, Point, SizingMode, Viewport};
pub use host::{HostError, NotifyLevel, Result, StylingHost};
pub use recording::{HostCall, RecordingHost};
