//! In-memory styling host
//!
//! [`RecordingHost`] keeps a log of every call it receives and can be told to
//! fail specific operations, which makes it the host of choice for tests and
//! dry runs.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::artifact::{FontName, StyleArtifact};
use crate::frame::{FrameSpec, Point, Viewport};
use crate::host::{HostError, NotifyLevel, Result, StylingHost};

/// A call received by the [`RecordingHost`]
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    /// Font load attempt and whether it succeeded
    LoadFont(FontName, bool),
    /// Style created
    CreateStyle(StyleArtifact),
    /// Frame created
    CreateFrame(FrameSpec),
    /// User notification
    Notify(String, NotifyLevel),
    /// Session closed
    Close,
}

#[derive(Debug, Default)]
struct Failures {
    fonts: Vec<FontName>,
    style_prefix: Option<String>,
    style_after: Option<usize>,
    frames: bool,
}

#[derive(Debug, Default)]
struct Log {
    calls: Vec<HostCall>,
    styles_created: usize,
    closed: bool,
}

/// Styling host that records calls instead of touching a document
#[derive(Debug)]
pub struct RecordingHost {
    fonts: Vec<FontName>,
    viewport: Viewport,
    failures: Failures,
    log: Mutex<Log>,
}

impl RecordingHost {
    /// Create a host with no fonts and a 1440x900 viewport centered on the origin
    pub fn new() -> Self {
        Self {
            fonts: Vec::new(),
            viewport: Viewport::new(1440.0, 900.0, Point { x: 0.0, y: 0.0 }),
            failures: Failures::default(),
            log: Mutex::new(Log::default()),
        }
    }

    /// Install a font family with the given styles
    pub fn with_family(mut self, family: &str, styles: &[&str]) -> Self {
        self.fonts
            .extend(styles.iter().map(|style| FontName::new(family, *style)));
        self
    }

    /// Set the viewport
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Make loading one font variant fail even though it is installed
    pub fn failing_font(mut self, family: &str, style: &str) -> Self {
        self.failures.fonts.push(FontName::new(family, style));
        self
    }

    /// Reject any style whose name starts with `prefix`
    pub fn failing_styles_with_prefix(mut self, prefix: &str) -> Self {
        self.failures.style_prefix = Some(prefix.to_string());
        self
    }

    /// Reject every style creation after `count` successful ones
    pub fn failing_styles_after(mut self, count: usize) -> Self {
        self.failures.style_after = Some(count);
        self
    }

    /// Reject frame creation
    pub fn failing_frames(mut self) -> Self {
        self.failures.frames = true;
        self
    }

    /// Every call received so far, in order
    pub fn calls(&self) -> Vec<HostCall> {
        self.log.lock().calls.clone()
    }

    /// Styles created so far, in order
    pub fn created_styles(&self) -> Vec<StyleArtifact> {
        self.log
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                HostCall::CreateStyle(artifact) => Some(artifact.clone()),
                _ => None,
            })
            .collect()
    }

    /// Names of the styles created so far, in order
    pub fn style_names(&self) -> Vec<String> {
        self.created_styles().into_iter().map(|a| a.name).collect()
    }

    /// Frames created so far
    pub fn frames(&self) -> Vec<FrameSpec> {
        self.log
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                HostCall::CreateFrame(frame) => Some(frame.clone()),
                _ => None,
            })
            .collect()
    }

    /// Notifications shown so far
    pub fn notifications(&self) -> Vec<(String, NotifyLevel)> {
        self.log
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Notify(message, level) => Some((message.clone(), *level)),
                _ => None,
            })
            .collect()
    }

    /// Number of creation calls (styles and frames) that reached the host
    pub fn creation_calls(&self) -> usize {
        self.log
            .lock()
            .calls
            .iter()
            .filter(|call| matches!(call, HostCall::CreateStyle(_) | HostCall::CreateFrame(_)))
            .count()
    }

    /// Whether the session has been closed
    pub fn is_closed(&self) -> bool {
        self.log.lock().closed
    }

    fn ensure_open(log: &Log) -> Result<()> {
        if log.closed {
            Err(HostError::Closed)
        } else {
            Ok(())
        }
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StylingHost for RecordingHost {
    async fn list_available_fonts(&self) -> Result<Vec<FontName>> {
        Self::ensure_open(&self.log.lock())?;
        Ok(self.fonts.clone())
    }

    async fn load_font(&self, font: &FontName) -> Result<()> {
        let mut log = self.log.lock();
        Self::ensure_open(&log)?;

        let loaded = self.fonts.contains(font) && !self.failures.fonts.contains(font);
        log.calls.push(HostCall::LoadFont(font.clone(), loaded));

        if loaded {
            Ok(())
        } else {
            Err(HostError::FontUnavailable(font.to_string()))
        }
    }

    async fn create_style(&self, artifact: StyleArtifact) -> Result<()> {
        let mut log = self.log.lock();
        Self::ensure_open(&log)?;

        if let Some(prefix) = &self.failures.style_prefix {
            if artifact.name.starts_with(prefix.as_str()) {
                return Err(HostError::Rejected(format!("cannot create style {}", artifact.name)));
            }
        }
        if let Some(limit) = self.failures.style_after {
            if log.styles_created >= limit {
                return Err(HostError::Rejected(format!(
                    "style limit of {} reached",
                    limit
                )));
            }
        }

        tracing::trace!(name = %artifact.name, "Recorded style");
        log.styles_created += 1;
        log.calls.push(HostCall::CreateStyle(artifact));
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    async fn create_frame(&self, frame: FrameSpec) -> Result<()> {
        let mut log = self.log.lock();
        Self::ensure_open(&log)?;

        if self.failures.frames {
            return Err(HostError::Rejected("cannot create frame".to_string()));
        }
        log.calls.push(HostCall::CreateFrame(frame));
        Ok(())
    }

    fn notify(&self, message: &str, level: NotifyLevel) {
        self.log
            .lock()
            .calls
            .push(HostCall::Notify(message.to_string(), level));
    }

    fn close(&self) {
        let mut log = self.log.lock();
        log.closed = true;
        log.calls.push(HostCall::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::StyleKind;

    #[tokio::test]
    async fn test_load_font_installed_and_missing() {
        let host = RecordingHost::new().with_family("Inter", &["Regular", "Bold"]);

        assert!(host.load_font(&FontName::new("Inter", "Bold")).await.is_ok());
        let err = host.load_font(&FontName::new("Inter", "Black")).await.unwrap_err();
        assert_eq!(err, HostError::FontUnavailable("Inter Black".to_string()));

        assert_eq!(
            host.calls(),
            vec![
                HostCall::LoadFont(FontName::new("Inter", "Bold"), true),
                HostCall::LoadFont(FontName::new("Inter", "Black"), false),
            ]
        );
    }

    #[tokio::test]
    async fn test_failing_font_overrides_installed() {
        let host = RecordingHost::new()
            .with_family("Inter", &["Regular"])
            .failing_font("Inter", "Regular");
        assert!(host.load_font(&FontName::new("Inter", "Regular")).await.is_err());
    }

    #[tokio::test]
    async fn test_style_prefix_failure() {
        let host = RecordingHost::new().failing_styles_with_prefix("blur-");

        host.create_style(StyleArtifact::scalar("spacing-1", StyleKind::Effect, 4.0))
            .await
            .unwrap();
        let result = host
            .create_style(StyleArtifact::scalar("blur-sm", StyleKind::Effect, 4.0))
            .await;

        assert!(matches!(result, Err(HostError::Rejected(_))));
        assert_eq!(host.style_names(), vec!["spacing-1".to_string()]);
    }

    #[tokio::test]
    async fn test_style_limit_failure() {
        let host = RecordingHost::new().failing_styles_after(2);
        for i in 0..2 {
            host.create_style(StyleArtifact::scalar(format!("s-{}", i), StyleKind::Paint, 0.0))
                .await
                .unwrap();
        }
        assert!(host
            .create_style(StyleArtifact::scalar("s-2", StyleKind::Paint, 0.0))
            .await
            .is_err());
        assert_eq!(host.creation_calls(), 2);
    }

    #[tokio::test]
    async fn test_closed_host_rejects_calls() {
        let host = RecordingHost::new();
        host.close();

        assert!(host.is_closed());
        let result = host
            .create_style(StyleArtifact::scalar("radius-sm", StyleKind::Paint, 2.0))
            .await;
        assert_eq!(result, Err(HostError::Closed));
    }

    #[tokio::test]
    async fn test_notifications_recorded() {
        let host = RecordingHost::new();
        host.notify("done", NotifyLevel::Info);
        host.notify("Error: boom", NotifyLevel::Error);
        assert_eq!(
            host.notifications(),
            vec![
                ("done".to_string(), NotifyLevel::Info),
                ("Error: boom".to_string(), NotifyLevel::Error),
            ]
        );
    }
}
