//! Generation orchestrator
//!
//! Runs the enabled categories of a request strictly in sequence against a
//! single host session. The first failure abandons the remaining categories;
//! styles already created stay in the document. Whatever the outcome, the
//! user is notified and the session is closed.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use design_tokens::TokenCatalog;
use futures::FutureExt;
use serde::Serialize;
use style_host::{NotifyLevel, StyleArtifact, StylingHost};

use crate::config::EngineConfig;
use crate::container::plan_container_frame;
use crate::error::{GenerateError, Result};
use crate::expander;
use crate::fonts::resolve_fonts;
use crate::gradient::expand_gradient_styles;
use crate::messages::{GenerationRequest, UiMessage};

// =============================================================================
// Categories and States
// =============================================================================

/// A category of generated output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleCategory {
    /// Text styles
    Typography,
    /// Shadow effect styles
    Shadow,
    /// Solid color styles
    Color,
    /// Container frame
    Container,
    /// Spacing styles
    Spacing,
    /// Border radius styles
    Radius,
    /// Blur effect styles
    Blur,
    /// Gradient styles
    Gradient,
    /// Opacity styles
    Opacity,
}

impl StyleCategory {
    /// Execution order
    pub const ORDER: [StyleCategory; 9] = [
        StyleCategory::Typography,
        StyleCategory::Shadow,
        StyleCategory::Color,
        StyleCategory::Container,
        StyleCategory::Spacing,
        StyleCategory::Radius,
        StyleCategory::Blur,
        StyleCategory::Gradient,
        StyleCategory::Opacity,
    ];

    /// Category name
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleCategory::Typography => "typography",
            StyleCategory::Shadow => "shadow",
            StyleCategory::Color => "color",
            StyleCategory::Container => "container",
            StyleCategory::Spacing => "spacing",
            StyleCategory::Radius => "radius",
            StyleCategory::Blur => "blur",
            StyleCategory::Gradient => "gradient",
            StyleCategory::Opacity => "opacity",
        }
    }
}

impl std::fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orchestrator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationState {
    /// Waiting for a request
    Idle,
    /// Running categories
    Running,
    /// Every enabled category finished
    Completed,
    /// A category failed
    Failed,
}

/// Outcome of one request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    /// Terminal state reached (`Completed` or `Failed`)
    pub state: GenerationState,
    /// Categories that ran to completion, in order
    pub completed: Vec<StyleCategory>,
    /// Styles created across all categories
    pub styles_created: usize,
    /// Frames created
    pub frames_created: usize,
    /// Failure message, if the request failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationReport {
    fn new() -> Self {
        Self {
            state: GenerationState::Running,
            completed: Vec::new(),
            styles_created: 0,
            frames_created: 0,
            error: None,
        }
    }

    /// Whether the request completed
    pub fn is_success(&self) -> bool {
        self.state == GenerationState::Completed
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        format!("panic: {}", message)
    } else if let Some(message) = panic.downcast_ref::<String>() {
        format!("panic: {}", message)
    } else {
        "panic during generation".to_string()
    }
}

// =============================================================================
// Orchestrator
// =============================================================================

/// Drives one host session through a generation request
pub struct Orchestrator<'a, H: StylingHost + ?Sized> {
    host: &'a H,
    catalog: TokenCatalog,
    config: EngineConfig,
    state: GenerationState,
    transitions: Vec<GenerationState>,
}

impl<'a, H: StylingHost + ?Sized> Orchestrator<'a, H> {
    /// Create an orchestrator with the Tailwind tokens and default configuration
    pub fn new(host: &'a H) -> Self {
        Self {
            host,
            catalog: TokenCatalog::tailwind(),
            config: EngineConfig::default(),
            state: GenerationState::Idle,
            transitions: vec![GenerationState::Idle],
        }
    }

    /// Use a different token catalog
    pub fn with_catalog(mut self, catalog: TokenCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Use a different configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Current state
    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// Every state entered so far, starting with `Idle`
    pub fn transitions(&self) -> &[GenerationState] {
        &self.transitions
    }

    fn transition(&mut self, next: GenerationState) {
        tracing::debug!(from = ?self.state, to = ?next, "State transition");
        self.state = next;
        self.transitions.push(next);
    }

    /// Decode a UI message and run it if it is a generation request
    ///
    /// Returns `Ok(None)` for message types the engine ignores. A `generate`
    /// message whose body does not decode fails the pass like any other
    /// error: the user is notified and the session is closed. Input that is
    /// not a `generate` message and does not decode is returned as
    /// [`GenerateError::InvalidMessage`].
    pub async fn handle_message(&mut self, json: &str) -> Result<Option<GenerationReport>> {
        match UiMessage::parse(json) {
            Ok(UiMessage::Generate(request)) => Ok(Some(self.handle_request(request).await)),
            Ok(UiMessage::Unknown) => {
                tracing::debug!("Ignoring unhandled message");
                Ok(None)
            }
            Err(e) if UiMessage::is_generate(json) => {
                self.transition(GenerationState::Running);
                Ok(Some(self.finish(GenerationReport::new(), Err(e))))
            }
            Err(e) => Err(e),
        }
    }

    /// Run a request, notify the user of the outcome and close the session
    ///
    /// A panic raised while generating is caught and reported as
    /// [`GenerateError::Unexpected`].
    #[tracing::instrument(skip(self, request), fields(font = %request.font))]
    pub async fn handle_request(&mut self, request: GenerationRequest) -> GenerationReport {
        self.transition(GenerationState::Running);

        let mut report = GenerationReport::new();
        let outcome = AssertUnwindSafe(self.run_pipeline(&request, &mut report))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(GenerateError::Unexpected(panic_message(&*panic))));

        self.finish(report, outcome)
    }

    fn finish(&mut self, mut report: GenerationReport, outcome: Result<()>) -> GenerationReport {
        match outcome {
            Ok(()) => {
                tracing::info!(
                    styles = report.styles_created,
                    frames = report.frames_created,
                    "Generation completed"
                );
                self.transition(GenerationState::Completed);
                report.state = GenerationState::Completed;
                self.host.notify(&self.config.success_message, NotifyLevel::Info);
            }
            Err(e) => {
                tracing::error!(error = %e, "Generation failed");
                self.transition(GenerationState::Failed);
                report.state = GenerationState::Failed;
                report.error = Some(e.to_string());
                self.host.notify(&format!("Error: {}", e), NotifyLevel::Error);
            }
        }

        self.host.close();
        self.transition(GenerationState::Idle);
        report
    }

    async fn run_pipeline(&self, request: &GenerationRequest, report: &mut GenerationReport) -> Result<()> {
        for category in request.enabled_categories() {
            tracing::info!(%category, "Generating");
            self.run_category(category, request, report).await?;
            report.completed.push(category);
        }
        Ok(())
    }

    async fn run_category(
        &self,
        category: StyleCategory,
        request: &GenerationRequest,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let catalog = &self.catalog;

        let artifacts = match category {
            StyleCategory::Typography => {
                let loaded = resolve_fonts(self.host, &request.font, catalog.font_weights).await;
                expander::expand_text_styles(catalog.font_sizes, catalog.font_weights, &request.font, &loaded)
            }
            StyleCategory::Shadow => expander::expand_shadow_styles(catalog.shadows),
            StyleCategory::Color => expander::expand_color_styles(catalog.palettes),
            StyleCategory::Container => {
                let frame = plan_container_frame(
                    request.container_size,
                    request.add_grid,
                    &self.host.viewport(),
                    &self.config.frame,
                );
                self.host
                    .create_frame(frame)
                    .await
                    .map_err(GenerateError::FrameCreation)?;
                report.frames_created += 1;
                return Ok(());
            }
            StyleCategory::Spacing => expander::expand_spacing_styles(catalog.spacing),
            StyleCategory::Radius => expander::expand_radius_styles(catalog.radius),
            StyleCategory::Blur => expander::expand_blur_styles(catalog.blurs),
            StyleCategory::Gradient => expand_gradient_styles(catalog.palettes, catalog.gradient_directions),
            StyleCategory::Opacity => expander::expand_opacity_styles(catalog.opacity),
        };

        self.create_styles(category, artifacts, report).await
    }

    async fn create_styles(
        &self,
        category: StyleCategory,
        artifacts: Vec<StyleArtifact>,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let count = artifacts.len();

        for artifact in artifacts {
            let name = artifact.name.clone();
            tracing::debug!(%name, "Creating style");
            self.host
                .create_style(artifact)
                .await
                .map_err(|source| GenerateError::StyleCreation {
                    category,
                    name,
                    source,
                })?;
            report.styles_created += 1;
        }

        tracing::info!(%category, count, "Created styles");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use style_host::{FontName, FrameSpec, HostError, Point, RecordingHost, Viewport};

    mock! {
        pub Host {}

        #[async_trait]
        impl StylingHost for Host {
            async fn list_available_fonts(&self) -> style_host::Result<Vec<FontName>>;
            async fn load_font(&self, font: &FontName) -> style_host::Result<()>;
            async fn create_style(&self, artifact: StyleArtifact) -> style_host::Result<()>;
            fn viewport(&self) -> Viewport;
            async fn create_frame(&self, frame: FrameSpec) -> style_host::Result<()>;
            fn notify(&self, message: &str, level: NotifyLevel);
            fn close(&self);
        }
    }

    // ==========================================================================
    // Mock Host Tests
    // ==========================================================================

    #[tokio::test]
    async fn test_empty_request_completes_without_creation() {
        let mut host = MockHost::new();
        host.expect_create_style().times(0);
        host.expect_create_frame().times(0);
        host.expect_load_font().times(0);
        host.expect_notify()
            .withf(|message, level| message.to_string() == "Generation completed!" && *level == NotifyLevel::Info)
            .times(1)
            .return_const(());
        host.expect_close().times(1).return_const(());

        let mut orchestrator = Orchestrator::new(&host);
        let report = orchestrator.handle_request(GenerationRequest::default()).await;

        assert_eq!(report.state, GenerationState::Completed);
        assert!(report.completed.is_empty());
        assert_eq!(orchestrator.state(), GenerationState::Idle);
    }

    #[tokio::test]
    async fn test_first_failure_abandons_remaining() {
        let mut host = MockHost::new();
        host.expect_create_style()
            .times(1)
            .returning(|_| Err(HostError::Rejected("document is read-only".to_string())));
        host.expect_notify()
            .withf(|message, level| {
                let message = message.to_string();
                message.starts_with("Error: ")
                    && message.contains("document is read-only")
                    && *level == NotifyLevel::Error
            })
            .times(1)
            .return_const(());
        host.expect_close().times(1).return_const(());

        let request = GenerationRequest {
            generate_shadows: true,
            generate_colors: true,
            generate_gradients: true,
            ..Default::default()
        };

        let mut orchestrator = Orchestrator::new(&host);
        let report = orchestrator.handle_request(request).await;

        assert_eq!(report.state, GenerationState::Failed);
        assert!(report.completed.is_empty());
        assert_eq!(report.styles_created, 0);
        assert!(report.error.unwrap().contains("shadow-sm"));
    }

    #[tokio::test]
    async fn test_frame_failure_reported() {
        let mut host = MockHost::new();
        host.expect_viewport()
            .return_const(Viewport::new(800.0, 600.0, Point { x: 0.0, y: 0.0 }));
        host.expect_create_frame()
            .times(1)
            .returning(|_| Err(HostError::Other("no current page".to_string())));
        host.expect_notify()
            .withf(|message, _| {
                message.to_string() == "Error: Failed to create container frame: no current page"
            })
            .times(1)
            .return_const(());
        host.expect_close().times(1).return_const(());

        let request = GenerationRequest {
            generate_container: true,
            ..Default::default()
        };
        let report = Orchestrator::new(&host).handle_request(request).await;
        assert_eq!(report.state, GenerationState::Failed);
    }

    /// Host that panics on style creation and records everything else
    struct PanickingHost {
        inner: RecordingHost,
    }

    #[async_trait]
    impl StylingHost for PanickingHost {
        async fn list_available_fonts(&self) -> style_host::Result<Vec<FontName>> {
            self.inner.list_available_fonts().await
        }

        async fn load_font(&self, font: &FontName) -> style_host::Result<()> {
            self.inner.load_font(font).await
        }

        async fn create_style(&self, _artifact: StyleArtifact) -> style_host::Result<()> {
            panic!("host blew up");
        }

        fn viewport(&self) -> Viewport {
            self.inner.viewport()
        }

        async fn create_frame(&self, frame: FrameSpec) -> style_host::Result<()> {
            self.inner.create_frame(frame).await
        }

        fn notify(&self, message: &str, level: NotifyLevel) {
            self.inner.notify(message, level)
        }

        fn close(&self) {
            self.inner.close()
        }
    }

    #[tokio::test]
    async fn test_panic_still_notifies_and_closes() {
        let host = PanickingHost {
            inner: RecordingHost::new(),
        };
        let request = GenerationRequest {
            generate_container: true,
            generate_blur: true,
            ..Default::default()
        };

        let mut orchestrator = Orchestrator::new(&host);
        let report = orchestrator.handle_request(request).await;

        assert_eq!(report.state, GenerationState::Failed);
        assert_eq!(report.completed, vec![StyleCategory::Container]);
        assert_eq!(report.frames_created, 1);
        assert!(report.error.unwrap().contains("host blew up"));

        let notifications = host.inner.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].1, NotifyLevel::Error);
        assert!(notifications[0].0.starts_with("Error: Unexpected error: panic: host blew up"));
        assert!(host.inner.is_closed());
        assert_eq!(orchestrator.state(), GenerationState::Idle);
    }

    #[test]
    fn test_panic_message_payloads() {
        assert_eq!(panic_message(&"boom"), "panic: boom");
        assert_eq!(panic_message(&"boom".to_string()), "panic: boom");
        assert_eq!(panic_message(&42_u8), "panic during generation");
    }

    // ==========================================================================
    // State Machine Tests
    // ==========================================================================

    #[tokio::test]
    async fn test_transitions_on_success() {
        let host = RecordingHost::new();
        let mut orchestrator = Orchestrator::new(&host);
        orchestrator.handle_request(GenerationRequest::default()).await;

        assert_eq!(
            orchestrator.transitions(),
            &[
                GenerationState::Idle,
                GenerationState::Running,
                GenerationState::Completed,
                GenerationState::Idle,
            ]
        );
    }

    #[tokio::test]
    async fn test_transitions_on_failure() {
        let host = RecordingHost::new().failing_styles_with_prefix("blue-");
        let mut orchestrator = Orchestrator::new(&host);
        let request = GenerationRequest {
            generate_colors: true,
            ..Default::default()
        };
        let report = orchestrator.handle_request(request).await;

        assert_eq!(report.state, GenerationState::Failed);
        assert_eq!(
            orchestrator.transitions(),
            &[
                GenerationState::Idle,
                GenerationState::Running,
                GenerationState::Failed,
                GenerationState::Idle,
            ]
        );
        // gray, red, amber and emerald came before blue
        assert_eq!(report.styles_created, 40);
        assert!(host.is_closed());
    }

    // ==========================================================================
    // Message Tests
    // ==========================================================================

    #[tokio::test]
    async fn test_handle_message_ignores_unknown_types() {
        let host = RecordingHost::new();
        let mut orchestrator = Orchestrator::new(&host);

        let report = orchestrator.handle_message(r#"{ "type": "cancel" }"#).await.unwrap();
        assert!(report.is_none());
        assert!(host.calls().is_empty());
        assert_eq!(orchestrator.transitions(), &[GenerationState::Idle]);
    }

    #[tokio::test]
    async fn test_undecodable_generate_fails_the_pass() {
        let host = RecordingHost::new();
        let mut orchestrator = Orchestrator::new(&host);

        let report = orchestrator
            .handle_message(r#"{ "type": "generate", "generateColors": true, "containerSize": "3xl" }"#)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(report.state, GenerationState::Failed);
        assert_eq!(report.styles_created, 0);
        assert!(report.error.unwrap().starts_with("Invalid message"));
        assert_eq!(host.creation_calls(), 0);

        let notifications = host.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].1, NotifyLevel::Error);
        assert!(notifications[0].0.starts_with("Error: Invalid message"));
        assert!(host.is_closed());
        assert_eq!(
            orchestrator.transitions(),
            &[
                GenerationState::Idle,
                GenerationState::Running,
                GenerationState::Failed,
                GenerationState::Idle,
            ]
        );
    }

    #[tokio::test]
    async fn test_undecodable_other_message_is_returned() {
        let host = RecordingHost::new();
        let mut orchestrator = Orchestrator::new(&host);

        let err = orchestrator.handle_message("{ not json").await.unwrap_err();
        assert!(matches!(err, GenerateError::InvalidMessage(_)));
        assert!(host.calls().is_empty());
        assert_eq!(orchestrator.state(), GenerationState::Idle);
    }

    #[tokio::test]
    async fn test_handle_message_runs_generate() {
        let host = RecordingHost::new();
        let mut orchestrator = Orchestrator::new(&host);

        let report = orchestrator
            .handle_message(r#"{ "type": "generate", "generateRadius": true }"#)
            .await
            .unwrap()
            .unwrap();
        assert!(report.is_success());
        assert_eq!(report.completed, vec![StyleCategory::Radius]);
        assert_eq!(report.styles_created, 8);
    }

    #[tokio::test]
    async fn test_custom_success_message() {
        let host = RecordingHost::new();
        let config = EngineConfig {
            success_message: "Done".to_string(),
            ..Default::default()
        };
        Orchestrator::new(&host)
            .with_config(config)
            .handle_request(GenerationRequest::default())
            .await;
        assert_eq!(host.notifications(), vec![("Done".to_string(), NotifyLevel::Info)]);
    }

    #[test]
    fn test_category_order() {
        let names: Vec<&str> = StyleCategory::ORDER.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "typography",
                "shadow",
                "color",
                "container",
                "spacing",
                "radius",
                "blur",
                "gradient",
                "opacity"
            ]
        );
    }
}
