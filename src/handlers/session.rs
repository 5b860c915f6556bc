use chrono::Utc;
use std::sync::Arc;

use crate::error::CaptureError;
use crate::handlers::capture::{CameraCapture, CaptureCollector};
use crate::models::{CaptureInput, CoffeeDescription, Phase, SessionState};
use crate::services::device::{Alert, Permission};
use crate::services::{AlertService, DescriptionService};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Described(CoffeeDescription),
    Cancelled,
    PermissionDenied(Permission),
    EmptyInput,
    Failed,
}

/// Drives one screen: capture, send, and collapse every failure into an alert.
pub struct SessionController {
    collector: CaptureCollector,
    describer: Arc<dyn DescriptionService>,
    alerts: Arc<dyn AlertService>,
    quality: f32,
}

impl SessionController {
    pub fn new(
        collector: CaptureCollector,
        describer: Arc<dyn DescriptionService>,
        alerts: Arc<dyn AlertService>,
        quality: f32,
    ) -> Self {
        Self {
            collector,
            describer,
            alerts,
            quality,
        }
    }

    /// Screen mount. The location answer is stored but cafés never depend on it.
    pub async fn start(&self, state: &mut SessionState) {
        let granted = match self.collector.request_location_access().await {
            Ok(granted) => granted,
            Err(e) => {
                log::error!("❌ Location prompt failed: {}", e);
                false
            }
        };

        if !granted {
            self.alerts.alert(&Alert::location_denied());
        }
        state.location_granted = Some(granted);
    }

    pub fn set_draft(&self, state: &mut SessionState, text: &str) {
        state.draft = text.to_string();
    }

    pub async fn analyze_text(&self, state: &mut SessionState) -> AnalysisOutcome {
        log::info!("📨 Text analysis requested: '{}'", state.draft);
        state.phase = Phase::Capturing;

        let outcome = match self.collector.capture_from_text(&state.draft) {
            Ok(input) => self.send(state, input).await,
            Err(e) => self.capture_failed(e),
        };

        self.finish(state);
        outcome
    }

    pub async fn analyze_photo(&self, state: &mut SessionState) -> AnalysisOutcome {
        log::info!("📸 Photo analysis requested");
        state.phase = Phase::Capturing;

        let outcome = match self.collector.capture_from_camera(self.quality).await {
            Ok(CameraCapture::Captured(input)) => self.send(state, input).await,
            Ok(CameraCapture::Cancelled) => {
                state.phase = Phase::Cancelled;
                AnalysisOutcome::Cancelled
            }
            Err(e) => self.capture_failed(e),
        };

        self.finish(state);
        outcome
    }

    async fn send(&self, state: &mut SessionState, input: CaptureInput) -> AnalysisOutcome {
        state.phase = Phase::Sending;
        state.loading = true;

        let result = self.describer.describe(&input).await;
        state.loading = false;

        match result {
            Ok(description) => {
                log::info!("✅ Coffee described: {}", description.kind);
                state.phase = Phase::Succeeded;
                state.description = Some(description.clone());
                state.last_result_at = Some(Utc::now());
                AnalysisOutcome::Described(description)
            }
            Err(e) => {
                log::error!("❌ Coffee analysis failed: {}", e);
                state.phase = Phase::Failed;
                self.alerts.alert(&Alert::analysis_failed());
                AnalysisOutcome::Failed
            }
        }
    }

    fn capture_failed(&self, error: CaptureError) -> AnalysisOutcome {
        match error {
            CaptureError::PermissionDenied(permission) => {
                self.alerts.alert(&Alert::permission_denied(permission));
                AnalysisOutcome::PermissionDenied(permission)
            }
            CaptureError::EmptyInput => {
                self.alerts.alert(&Alert::empty_input());
                AnalysisOutcome::EmptyInput
            }
            other => {
                log::error!("❌ Capture failed: {}", other);
                self.alerts.alert(&Alert::analysis_failed());
                AnalysisOutcome::Failed
            }
        }
    }

    fn finish(&self, state: &mut SessionState) {
        log::debug!("🔁 Request finished in phase {}, back to idle", state.phase);
        state.loading = false;
        state.phase = Phase::Idle;
    }
}
