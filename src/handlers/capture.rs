use base64::{engine::general_purpose, Engine};
use std::sync::Arc;

use crate::error::CaptureError;
use crate::models::CaptureInput;
use crate::services::device::{CameraOptions, CameraResult, Permission};
use crate::services::{CameraService, PermissionService};

const CAMERA_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraCapture {
    Captured(CaptureInput),
    Cancelled, // Usuário fechou a câmera
}

pub struct CaptureCollector {
    permissions: Arc<dyn PermissionService>,
    camera: Arc<dyn CameraService>,
}

impl CaptureCollector {
    pub fn new(permissions: Arc<dyn PermissionService>, camera: Arc<dyn CameraService>) -> Self {
        Self { permissions, camera }
    }

    /// Asks for foreground location once. A denial is reported but never blocks anything.
    pub async fn request_location_access(&self) -> anyhow::Result<bool> {
        let granted = self.permissions.request(Permission::Location).await?;
        if !granted {
            log::warn!("⚠️ Location permission denied, café list stays static");
        }
        Ok(granted)
    }

    pub async fn request_photo_access(&self) -> anyhow::Result<bool> {
        self.permissions.request(Permission::PhotoLibrary).await
    }

    pub async fn request_camera_access(&self) -> anyhow::Result<bool> {
        self.permissions.request(Permission::Camera).await
    }

    pub async fn capture_from_camera(&self, quality: f32) -> Result<CameraCapture, CaptureError> {
        if !(quality > 0.0 && quality <= 1.0) {
            return Err(CaptureError::InvalidQuality(quality));
        }

        if !self.request_photo_access().await? {
            log::warn!("⚠️ Photo library permission denied, aborting capture");
            return Err(CaptureError::PermissionDenied(Permission::PhotoLibrary));
        }
        if !self.request_camera_access().await? {
            log::warn!("⚠️ Camera permission denied, aborting capture");
            return Err(CaptureError::PermissionDenied(Permission::Camera));
        }

        let options = CameraOptions {
            quality,
            allows_editing: true,
        };
        let path = match self.camera.launch(options).await? {
            CameraResult::Captured(path) => path,
            CameraResult::Cancelled => {
                log::info!("📷 Capture cancelled by user");
                return Ok(CameraCapture::Cancelled);
            }
        };

        log::debug!("📸 Reading captured photo: {}", path.display());
        let image_data = tokio::fs::read(&path).await?;
        let encoded_bytes = general_purpose::STANDARD.encode(&image_data);

        log::debug!("📊 Image file size: {} bytes", image_data.len());
        log::debug!("🔄 Base64 encoded size: {} bytes", encoded_bytes.len());

        Ok(CameraCapture::Captured(CaptureInput::Image {
            mime_type: CAMERA_MIME_TYPE.to_string(),
            encoded_bytes,
        }))
    }

    pub fn capture_from_text(&self, value: &str) -> Result<CaptureInput, CaptureError> {
        if value.trim().is_empty() {
            return Err(CaptureError::EmptyInput);
        }
        Ok(CaptureInput::Text {
            value: value.to_string(),
        })
    }
}
