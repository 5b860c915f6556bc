use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Location,     // Foreground only
    PhotoLibrary,
    Camera,
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Permission::Location => "location",
            Permission::PhotoLibrary => "photo library",
            Permission::Camera => "camera",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOptions {
    pub quality: f32,
    pub allows_editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraResult {
    Captured(PathBuf),
    Cancelled,
}

/// A user-facing alert with a title and body, shown by the UI collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn location_denied() -> Self {
        Self::new("Permissão negada", "Precisamos da localização para indicar cafeterias!")
    }

    pub fn permission_denied(permission: Permission) -> Self {
        let message = match permission {
            Permission::Location => "Precisamos da localização para indicar cafeterias!",
            Permission::PhotoLibrary => "Precisamos acessar suas fotos para analisar o café.",
            Permission::Camera => "Precisamos da câmera para fotografar o café.",
        };
        Self::new("Permissão negada", message)
    }

    pub fn empty_input() -> Self {
        Self::new("Ops!", "Descreva o café primeiro, vovó! 🫢")
    }

    pub fn analysis_failed() -> Self {
        Self::new("Erro", "Não foi possível analisar o café. Tente de novo!")
    }

    fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

/// One-shot permission prompts. Each call asks once, no retries.
#[async_trait::async_trait]
pub trait PermissionService: Send + Sync {
    async fn request(&self, permission: Permission) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait CameraService: Send + Sync {
    async fn launch(&self, options: CameraOptions) -> Result<CameraResult>;
}

pub trait AlertService: Send + Sync {
    fn alert(&self, alert: &Alert);
}

/// Grants or denies from fixed flags, for the terminal front-end.
pub struct StaticPermissions {
    pub location: bool,
    pub photo_library: bool,
    pub camera: bool,
}

#[cfg(test)]
impl StaticPermissions {
    pub fn grant_all() -> Self {
        Self {
            location: true,
            photo_library: true,
            camera: true,
        }
    }
}

#[async_trait::async_trait]
impl PermissionService for StaticPermissions {
    async fn request(&self, permission: Permission) -> Result<bool> {
        let granted = match permission {
            Permission::Location => self.location,
            Permission::PhotoLibrary => self.photo_library,
            Permission::Camera => self.camera,
        };
        log::debug!("🔐 Permission {} -> granted: {}", permission, granted);
        Ok(granted)
    }
}

/// "Captures" a photo that already exists on disk. No file means the user dismissed the camera.
pub struct FileCamera {
    path: Option<PathBuf>,
}

impl FileCamera {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl CameraService for FileCamera {
    async fn launch(&self, options: CameraOptions) -> Result<CameraResult> {
        match &self.path {
            Some(path) => {
                log::info!("📷 Using photo {} (quality {})", path.display(), options.quality);
                Ok(CameraResult::Captured(path.clone()))
            }
            None => {
                log::info!("📷 No photo given, camera dismissed");
                Ok(CameraResult::Cancelled)
            }
        }
    }
}

pub struct ConsoleAlerts;

impl AlertService for ConsoleAlerts {
    fn alert(&self, alert: &Alert) {
        log::warn!("⚠️ Alert shown: {}", alert.title);
        eprintln!("\n⚠️  {}\n{}\n", alert.title, alert.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_permissions_follow_flags() {
        let permissions = StaticPermissions {
            location: false,
            photo_library: true,
            camera: false,
        };

        assert!(!permissions.request(Permission::Location).await.unwrap());
        assert!(permissions.request(Permission::PhotoLibrary).await.unwrap());
        assert!(!permissions.request(Permission::Camera).await.unwrap());
    }

    #[tokio::test]
    async fn test_file_camera_without_path_is_cancelled() {
        let options = CameraOptions { quality: 0.7, allows_editing: true };

        let camera = FileCamera::new(None);
        assert_eq!(camera.launch(options).await.unwrap(), CameraResult::Cancelled);

        let camera = FileCamera::new(Some(PathBuf::from("cafe.jpg")));
        assert_eq!(
            camera.launch(options).await.unwrap(),
            CameraResult::Captured(PathBuf::from("cafe.jpg"))
        );
    }

    #[test]
    fn test_permission_alerts_share_title() {
        assert_eq!(Alert::permission_denied(Permission::Camera).title, "Permissão negada");
        assert_eq!(Alert::location_denied(), Alert::permission_denied(Permission::Location));
    }
}
