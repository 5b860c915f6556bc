pub mod ai_service;
pub mod device; // Permissions, camera and alerts
pub mod gemini; // Google AI Studio generateContent client

pub use ai_service::DescriptionService;
pub use device::{AlertService, CameraService, PermissionService};
pub use gemini::GeminiService;
