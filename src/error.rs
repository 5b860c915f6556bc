use crate::services::device::Permission;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Permission denied: {0}")]
    PermissionDenied(Permission),

    #[error("Coffee description is empty")]
    EmptyInput,

    #[error("Capture quality must be in (0, 1], got {0}")]
    InvalidQuality(f32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Device error: {0}")]
    Device(#[from] anyhow::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Reply envelope has no candidates[0].content.parts[0].text")]
    MalformedEnvelope,

    #[error("No JSON object found in reply")]
    NoJsonFound,

    #[error("Invalid JSON in reply: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    Unknown(String),
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        RequestError::Unknown(err.to_string())
    }
}
