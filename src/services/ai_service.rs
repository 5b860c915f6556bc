use crate::error::RequestError;
use crate::models::{CaptureInput, CoffeeDescription};

/// Trait for coffee description backends (Gemini, test doubles)
#[async_trait::async_trait]
pub trait DescriptionService: Send + Sync {
    async fn describe(&self, input: &CaptureInput) -> Result<CoffeeDescription, RequestError>;
}
