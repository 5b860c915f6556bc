use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cafeterias sugeridas em toda resposta. Not derived from location yet.
pub const NEARBY_CAFES: [&str; 2] = ["Café da Rosa (4.8)", "Padaria Doce Grão (4.5)"];

pub fn nearby_cafes() -> Vec<String> {
    NEARBY_CAFES.iter().map(|c| c.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeDescription {
    pub kind: String,
    pub milk: String,
    pub latte_art: String,
    pub bean: String,
    pub moment: String,  // Sugestão de momento para servir
    pub trivia: String,
    pub nearby_cafes: Vec<String>,
}

impl std::fmt::Display for CoffeeDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "☕ {}", self.kind)?;
        writeln!(f, "🥛 {}", self.milk)?;
        writeln!(f, "🎨 {}", self.latte_art)?;
        writeln!(f, "🌱 {}", self.bean)?;
        writeln!(f, "⏰ {}", self.moment)?;
        writeln!(f, "📚 {}", self.trivia)?;
        writeln!(f)?;
        write!(f, "📍 Cafeterias próximas:")?;
        for cafe in &self.nearby_cafes {
            write!(f, "\n- {}", cafe)?;
        }
        Ok(())
    }
}

/// One user-supplied coffee, ready to be sent. Consumed by exactly one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CaptureInput {
    Text {
        value: String,
    },
    Image {
        #[serde(rename = "mimeType")]
        mime_type: String,
        #[serde(rename = "encodedBytes")]
        encoded_bytes: String, // base64
    },
}

impl CaptureInput {
    pub fn kind(&self) -> &'static str {
        match self {
            CaptureInput::Text { .. } => "text",
            CaptureInput::Image { .. } => "image",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Capturing,
    Sending,
    Succeeded,
    Failed,
    Cancelled,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Phase::Idle => "idle",
            Phase::Capturing => "capturing",
            Phase::Sending => "sending",
            Phase::Succeeded => "succeeded",
            Phase::Failed => "failed",
            Phase::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

/// Per-screen state, owned by the caller and lent to the session controller.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub phase: Phase,
    pub loading: bool,  // Only true while a request is in flight
    pub draft: String,  // Texto digitado no campo de descrição
    pub description: Option<CoffeeDescription>,
    pub last_result_at: Option<DateTime<Utc>>,
    pub location_granted: Option<bool>,  // None until the prompt has been shown
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            loading: false,
            draft: String::new(),
            description: None,
            last_result_at: None,
            location_granted: None,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}
