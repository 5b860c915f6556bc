use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DescriptionService;
use crate::error::RequestError;
use crate::models::{nearby_cafes, CaptureInput, CoffeeDescription};

const PROMPT: &str = "Você é uma barista experiente. Analise o café descrito ou fotografado e \
                      responda APENAS com um objeto JSON contendo exatamente as chaves:\n\
                      \n\
                      - kind: tipo da bebida (ex: Cappuccino, Latte, Espresso)\n\
                      - milk: tipo de leite usado, ou \"sem leite\"\n\
                      - latteArt: desenho da latte art, ou \"nenhum\"\n\
                      - bean: origem ou variedade provável do grão\n\
                      - moment: melhor momento para tomar esse café\n\
                      - trivia: uma curiosidade sobre essa bebida\n\
                      \n\
                      Todos os valores devem ser textos curtos em português.";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

// Every level is optional so a short envelope surfaces as MalformedEnvelope, not a serde error.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

pub struct GeminiService {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiService {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// The instruction sent with every request. Never depends on the input.
    pub fn build_prompt() -> &'static str {
        PROMPT
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn build_request(input: &CaptureInput) -> GenerateRequest {
        let mut parts = vec![Part::Text {
            text: Self::build_prompt().to_string(),
        }];

        match input {
            CaptureInput::Image { mime_type, encoded_bytes } => parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: mime_type.clone(),
                    data: encoded_bytes.clone(),
                },
            }),
            CaptureInput::Text { value } => parts.push(Part::Text {
                text: format!("Descrição do café: {}", value),
            }),
        }

        GenerateRequest {
            contents: vec![RequestContent { parts }],
        }
    }

    async fn send(&self, input: &CaptureInput) -> Result<CoffeeDescription, RequestError> {
        let request = Self::build_request(input);

        log::info!("🤖 Sending {} request to Gemini with model: {}", input.kind(), self.model);
        log::debug!(
            "📤 Request payload size: {} bytes",
            serde_json::to_vec(&request).map(|b| b.len()).unwrap_or(0)
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.as_str())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        log::debug!("📥 Gemini response status: {}", status);

        let body = response.text().await?;
        if status.is_success() {
            log::debug!("📄 Raw Gemini response size: {} bytes", body.len());
        } else {
            // Error bodies carry no candidates, so the envelope check below rejects them
            log::error!("❌ Gemini API error response ({}): {}", status, body);
        }

        let text = reply_text(&body)?;
        log::info!("💬 Gemini reply: {}", text);

        parse_reply(&text)
    }
}

#[async_trait::async_trait]
impl DescriptionService for GeminiService {
    async fn describe(&self, input: &CaptureInput) -> Result<CoffeeDescription, RequestError> {
        self.send(input).await
    }
}

/// Pulls `candidates[0].content.parts[0].text` out of the raw response body.
fn reply_text(body: &str) -> Result<String, RequestError> {
    let envelope: GenerateResponse =
        serde_json::from_str(body).map_err(|_| RequestError::MalformedEnvelope)?;

    envelope
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .and_then(|parts| parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or(RequestError::MalformedEnvelope)
}

/// Greedy brace span: from the first `{` to the last `}`, line breaks included.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Turns the model's prose-wrapped reply into a description.
pub fn parse_reply(text: &str) -> Result<CoffeeDescription, RequestError> {
    let span = extract_json_span(text).ok_or(RequestError::NoJsonFound)?;
    let fields: Map<String, Value> = serde_json::from_str(span)?;

    Ok(CoffeeDescription {
        kind: field(&fields, "kind"),
        milk: field(&fields, "milk"),
        latte_art: field(&fields, "latteArt"),
        bean: field(&fields, "bean"),
        moment: field(&fields, "moment"),
        trivia: field(&fields, "trivia"),
        nearby_cafes: nearby_cafes(),
    })
}

fn field(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        None | Some(Value::Null) => {
            log::warn!("Reply is missing '{}', leaving it blank", key);
            String::new()
        }
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
