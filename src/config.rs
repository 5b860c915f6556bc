use anyhow::{Context, Result};
use std::env;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_QUALITY: f32 = 0.7;

#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub capture_quality: f32,
}

// Keeps the key out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &"***")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("capture_quality", &self.capture_quality)
            .finish()
    }
}

impl Config {
    /// Reads the process environment. Call `dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("GEMINI_API_KEY must be set in .env file")?;

        let gemini_model = lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let gemini_base_url =
            lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let capture_quality = match lookup("CAPTURE_QUALITY") {
            Some(raw) => raw
                .trim()
                .parse::<f32>()
                .with_context(|| format!("CAPTURE_QUALITY is not a number: {}", raw))?,
            None => DEFAULT_QUALITY,
        };

        Ok(Self {
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            capture_quality,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "k")])).unwrap();

        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.gemini_base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.capture_quality, 0.7);
    }

    #[test]
    fn test_missing_key() {
        assert!(Config::from_lookup(lookup(&[])).is_err());
        assert!(Config::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("CAPTURE_QUALITY", "0.5"),
        ]))
        .unwrap();

        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.capture_quality, 0.5);
        assert!(!format!("{:?}", config).contains("\"k\""));
    }

    #[test]
    fn test_bad_quality() {
        let result = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "k"), ("CAPTURE_QUALITY", "alta")]));
        assert!(result.is_err());
    }
}
