use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
///
/// The Google AI key is optional at startup: without it the service still scores
/// quizzes, and every generation request fails with a configuration error.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_ai_api_key: Option<String>,
    pub google_ai_base_url: String,
    pub google_ai_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_ai_api_key: optional_env("GOOGLE_AI_API_KEY"),
            google_ai_base_url: optional_env("GOOGLE_AI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            google_ai_model: optional_env("GOOGLE_AI_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank variables both count as missing.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    raw.unwrap_or("8080")
        .parse::<u16>()
        .context("PORT must be a valid port number")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_8080() {
        assert_eq!(parse_port(None).unwrap(), 8080);
    }

    #[test]
    fn test_port_parses() {
        assert_eq!(parse_port(Some("3000")).unwrap(), 3000);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = parse_port(Some("eighty")).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
