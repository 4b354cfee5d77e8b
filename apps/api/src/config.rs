use anyhow::{Context, Result};

use crate::analysis::client::DEFAULT_API_URL;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Analysis credential. Optional at startup: its absence fails each
    /// analysis attempt, not the server boot.
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            gemini_api_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
