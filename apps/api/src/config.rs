use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Required variables fail fast at startup; the rest have defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub profile_api_url: String,
    pub generation_api_url: String,
    pub generation_api_key: String,
    pub latex_compile_url: String,
    pub editor_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            profile_api_url: require_env("PROFILE_API_URL")?,
            generation_api_url: require_env("GENERATION_API_URL")?,
            generation_api_key: require_env("GENERATION_API_KEY")?,
            latex_compile_url: std::env::var("LATEX_COMPILE_URL")
                .unwrap_or_else(|_| "https://latexonline.cc/compile".to_string()),
            editor_url: std::env::var("EDITOR_URL")
                .unwrap_or_else(|_| "https://www.overleaf.com/docs".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
