use anyhow::{bail, Context, Result};

const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub serpapi_api_key: String,
    pub port: u16,
    /// Upper bound on concurrent module enrichments per full-course request.
    pub max_concurrent_enrichments: usize,
    pub http_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_concurrent_enrichments = parse_env("MAX_CONCURRENT_ENRICHMENTS", 5usize)?;
        if max_concurrent_enrichments == 0 {
            bail!("MAX_CONCURRENT_ENRICHMENTS must be at least 1");
        }

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            serpapi_api_key: require_env("SERPAPI_API_KEY")?,
            port: parse_env("PORT", 5002u16)?,
            max_concurrent_enrichments,
            http_timeout_secs: parse_env("HTTP_TIMEOUT_SECS", 120u64)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
