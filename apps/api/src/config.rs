use anyhow::{Context, Result};
use axum::http::HeaderValue;

/// Service configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on a single request, enforced by the HTTP layer.
    pub request_timeout_secs: u64,
    /// Console origin allowed by CORS. Permissive when unset.
    pub cors_allow_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            cors_allow_origin: optional_env("CORS_ALLOW_ORIGIN")
                .map(|origin| parse_origin(&origin))
                .transpose()?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_origin(origin: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(origin.trim())
        .with_context(|| format!("CORS_ALLOW_ORIGIN '{origin}' is not a valid header value"))
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            request_timeout_secs: 10,
            cors_allow_origin: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origin_accepts_url() {
        let origin = parse_origin(" http://localhost:5173 ").unwrap();
        assert_eq!(origin, "http://localhost:5173");
    }

    #[test]
    fn test_parse_origin_rejects_control_chars() {
        assert!(parse_origin("http://bad\norigin").is_err());
    }

    #[test]
    fn test_default_is_permissive_with_ten_second_timeout() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.cors_allow_origin.is_none());
    }
}
