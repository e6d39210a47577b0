use anyhow::{Context, Result};

use crate::assessment::responses::DEFAULT_PAGE_SIZE;

const DEFAULT_HANDOFF_TTL_SECS: u64 = 3600;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Questions per page in the brand test.
    pub quiz_page_size: usize,
    /// How long a brand result waits for the career-fit check to pick it up.
    pub handoff_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            quiz_page_size: parse_env("QUIZ_PAGE_SIZE", DEFAULT_PAGE_SIZE)
                .context("QUIZ_PAGE_SIZE must be a positive integer")?
                .max(1),
            handoff_ttl_secs: parse_env("HANDOFF_TTL_SECS", DEFAULT_HANDOFF_TTL_SECS)
                .context("HANDOFF_TTL_SECS must be a number of seconds")?,
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
        Ok(raw) => Ok(raw.trim().parse::<T>()?),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        let value: u64 = parse_env("BRANDFIT_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("BRANDFIT_TEST_BAD_PAGE_SIZE", "five");
        assert!(parse_env::<usize>("BRANDFIT_TEST_BAD_PAGE_SIZE", 5).is_err());
        std::env::set_var("BRANDFIT_TEST_GOOD_PAGE_SIZE", " 7 ");
        assert_eq!(parse_env::<usize>("BRANDFIT_TEST_GOOD_PAGE_SIZE", 5).unwrap(), 7);
    }
}
