use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,

    // Storage service
    pub store_base_url: String,
    pub store_timeout_secs: u64,

    // Rate limiting
    pub rate_api_per_min: u32,

    pub api_prefix: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").context("SERVER_ADDR must be set")?,
            store_base_url: env::var("STORE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5000/api".to_string()),
            store_timeout_secs: parse_or("STORE_TIMEOUT_SECS", 10)?,
            rate_api_per_min: parse_or("RATE_API_PER_MIN", 1000)?,
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
        })
    }
}

/// Reads `key`, falling back to `default` when unset. A set but malformed
/// value is an error rather than a silent default.
fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has invalid value '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}
