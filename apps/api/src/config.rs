use anyhow::{bail, Context, Result};

use crate::analysis::HeuristicTables;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub usage_cooldown_hours: i64,
    /// Operator code that clears a client's cooldown. Unlocking is disabled when unset.
    pub unlock_code: Option<String>,
    pub analyzer_tables_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let usage_cooldown_hours = std::env::var("USAGE_COOLDOWN_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse::<i64>()
            .context("USAGE_COOLDOWN_HOURS must be an integer")?;
        if usage_cooldown_hours <= 0 {
            bail!("USAGE_COOLDOWN_HOURS must be positive, got {usage_cooldown_hours}");
        }

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            usage_cooldown_hours,
            unlock_code: optional_env("UNLOCK_CODE"),
            analyzer_tables_path: optional_env("ANALYZER_TABLES_PATH"),
        })
    }

    /// Heuristic tables from `ANALYZER_TABLES_PATH`, or the built-in defaults.
    pub fn load_heuristic_tables(&self) -> Result<HeuristicTables> {
        match &self.analyzer_tables_path {
            Some(path) => load_tables_file(path),
            None => Ok(HeuristicTables::default()),
        }
    }
}

fn load_tables_file(path: &str) -> Result<HeuristicTables> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read analyzer tables from '{path}'"))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid analyzer tables in '{path}'"))
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
