//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://data.spellstudy.com";

pub const APP_NAME: &str = "SpellStudy School";
pub const APP_VERSION: &str = "1.0.0";
pub const SESSION_TIMEOUT: Duration = Duration::from_secs(60 * 60);
pub const PAGINATION_LIMIT: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// SQLite file backing the persisted session. `None` keeps it in memory.
    pub database_path: Option<PathBuf>,
    #[serde(deserialize_with = "millis::deserialize")]
    pub session_timeout: Duration,
    pub pagination_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            database_path: None,
            session_timeout: SESSION_TIMEOUT,
            pagination_limit: PAGINATION_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Read `SPELLSTUDY_API_URL` and `SPELLSTUDY_DB_PATH`, defaulting the
    /// database to the platform data directory.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_base_url = std::env::var("SPELLSTUDY_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let database_path = match std::env::var_os("SPELLSTUDY_DB_PATH") {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };

        Ok(Self {
            api_base_url,
            database_path: Some(database_path),
            ..Self::default()
        })
    }
}

fn default_db_path() -> anyhow::Result<PathBuf> {
    let mut dir = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory")?;

    dir.push("spellstudy");
    dir.push("session.db");
    Ok(dir)
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Duration, D::Error> {
        u64::deserialize(de).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_app_constants() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "https://data.spellstudy.com");
        assert_eq!(config.session_timeout, Duration::from_millis(3_600_000));
        assert_eq!(config.pagination_limit, 20);
        assert_eq!(config.database_path, None);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: ClientConfig = serde_json::from_str(
            r#"{ "api_base_url": "http://localhost:4000", "session_timeout": 1000 }"#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:4000");
        assert_eq!(config.session_timeout, Duration::from_secs(1));
        assert_eq!(config.pagination_limit, PAGINATION_LIMIT);
    }
}
