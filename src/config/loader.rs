//! Load settings from the process environment, optionally seeded from `.env`.

use crate::config::types::{
    Config, DbConfig, DEFAULT_PORT, DEFAULT_QUERY_TIMEOUT_SECS, DEFAULT_SSL_MODE,
};
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

impl Config {
    /// Seed the environment from `.env` (if present) and read settings from it.
    /// Variables already set in the environment win over the file.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => tracing::debug!("no .env file, using process environment"),
            Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env file"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let host = required("DB_HOST")?;
        let port = parse_value("DB_PORT", &required("DB_PORT")?)?;
        let username = required("DB_USERNAME")?;
        let password = required("DB_PASSWORD")?;
        let dbname = required("DB_DBNAME")?;
        let ssl_mode = get("DB_SSLMODE").unwrap_or_else(|| DEFAULT_SSL_MODE.into());

        let timeout_secs = match get("DB_QUERY_TIMEOUT_SECS") {
            Some(v) => parse_value::<u64>("DB_QUERY_TIMEOUT_SECS", &v)?,
            None => DEFAULT_QUERY_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_QUERY_TIMEOUT_SECS",
                value: "0".into(),
            });
        }

        let listen_port = match get("PORT") {
            Some(v) => parse_value("PORT", &v)?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            db: DbConfig {
                host,
                port,
                username,
                password,
                dbname,
                ssl_mode,
                query_timeout: Duration::from_secs(timeout_secs),
            },
            port: listen_port,
        })
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}
