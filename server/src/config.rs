//! Server configuration parsed from environment variables.

use booking::COLLECTION;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Postgres URL. `None` keeps documents in memory.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub port: u16,
    /// Collection reservation documents are written to.
    pub collection: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `DATABASE_URL`: in-memory store when absent or empty
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `PORT`: default 3000
    /// - `RESERVAS_COLLECTION`: default `reservas`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `DB_MAX_CONNECTIONS` is not a valid number, or
    /// `RESERVAS_COLLECTION` is set but blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", value: raw.clone() })?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };

        let collection = match lookup("RESERVAS_COLLECTION") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::Empty { key: "RESERVAS_COLLECTION" }),
            Some(raw) => raw.trim().to_owned(),
            None => COLLECTION.to_owned(),
        };

        Ok(Self { database_url, db_max_connections, port, collection })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
