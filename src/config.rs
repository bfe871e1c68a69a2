// src/config.rs
use crate::domain::slug::SlugDefaults;
use crate::domain::slug::options::DEFAULT_MAXIMUM_LENGTH;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    max_connections: u32,
    slug_defaults: SlugDefaults,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://sluggable.db?mode=rwc".into()
}

const fn default_max_connections() -> u32 {
    16
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl AppConfig {
    /// Build configuration from environment variables. Every key is optional;
    /// present values are validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                    ))
                })?,
            None => default_max_connections(),
        };

        let maximum_length = match lookup("SLUG_MAXIMUM_LENGTH") {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "SLUG_MAXIMUM_LENGTH must be greater than zero, got {raw:?}"
                    ))
                })?,
            None => DEFAULT_MAXIMUM_LENGTH,
        };

        let generate_unique_slugs = lookup("SLUG_UNIQUE").is_none_or(|v| parse_flag(&v));

        Ok(Self {
            database_url,
            max_connections,
            slug_defaults: SlugDefaults {
                maximum_length,
                generate_unique_slugs,
            },
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub const fn slug_defaults(&self) -> SlugDefaults {
        self.slug_defaults
    }
}
