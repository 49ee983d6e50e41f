//! Configuration handling for the application.
//!
//! Credentials and endpoint base URLs are loaded here once and injected into
//! the provider clients at construction; nothing in the pipeline reads the
//! environment ambiently. `Config::from_env` falls back to the real provider
//! endpoints so a deployment only has to supply the two API keys.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Public so tests and deployment scripts can
/// refer to them.
pub const ENV_KINOPOISK_API_KEY: &str = "KINOPOISK_API_KEY";
pub const ENV_OMDB_API_KEY: &str = "OMDB_API_KEY";
pub const ENV_KINOPOISK_PAGE_URL: &str = "KINOPOISK_PAGE_URL";
pub const ENV_KINOPOISK_API_URL: &str = "KINOPOISK_API_URL";
pub const ENV_OMDB_API_URL: &str = "OMDB_API_URL";
pub const ENV_WATCH_BASE_URL: &str = "WATCH_BASE_URL";
pub const ENV_DATABASE_PATH: &str = "DATABASE_PATH";

const DEFAULT_KINOPOISK_PAGE_URL: &str = "https://www.kinopoisk.ru";
const DEFAULT_KINOPOISK_API_URL: &str = "https://kinopoiskapiunofficial.tech";
const DEFAULT_OMDB_API_URL: &str = "https://www.omdbapi.com";
const DEFAULT_WATCH_BASE_URL: &str = "https://flcksbr.top";
const DEFAULT_DATABASE_PATH: &str = "data/movies.db";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    kinopoisk_api_key: String,
    omdb_api_key: String,
    kinopoisk_page_url: String,
    kinopoisk_api_url: String,
    omdb_api_url: String,
    watch_base_url: String,
    database_path: String,
}

impl Config {
    /// Load from environment variables, falling back to the production
    /// endpoints and an empty API key (fine for tests, useless in anger).
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            kinopoisk_api_key: env::var(ENV_KINOPOISK_API_KEY).unwrap_or_default(),
            omdb_api_key: env::var(ENV_OMDB_API_KEY).unwrap_or_default(),
            kinopoisk_page_url: env::var(ENV_KINOPOISK_PAGE_URL)
                .unwrap_or_else(|_| DEFAULT_KINOPOISK_PAGE_URL.to_string()),
            kinopoisk_api_url: env::var(ENV_KINOPOISK_API_URL)
                .unwrap_or_else(|_| DEFAULT_KINOPOISK_API_URL.to_string()),
            omdb_api_url: env::var(ENV_OMDB_API_URL)
                .unwrap_or_else(|_| DEFAULT_OMDB_API_URL.to_string()),
            watch_base_url: env::var(ENV_WATCH_BASE_URL)
                .unwrap_or_else(|_| DEFAULT_WATCH_BASE_URL.to_string()),
            database_path: env::var(ENV_DATABASE_PATH)
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
        })
    }

    pub fn kinopoisk_api_key(&self) -> &str {
        &self.kinopoisk_api_key
    }
    pub fn omdb_api_key(&self) -> &str {
        &self.omdb_api_key
    }
    /// Base URL of the HTML search-results page.
    pub fn kinopoisk_page_url(&self) -> &str {
        &self.kinopoisk_page_url
    }
    /// Base URL of the unofficial JSON API.
    pub fn kinopoisk_api_url(&self) -> &str {
        &self.kinopoisk_api_url
    }
    pub fn omdb_api_url(&self) -> &str {
        &self.omdb_api_url
    }
    /// Base URL the watch link is built from.
    pub fn watch_base_url(&self) -> &str {
        &self.watch_base_url
    }
    /// Path of the SQLite history database.
    pub fn database_path(&self) -> &str {
        &self.database_path
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reserved for future validation failures.
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
