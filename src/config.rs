use std::env;
use std::time::Duration;
use thiserror::Error;

/// Ancestor key every employee record is stored under.
pub const DEFAULT_PARTITION_KEY: &str = "employee_first_store1";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("unknown CACHE_BACKEND '{0}', expected 'memory' or 'none'")]
    UnknownCacheBackend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    Memory,
    Disabled,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: Option<String>,
    pub partition_key: String,
    pub cache_backend: CacheBackend,
    pub cache_ttl: Option<Duration>,
    pub db_max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            database_url: None,
            partition_key: DEFAULT_PARTITION_KEY.to_string(),
            cache_backend: CacheBackend::Memory,
            cache_ttl: None,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let cache_backend = match non_empty("CACHE_BACKEND").as_deref().map(str::trim) {
            None | Some("memory") => CacheBackend::Memory,
            Some("none") => CacheBackend::Disabled,
            Some(other) => return Err(ConfigError::UnknownCacheBackend(other.to_string())),
        };

        let cache_ttl = match non_empty("CACHE_TTL_SECS") {
            Some(raw) => match parse_number::<u64>("CACHE_TTL_SECS", &raw)? {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            None => None,
        };

        let db_max_connections = match non_empty("DB_MAX_CONNECTIONS") {
            Some(raw) => parse_number("DB_MAX_CONNECTIONS", &raw)?,
            None => defaults.db_max_connections,
        };

        Ok(Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or(defaults.bind_addr),
            database_url: non_empty("DATABASE_URL"),
            partition_key: non_empty("EMPLOYEE_PARTITION").unwrap_or(defaults.partition_key),
            cache_backend,
            cache_ttl,
            db_max_connections,
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: raw.to_string(),
    })
}
