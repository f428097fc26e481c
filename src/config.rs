use crate::scraper::DEFAULT_USER_AGENT;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub workers: usize,
    pub user_agent: String,
    pub request_timeout: Duration,
    pub max_concurrency: usize,
    pub cache_capacity: usize,
    pub cache_ttl: Duration,
    pub session_ttl: Duration,
    pub max_sessions: usize,
    pub thumbnail_width: u32,
    pub thumbnail_max_bytes: u64,
    pub max_body_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(10),
            max_concurrency: 4,
            cache_capacity: 256,
            cache_ttl: Duration::from_secs(60 * 60),
            session_ttl: Duration::from_secs(60 * 60),
            max_sessions: 1024,
            thumbnail_width: 300,
            thumbnail_max_bytes: 10 * 1024 * 1024,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl Config {
    /// Load configuration from the environment, after reading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable lookup; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();

        Ok(Self {
            addr: parse_or(&lookup, "HOUSETRACKER_ADDR", d.addr)?,
            workers: parse_or(&lookup, "HOUSETRACKER_WORKERS", d.workers)?,
            user_agent: lookup("HOUSETRACKER_USER_AGENT").unwrap_or(d.user_agent),
            request_timeout: secs_or(&lookup, "HOUSETRACKER_REQUEST_TIMEOUT_SECS", d.request_timeout)?,
            max_concurrency: parse_or(&lookup, "HOUSETRACKER_MAX_CONCURRENCY", d.max_concurrency)?,
            cache_capacity: parse_or(&lookup, "HOUSETRACKER_CACHE_CAPACITY", d.cache_capacity)?,
            cache_ttl: secs_or(&lookup, "HOUSETRACKER_CACHE_TTL_SECS", d.cache_ttl)?,
            session_ttl: secs_or(&lookup, "HOUSETRACKER_SESSION_TTL_SECS", d.session_ttl)?,
            max_sessions: parse_or(&lookup, "HOUSETRACKER_MAX_SESSIONS", d.max_sessions)?,
            thumbnail_width: parse_or(&lookup, "HOUSETRACKER_THUMBNAIL_WIDTH", d.thumbnail_width)?,
            thumbnail_max_bytes: parse_or(
                &lookup,
                "HOUSETRACKER_THUMBNAIL_MAX_BYTES",
                d.thumbnail_max_bytes,
            )?,
            max_body_bytes: parse_or(&lookup, "HOUSETRACKER_MAX_BODY_BYTES", d.max_body_bytes)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::Invalid { name, value }),
        },
    }
}

fn secs_or<F>(lookup: &F, name: &'static str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    parse_or(lookup, name, default.as_secs()).map(Duration::from_secs)
}
