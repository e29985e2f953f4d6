//! API server configuration.
//!
//! Everything is read once at startup and treated as immutable for the
//! process lifetime.

use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Default token lifetime when `ACCESS_TOKEN_EXPIRE_MINUTES` is unset.
const DEFAULT_TTL_MINUTES: i64 = 30;

/// Configuration errors raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET_KEY must be set")]
    MissingSecret,

    #[error("unsupported signing algorithm: {0}")]
    BadAlgorithm(String),

    #[error("invalid ACCESS_TOKEN_EXPIRE_MINUTES: {0}")]
    BadTtl(String),
}

/// Token signing configuration: one secret, one algorithm, one TTL.
#[derive(Clone, Debug)]
pub struct TokenConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub ttl_minutes: i64,
}

impl TokenConfig {
    /// Reads `JWT_SECRET_KEY` (required), `JWT_ALGORITHM` (default `HS256`)
    /// and `ACCESS_TOKEN_EXPIRE_MINUTES` (default 30).
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecret)?;
        let algorithm = match std::env::var("JWT_ALGORITHM") {
            Ok(name) if !name.is_empty() => parse_algorithm(&name)?,
            _ => Algorithm::HS256,
        };
        let ttl_minutes = match std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES") {
            Ok(raw) if !raw.is_empty() => parse_ttl(&raw)?,
            _ => DEFAULT_TTL_MINUTES,
        };
        Ok(Self {
            secret,
            algorithm,
            ttl_minutes,
        })
    }
}

fn parse_algorithm(name: &str) -> Result<Algorithm, ConfigError> {
    name.parse()
        .map_err(|_| ConfigError::BadAlgorithm(name.to_string()))
}

fn parse_ttl(raw: &str) -> Result<i64, ConfigError> {
    raw.parse::<i64>()
        .ok()
        .filter(|ttl| *ttl > 0)
        .ok_or_else(|| ConfigError::BadTtl(raw.to_string()))
}

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8000").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Token signing configuration.
    pub token: TokenConfig,
}
