use std::net::IpAddr;
use std::num::NonZeroU32;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://corpdir.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Grace period for in-flight requests after a shutdown signal (default: `30`).
    pub shutdown_timeout_secs: u64,
    pub rate_limit: RateLimitConfig,
    /// JWT token configuration (secret, issuer, audience, expiry durations).
    pub jwt: JwtConfig,
}

/// Per-client request quota.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Sustained permits per minute for one client.
    pub per_minute: NonZeroU32,
    /// Requests a client may fire back-to-back before throttling starts.
    pub burst: NonZeroU32,
    /// Peers whose `X-Forwarded-For` header names the real client.
    pub trusted_proxies: Vec<IpAddr>,
}

impl RateLimitConfig {
    /// | Env Var                 | Default |
    /// |-------------------------|---------|
    /// | `RATE_LIMIT_PER_MINUTE` | `60`    |
    /// | `RATE_LIMIT_BURST`      | `30`    |
    /// | `TRUSTED_PROXIES`       | `127.0.0.1,::1` |
    ///
    /// # Panics
    ///
    /// Panics if a quota is not a positive integer or a proxy is not an IP.
    pub fn from_env() -> Self {
        let trusted_proxies = std::env::var("TRUSTED_PROXIES")
            .unwrap_or_else(|_| "127.0.0.1,::1".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse()
                    .unwrap_or_else(|e| panic!("Invalid TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect();

        Self {
            per_minute: non_zero_env("RATE_LIMIT_PER_MINUTE", 60),
            burst: non_zero_env("RATE_LIMIT_BURST", 30),
            trusted_proxies,
        }
    }
}

fn non_zero_env(name: &str, default: u32) -> NonZeroU32 {
    let value: u32 = std::env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| panic!("{name} must be a valid u32"));
    NonZeroU32::new(value).unwrap_or_else(|| panic!("{name} must be greater than zero"))
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `DATABASE_URL`         | `sqlite://corpdir.db`      |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://corpdir.db".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            rate_limit: RateLimitConfig::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}
