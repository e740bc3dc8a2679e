use std::sync::Arc;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::ClientRateLimiter;
use crate::services::ServiceManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: corpdir_db::DbPool,
    /// Server configuration (read by the auth extractors).
    pub config: Arc<ServerConfig>,
    /// Business services the handlers delegate to.
    pub services: Arc<ServiceManager>,
    /// Per-client request quota, shared by every route.
    pub rate_limiter: Arc<ClientRateLimiter>,
}

impl AppState {
    /// Wire services and the rate limiter around an existing pool.
    pub fn new(pool: corpdir_db::DbPool, config: ServerConfig) -> Self {
        let services = ServiceManager::new(pool.clone(), config.jwt.clone());
        let rate_limiter = ClientRateLimiter::new(&config.rate_limit);
        Self {
            pool,
            config: Arc::new(config),
            services: Arc::new(services),
            rate_limiter: Arc::new(rate_limiter),
        }
    }
}
