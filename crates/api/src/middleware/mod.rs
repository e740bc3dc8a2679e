//! Request middleware and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireManager`] -- Requires the `Manager` role.
//! - [`rate_limit::rate_limit`] -- Per-client request quota.
//! - [`cache::cache_headers`] -- `Cache-Control`/`ETag` handling for GET routes.

pub mod auth;
pub mod cache;
pub mod rate_limit;
pub mod rbac;
