//! Per-client rate limiting with a keyed GCRA limiter.
//!
//! Clients are identified by the peer socket address. When that peer is a
//! trusted proxy, the first `X-Forwarded-For` address is used instead. With no
//! known peer, requests share an `anonymous` bucket.

use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::RETRY_AFTER;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use governor::clock::{Clock, DefaultClock};
use governor::middleware::StateInformationMiddleware;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter};
use serde_json::json;

use crate::config::RateLimitConfig;
use crate::state::AppState;

const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");
const X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
const X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");

type KeyedLimiter =
    RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock, StateInformationMiddleware>;

/// Shared limiter plus the burst size advertised in `X-RateLimit-Limit`.
pub struct ClientRateLimiter {
    limiter: KeyedLimiter,
    limit: HeaderValue,
    trusted_proxies: Vec<IpAddr>,
}

/// Outcome of one quota check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed { remaining: u32 },
    Throttled { retry_after_secs: u64 },
}

impl ClientRateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        let quota = Quota::per_minute(config.per_minute).allow_burst(config.burst);
        Self {
            limiter: RateLimiter::keyed(quota).with_middleware::<StateInformationMiddleware>(),
            limit: HeaderValue::from(config.burst.get()),
            trusted_proxies: config.trusted_proxies.clone(),
        }
    }

    pub fn check(&self, client: &str) -> Decision {
        match self.limiter.check_key(&client.to_string()) {
            Ok(snapshot) => Decision::Allowed {
                remaining: snapshot.remaining_burst_capacity(),
            },
            Err(not_until) => {
                let wait = not_until.wait_time_from(self.limiter.clock().now());
                // Round up so clients never retry early.
                let secs = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);
                Decision::Throttled {
                    retry_after_secs: secs.max(1),
                }
            }
        }
    }

    /// Forget clients whose buckets have fully refilled.
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }

    /// Resolve the key a request is rate limited under.
    ///
    /// `X-Forwarded-For` is ignored unless the peer is a trusted proxy, so a
    /// direct client cannot pick its own bucket.
    pub fn client_key(&self, headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
        let Some(peer) = peer.map(|addr| addr.ip()) else {
            return "anonymous".to_string();
        };
        if !self.trusted_proxies.contains(&peer) {
            return peer.to_string();
        }

        headers
            .get(X_FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .and_then(|v| v.parse::<IpAddr>().ok())
            .unwrap_or(peer)
            .to_string()
    }
}

/// Reject requests over quota with 429; annotate the rest with quota headers.
pub async fn rate_limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let client = state.rate_limiter.client_key(req.headers(), peer);

    match state.rate_limiter.check(&client) {
        Decision::Allowed { remaining } => {
            let mut response = next.run(req).await;
            let headers = response.headers_mut();
            headers.insert(X_RATELIMIT_LIMIT, state.rate_limiter.limit.clone());
            headers.insert(X_RATELIMIT_REMAINING, HeaderValue::from(remaining));
            response
        }
        Decision::Throttled { retry_after_secs } => {
            tracing::warn!(%client, retry_after_secs, "Rate limit exceeded");
            let body = json!({
                "error": "Too many requests",
                "code": "RATE_LIMITED",
            });
            (
                StatusCode::TOO_MANY_REQUESTS,
                [(RETRY_AFTER, HeaderValue::from(retry_after_secs))],
                axum::Json(body),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;

    fn limiter(burst: u32) -> ClientRateLimiter {
        ClientRateLimiter::new(&RateLimitConfig {
            per_minute: NonZeroU32::new(1).unwrap(),
            burst: NonZeroU32::new(burst).unwrap(),
            trusted_proxies: vec!["127.0.0.1".parse().unwrap()],
        })
    }

    fn forwarded(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn forwarded_for_is_honoured_from_trusted_proxy() {
        let limiter = limiter(1);
        let proxy: SocketAddr = "127.0.0.1:9000".parse().unwrap();

        assert_eq!(limiter.client_key(&forwarded("10.0.0.1, 10.0.0.2"), Some(proxy)), "10.0.0.1");
        assert_eq!(limiter.client_key(&HeaderMap::new(), Some(proxy)), "127.0.0.1");
        assert_eq!(limiter.client_key(&forwarded("garbage"), Some(proxy)), "127.0.0.1");
        assert_eq!(limiter.client_key(&HeaderMap::new(), None), "anonymous");
    }

    #[test]
    fn forwarded_for_is_ignored_from_direct_clients() {
        let limiter = limiter(1);
        let client: SocketAddr = "192.0.2.10:5555".parse().unwrap();

        assert_eq!(limiter.client_key(&forwarded("10.0.0.1"), Some(client)), "192.0.2.10");
        assert_eq!(limiter.client_key(&forwarded("10.0.0.2"), Some(client)), "192.0.2.10");
    }

    #[test]
    fn burst_then_throttle() {
        let limiter = limiter(2);
        assert_eq!(limiter.check("a"), Decision::Allowed { remaining: 1 });
        assert_eq!(limiter.check("a"), Decision::Allowed { remaining: 0 });
        assert!(matches!(
            limiter.check("a"),
            Decision::Throttled { retry_after_secs } if retry_after_secs >= 1
        ));
    }

    #[test]
    fn clients_have_separate_buckets() {
        let limiter = limiter(1);
        assert!(matches!(limiter.check("a"), Decision::Allowed { .. }));
        assert!(matches!(limiter.check("b"), Decision::Allowed { .. }));
        assert_eq!(limiter.tracked_clients(), 2);
    }
}
