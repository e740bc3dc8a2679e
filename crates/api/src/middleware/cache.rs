//! Response caching headers for GET routes.
//!
//! Successful responses get `Cache-Control`, a strong `ETag` computed over
//! the rendered body and `Vary: Accept`. A request whose `If-None-Match`
//! matches the fresh `ETag` is answered with 304 and no body.

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_LENGTH, ETAG, IF_NONE_MATCH, VARY};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Upper bound on a body buffered for hashing.
const MAX_CACHED_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Expiration model declared per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub max_age: u32,
}

impl CachePolicy {
    pub const fn public(max_age: u32) -> Self {
        Self { max_age }
    }

    pub fn header_value(&self) -> String {
        format!("public, max-age={}", self.max_age)
    }
}

/// Strong entity tag for a response body.
pub fn etag_for(body: &[u8]) -> String {
    format!("\"{:x}\"", Sha256::digest(body))
}

fn if_none_match_hits(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(IF_NONE_MATCH)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|t| t.trim().trim_start_matches("W/"))
        .any(|t| t == "*" || t == etag)
}

pub async fn cache_headers(
    State(policy): State<CachePolicy>,
    req: Request,
    next: Next,
) -> Response {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return next.run(req).await;
    }

    let request_headers = req.headers().clone();
    let response = next.run(req).await;
    if !response.status().is_success() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_CACHED_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return AppError::InternalError(format!("Failed to buffer response body: {e}"))
                .into_response()
        }
    };

    let etag = etag_for(&bytes);
    let headers = &mut parts.headers;
    if let Ok(value) = HeaderValue::from_str(&policy.header_value()) {
        headers.insert(CACHE_CONTROL, value);
    }
    if let Ok(value) = HeaderValue::from_str(&etag) {
        headers.insert(ETAG, value);
    }
    headers.append(VARY, HeaderValue::from_static("accept"));

    if if_none_match_hits(&request_headers, &etag) {
        parts.status = StatusCode::NOT_MODIFIED;
        parts.headers.remove(CONTENT_LENGTH);
        return Response::from_parts(parts, Body::empty());
    }

    Response::from_parts(parts, Body::from(bytes))
}
