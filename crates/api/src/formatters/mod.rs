//! Output formatters and `Accept`-header content negotiation.
//!
//! Handlers extract a [`ResponseFormat`] and hand their DTOs to
//! [`ResponseFormat::respond`]; the payload is rendered as JSON (default),
//! XML or CSV. A request that accepts none of these is rejected with 406.

mod csv;
mod xml;

use axum::extract::FromRequestParts;
use axum::http::header::{ACCEPT, CONTENT_TYPE, LOCATION};
use axum::http::request::Parts;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Failure while rendering a response body.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("XML rendering failed: {0}")]
    Xml(String),
    #[error("CSV rendering failed: {0}")]
    Csv(String),
}

/// Element names used when rendering a resource as XML.
#[derive(Debug, Clone, Copy)]
pub struct Resource {
    /// Root element of a single item, and the element of each list entry.
    pub singular: &'static str,
    /// Root element of a list.
    pub plural: &'static str,
}

pub const COMPANY: Resource = Resource {
    singular: "Company",
    plural: "Companies",
};

pub const EMPLOYEE: Resource = Resource {
    singular: "Employee",
    plural: "Employees",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Xml,
    Csv,
}

impl ResponseFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Xml => "application/xml; charset=utf-8",
            ResponseFormat::Csv => "text/csv; charset=utf-8",
        }
    }

    /// Pick the best supported format for an `Accept` header value.
    ///
    /// Media ranges are tried in descending `q` order; ties keep header order.
    /// A missing or blank header means JSON. `None` means nothing acceptable.
    pub fn negotiate(accept: Option<&str>) -> Option<Self> {
        let Some(accept) = accept.map(str::trim).filter(|a| !a.is_empty()) else {
            return Some(ResponseFormat::Json);
        };

        let mut ranges: Vec<(String, f32)> = accept
            .split(',')
            .filter_map(|range| {
                let mut parts = range.split(';');
                let media = parts.next()?.trim().to_ascii_lowercase();
                let q = parts
                    .filter_map(|p| p.trim().strip_prefix("q="))
                    .find_map(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);
                Some((media, q))
            })
            .filter(|(_, q)| *q > 0.0)
            .collect();
        ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranges.iter().find_map(|(media, _)| match media.as_str() {
            "application/json" | "text/json" | "application/*" | "*/*" => {
                Some(ResponseFormat::Json)
            }
            "application/xml" | "text/xml" => Some(ResponseFormat::Xml),
            "text/csv" => Some(ResponseFormat::Csv),
            _ => None,
        })
    }

    /// Render `body` with status 200.
    pub fn respond<T: Serialize>(self, resource: Resource, body: &T) -> AppResult<Response> {
        let value = serde_json::to_value(body).map_err(FormatError::from)?;
        self.respond_value(resource, value)
    }

    /// Render an already-serialized (e.g. shaped) value with status 200.
    pub fn respond_value(self, resource: Resource, value: Value) -> AppResult<Response> {
        let bytes = match self {
            ResponseFormat::Json => serde_json::to_vec(&value).map_err(FormatError::from)?,
            ResponseFormat::Xml => xml::render(resource, &value)?,
            ResponseFormat::Csv => csv::render(&value)?,
        };

        Ok((
            [(CONTENT_TYPE, HeaderValue::from_static(self.content_type()))],
            bytes,
        )
            .into_response())
    }

    /// Render `body` with status 201 and a `Location` header.
    pub fn created<T: Serialize>(
        self,
        location: &str,
        resource: Resource,
        body: &T,
    ) -> AppResult<Response> {
        let mut response = self.respond(resource, body)?;
        *response.status_mut() = StatusCode::CREATED;
        let location = HeaderValue::from_str(location)
            .map_err(|e| AppError::InternalError(format!("Invalid Location header: {e}")))?;
        response.headers_mut().insert(LOCATION, location);
        Ok(response)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for ResponseFormat {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let accept = parts.headers.get(ACCEPT).and_then(|v| v.to_str().ok());
        ResponseFormat::negotiate(accept).ok_or_else(|| {
            AppError::NotAcceptable(format!(
                "None of the requested media types are supported: {}",
                accept.unwrap_or_default()
            ))
        })
    }
}
