//! Request extractors that reject bad input before a handler runs.
//!
//! - [`ValidatedJson`] -- JSON body, deserialized and checked against its
//!   declared validation rules.
//! - [`PatchDocument`] -- RFC 6902 JSON Patch body.
//! - [`CompanyIds`] -- the `(id1,id2,...)` path segment of collection routes.
//! - [`AppPath`], [`AppQuery`] -- `Path`/`Query` with JSON error bodies.

mod ids;
mod params;
mod patch;
mod validated;

pub use ids::{parse_ids, CompanyIds};
pub use params::{AppPath, AppQuery};
pub use patch::PatchDocument;
pub use validated::ValidatedJson;

/// Unqualified type name, e.g. `CompanyForCreationDto`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
