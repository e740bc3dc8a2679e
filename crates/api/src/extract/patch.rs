use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use corpdir_core::error::{CoreError, FieldViolation};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::validated::parse_body;
use crate::error::AppError;

/// An RFC 6902 JSON Patch document sent as a request body.
#[derive(Debug, Clone)]
pub struct PatchDocument(pub json_patch::Patch);

impl<S: Send + Sync> FromRequest<S> for PatchDocument {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let patch = parse_body::<json_patch::Patch>(&bytes).map_err(|err| match err {
            AppError::Core(CoreError::BadRequest(msg)) if msg.ends_with("object is null") => {
                AppError::bad_request("patchDoc object sent from client is null.")
            }
            other => other,
        })?;
        Ok(PatchDocument(patch))
    }
}

impl PatchDocument {
    /// Apply the patch to the serialized form of `target` and read it back.
    ///
    /// An operation that cannot be applied, or a result that no longer fits
    /// `T`, is reported as a validation failure.
    pub fn apply_to<T>(&self, target: &T) -> Result<T, CoreError>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut doc = serde_json::to_value(target)
            .map_err(|e| CoreError::Internal(format!("Failed to serialize patch target: {e}")))?;

        json_patch::patch(&mut doc, &self.0 .0).map_err(|e| {
            CoreError::Validation(vec![FieldViolation {
                field: "patchDoc".to_string(),
                code: "patch".to_string(),
                message: e.to_string(),
            }])
        })?;

        serde_json::from_value(doc).map_err(|e| {
            CoreError::Validation(vec![FieldViolation {
                field: "patchDoc".to_string(),
                code: "type".to_string(),
                message: e.to_string(),
            }])
        })
    }
}
