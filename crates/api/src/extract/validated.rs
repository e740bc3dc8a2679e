use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use corpdir_core::validation::validate_dto;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::short_type_name;
use crate::error::AppError;

/// JSON body that has passed its declared validation rules.
///
/// An absent, empty or `null` body is rejected with 400 (`"<Type> object is
/// null"`), as is JSON that does not fit `T`. A body that parses but breaks
/// any rule is rejected with 422 listing every violation.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let value: T = parse_body(&bytes)?;
        validate_dto(&value)?;
        Ok(ValidatedJson(value))
    }
}

pub(super) fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let name = short_type_name::<T>();
    let text = std::str::from_utf8(bytes)
        .map_err(|_| AppError::bad_request(format!("{name} body is not valid UTF-8")))?
        .trim();

    if text.is_empty() || text == "null" {
        return Err(AppError::bad_request(format!("{name} object is null")));
    }

    serde_json::from_str(text).map_err(|e| {
        tracing::debug!(error = %e, body_type = name, "Rejected malformed request body");
        AppError::bad_request(format!("Invalid {name} body: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use corpdir_core::dto::CompanyForCreationDto;
    use corpdir_core::error::CoreError;

    use super::*;

    #[test]
    fn null_and_empty_bodies_name_the_type() {
        for body in ["", "  ", "null"] {
            let err = parse_body::<CompanyForCreationDto>(body.as_bytes()).unwrap_err();
            assert_matches!(
                err,
                AppError::Core(CoreError::BadRequest(ref m)) if m == "CompanyForCreationDto object is null"
            );
        }
    }

    #[test]
    fn malformed_json_is_bad_request() {
        let err = parse_body::<CompanyForCreationDto>(b"{\"name\": ").unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::BadRequest(ref m)) if m.starts_with("Invalid CompanyForCreationDto body"));
    }

    #[test]
    fn missing_fields_default_and_parse() {
        let dto: CompanyForCreationDto = parse_body(b"{\"name\": \"Acme\"}").unwrap();
        assert_eq!(dto.name, "Acme");
        assert!(dto.address.is_empty());
    }
}
