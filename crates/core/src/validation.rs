//! Flattening of `validator` results into [`FieldViolation`] lists.
//!
//! Every violation is collected, including those of nested collections, so a
//! client sees all problems with a body in a single response.

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::{CoreError, FieldViolation};

/// Run the declared rules of `value`, returning every violation at once.
pub fn validate_dto<T: Validate>(value: &T) -> Result<(), CoreError> {
    value
        .validate()
        .map_err(|errors| CoreError::Validation(flatten(&errors)))
}

/// Flatten a (possibly nested) [`ValidationErrors`] tree, sorted by field path.
pub fn flatten(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    collect(errors, "", &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    out
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{path} is invalid"));
                    out.push(FieldViolation {
                        field: path.clone(),
                        code: err.code.to_string(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}
