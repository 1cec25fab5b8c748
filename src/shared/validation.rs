//! Validation Utilities

use validator::ValidationErrors;

use super::error::Failure;

/// Convert validation errors to a `Validation` failure.
///
/// Fields are reported in name order so the message is stable when several
/// fields are invalid at once.
pub fn validation_failure(errors: ValidationErrors) -> Failure {
    let mut field_errors: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                (
                    field.to_string(),
                    e.message.clone().map(|m| m.to_string()).unwrap_or_default(),
                )
            })
        })
        .collect();
    field_errors.sort();

    let message = field_errors
        .into_iter()
        .map(|(field, message)| {
            if message.is_empty() {
                format!("{} is invalid", field)
            } else {
                message
            }
        })
        .next()
        .unwrap_or_else(|| "Validation failed".into());

    Failure::validation(message)
}
