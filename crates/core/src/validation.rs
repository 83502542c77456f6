//! Field validation support for inbound request DTOs.
//!
//! Request types derive [`validator::Validate`]; this module supplies the
//! custom checks the derive cannot express and flattens the resulting
//! [`ValidationErrors`] into [`FieldErrors`], one message per failing field.

use std::collections::BTreeMap;

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// Fallback text when a recorded error carries no message.
const DEFAULT_MESSAGE: &str = "Invalid value";

/// Text must contain at least one non-whitespace character.
///
/// Used as `#[validate(custom(function = "not_blank", message = "..."))]`.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Aggregated field errors
// ---------------------------------------------------------------------------

/// Field name → message, one entry per failing field.
///
/// Field names are reported in camelCase, the way they appear on the wire.
/// Serialized as the `errors` object of the validation error envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let map = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
                (camel_case(&field), message)
            })
            .collect();
        FieldErrors(map)
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
