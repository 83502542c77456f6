//! Request extractors that route every rejection through [`AppError`].
//!
//! - [`ValidatedJson`] -- JSON body parsed and then field-validated.
//! - [`PathParam`] -- `axum::extract::Path` with JSON error responses.
//! - [`QueryParams`] -- `axum::extract::Query` with JSON error responses.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use stockroom_core::error::CoreError;
use stockroom_core::validation::FieldErrors;
use validator::Validate;

use crate::error::AppError;

/// A JSON request body that passed [`Validate`].
///
/// Malformed JSON is rejected as [`AppError::IncorrectJson`]; constraint
/// failures are rejected as [`CoreError::Validation`] carrying every failing
/// field. This is the only place request bodies are validated; the handler
/// only runs for valid input.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        if let Err(errors) = value.validate() {
            let fields = FieldErrors::from(errors);
            tracing::debug!(failing_fields = fields.len(), "Request body failed validation");
            return Err(AppError::Core(CoreError::Validation(fields)));
        }
        Ok(ValidatedJson(value))
    }
}

/// Path parameters; a non-numeric id becomes a 400 JSON envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

/// Query string parameters; a malformed value becomes a 400 JSON envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
