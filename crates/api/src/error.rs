use std::any::Any;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::header::CONTENT_TYPE;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use stockroom_core::error::CoreError;
use stockroom_core::validation::FieldErrors;
use utoipa::ToSchema;

/// Message returned for malformed request bodies.
const INVALID_JSON: &str = "Invalid JSON format";

/// Message returned for every 500 that is not a database fault.
const INTERNAL_ERROR: &str = "Internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform JSON error envelope:
///
/// ```json
/// { "message": "...", "code": 404 }
/// { "message": "Validation error", "code": 400, "errors": { "name": "..." } }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `stockroom_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body could not be parsed as the expected JSON shape.
    #[error("Incorrect JSON: {0}")]
    IncorrectJson(String),

    /// A malformed path segment or query string.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// No route matches the request path.
    #[error("No route for {0}")]
    RouteNotFound(String),

    /// The path exists but does not accept the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The handler did not finish within the configured timeout.
    #[error("Request timed out")]
    Timeout,
}

/// Wire shape of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Item with id 7 not found")]
    pub message: String,
    /// Numeric HTTP status.
    #[schema(example = 404)]
    pub code: u16,
    /// Field name to message; present only for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub errors: Option<FieldErrors>,
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &'static str, id: stockroom_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors): (StatusCode, String, Option<FieldErrors>) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                err @ CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string(), None),
                CoreError::InvalidData(msg) => (StatusCode::BAD_REQUEST, msg, None),
                CoreError::Validation(fields) => (
                    StatusCode::BAD_REQUEST,
                    "Validation error".to_string(),
                    Some(fields),
                ),
                CoreError::Unauthorized(msg) => {
                    let status = if msg.contains("Forbidden") {
                        StatusCode::FORBIDDEN
                    } else {
                        StatusCode::UNAUTHORIZED
                    };
                    (status, msg, None)
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, None),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        INTERNAL_ERROR.to_string(),
                        None,
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                    None,
                )
            }

            // --- HTTP-specific errors ---
            AppError::IncorrectJson(detail) => {
                tracing::debug!(%detail, "Rejected request body");
                (StatusCode::BAD_REQUEST, INVALID_JSON.to_string(), None)
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR.to_string(),
                    None,
                )
            }
            err @ AppError::RouteNotFound(_) => (StatusCode::NOT_FOUND, err.to_string(), None),
            err @ AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, err.to_string(), None)
            }
            err @ AppError::Timeout => (StatusCode::REQUEST_TIMEOUT, err.to_string(), None),
        };

        let body = ErrorBody {
            message,
            code: status.as_u16(),
            errors: errors.filter(|e| !e.is_empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Extractor rejections
// ---------------------------------------------------------------------------

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::IncorrectJson(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Render a caught handler panic as the standard 500 envelope.
///
/// Passed to `CatchPanicLayer::custom` so panics never leak a plain-text
/// body or a backtrace.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}

// ---------------------------------------------------------------------------
// Router-level faults
// ---------------------------------------------------------------------------

/// Router fallback for paths with no route.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Replace the bare 408 produced by the timeout layer with the JSON
/// envelope. Any other response passes through untouched.
pub async fn render_timeout(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(CONTENT_TYPE)
    {
        return AppError::Timeout.into_response();
    }
    response
}
