use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use backend_domain::DomainError;

#[derive(Debug)]
pub enum HttpError {
    Unauthorized,
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unavailable(String),
    Internal(String),
}

impl From<backend_application::AppError> for HttpError {
    fn from(value: backend_application::AppError) -> Self {
        use backend_application::AppError;
        match value {
            AppError::Unauthorized => HttpError::Unauthorized,
            AppError::BadRequest(msg) => HttpError::BadRequest(msg),
            AppError::NotFound(what) => HttpError::NotFound(what),
            // Locked entries are a state conflict, not caller input error.
            AppError::Domain(DomainError::EntryLocked) => {
                HttpError::Conflict(DomainError::EntryLocked.to_string())
            }
            AppError::Domain(err) => HttpError::BadRequest(err.to_string()),
            AppError::Conflict(msg) => HttpError::Conflict(msg),
            AppError::Unavailable(msg) => HttpError::Unavailable(msg),
            AppError::Internal(err) => HttpError::Internal(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, format!("bad request: {}", msg)),
            HttpError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{} not found", what)),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Unavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("{} (retry with backoff)", msg),
            ),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
