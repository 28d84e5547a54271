use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::core::RecommendError;
use crate::models::{ErrorResponse, RequestError};

/// Request-scoped errors, rendered as `{"error": "..."}`
///
/// These never escape a handler: actix turns them into a response through
/// [`error::ResponseError`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing key '{0}' in request JSON.")]
    MissingField(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Internal(String),
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::MissingField(field) => ApiError::MissingField(field.to_string()),
            RequestError::InvalidInput(message) => ApiError::InvalidInput(message),
        }
    }
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::EmptyExperienceTypes => ApiError::InvalidInput(err.to_string()),
            RecommendError::MalformedRange { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidInput(format!("Invalid JSON: {}", err)).into()
}
