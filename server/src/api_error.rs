use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use incidencia_core::error::{AppError, ErrorClass};
use serde::Serialize;

/// JSON error body returned for every non-2xx outcome.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Request-boundary wrapper: every handler failure ends up here and becomes a JSON response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

pub fn status_for(class: ErrorClass) -> StatusCode {
    match class {
        ErrorClass::Validation => StatusCode::BAD_REQUEST,
        ErrorClass::NotFound => StatusCode::NOT_FOUND,
        ErrorClass::DatasetUnavailable | ErrorClass::Upstream | ErrorClass::Unexpected => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.class());
        if status.is_server_error() {
            tracing::error!(
                code = %err.code,
                details = err.details.as_deref().unwrap_or(""),
                retryable = err.retryable,
                "{}",
                err.message
            );
        } else {
            tracing::info!(code = %err.code, status = status.as_u16(), "{}", err.message);
        }

        let body = ErrorBody {
            error: err.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Last-resort conversion for panics caught by the panic layer.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError(AppError::unexpected(details)).into_response()
}
