use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pastebin_core::{ServiceError, ValidationErrors};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

pub const NOT_FOUND_MESSAGE: &str = "Paste not found";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("malformed request body: {0}")]
    BadRequest(String),
    #[error("invalid fields: {0}")]
    Fields(ValidationErrors),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Fields(_) => StatusCode::BAD_REQUEST,
            AppError::Service(ServiceError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Service(ServiceError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Service(ServiceError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Service(ServiceError::Conflict) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl AppError {
    /// Text safe to show a client for a failure that is not the client's fault.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Service(ServiceError::Unavailable(_)) => "Service unavailable",
            _ => "Internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let public = self.public_message();
        let body = match self {
            AppError::BadRequest(msg) => json!({ "error": msg }),
            AppError::Fields(errors) | AppError::Service(ServiceError::Validation(errors)) => {
                json!(errors)
            }
            AppError::Service(ServiceError::NotFound) => json!({ "error": NOT_FOUND_MESSAGE }),
            AppError::Service(ServiceError::Unavailable(reason)) => {
                error!(%reason, "storage unavailable");
                json!({ "error": public })
            }
            other => {
                error!(error = ?other, "request failed");
                json!({ "error": public })
            }
        };
        (status, Json(body)).into_response()
    }
}
