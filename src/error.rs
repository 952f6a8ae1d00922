use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::models::ProcessResponse;

/// Custom error type for the application.
///
/// Every variant resolves to a 400 with the uniform `{success: false, error}`
/// envelope: the extension caller always gets a well-formed JSON body and
/// never a 5xx or a stack trace for input or provider failures.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Provider(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::Validation(msg) => msg,
            AppError::Provider(msg) => {
                error!("LLM provider error: {}", msg);
                msg
            }
        };

        let body = Json(ProcessResponse::failure(message));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Provider(format!("{err:#}"))
    }
}

/// Result type for application handlers
pub type AppResult<T> = Result<T, AppError>;
