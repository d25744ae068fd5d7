//! Error handling for the application

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::pricing::responses::PricingErrorResponse;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, details) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", None),
            AppError::InvalidBody(rejection) => {
                let reason = rejection.body_text();
                tracing::warn!("Rejected request body: {}", reason);
                (
                    rejection.status(),
                    "invalid_body",
                    Some(json!({ "status": rejection.status().as_u16(), "reason": reason })),
                )
            }
        };

        let body = PricingErrorResponse {
            error_type: error_type.to_string(),
            message: self.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
