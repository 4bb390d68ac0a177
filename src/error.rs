use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::Role;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Hosted table request failed: {0}")]
    HostedTable(#[from] reqwest::Error),

    #[error("Login required")]
    LoginRequired,

    #[error("Feature restricted to {required}s")]
    WrongRole { required: Role, actual: Role },

    #[error("Sellers do not browse properties")]
    SellersDoNotBrowse,

    #[error("Property not found")]
    PropertyNotFound,

    #[error("Signup request not found")]
    SignupNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid admin key")]
    Unauthorized,
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::HostedTable(e) => {
                tracing::error!("Hosted table request failed: {:?}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Hosted table request failed".to_string(),
                )
            }
            AppError::LoginRequired => (
                StatusCode::UNAUTHORIZED,
                "Please login to continue".to_string(),
            ),
            AppError::WrongRole { required, actual } => (
                StatusCode::FORBIDDEN,
                format!(
                    "This feature is only available for {}s. You are logged in as a {}.",
                    required, actual
                ),
            ),
            AppError::SellersDoNotBrowse => (
                StatusCode::FORBIDDEN,
                "Sellers do not browse properties. Please use \"List Property\".".to_string(),
            ),
            AppError::PropertyNotFound => {
                (StatusCode::NOT_FOUND, "Property not found".to_string())
            }
            AppError::SignupNotFound => (
                StatusCode::NOT_FOUND,
                "Signup request not found or already verified".to_string(),
            ),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized - valid admin key required".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
