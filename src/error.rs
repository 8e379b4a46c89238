use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    UserNotFound,
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::UserNotFound => (
                StatusCode::NOT_FOUND,
                "user not found".to_string(),
                "No phone number is mapped to this user".to_string(),
            ),
            AppError::Internal(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                detail,
                "Request failed".to_string(),
            ),
        };

        let body = Json(ErrorResponse {
            success: false,
            error,
            message,
        });

        (status, body).into_response()
    }
}
