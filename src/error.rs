//! Error types for the Libris server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stable error codes carried in every error response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    BadValue = 2,
    StorageFailure = 3,
    NoSuchMember = 4,
    NoSuchBook = 5,
    NoSuchRecord = 6,
    MemberInactive = 7,
    BookUnavailable = 8,
    NoOpenBorrow = 9,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Member with id {0} not found")]
    MemberNotFound(i32),

    #[error("Book with id {0} not found")]
    BookNotFound(i32),

    #[error("Not found: {0}")]
    RecordNotFound(String),

    #[error("Member account {0} is not active")]
    MemberInactive(i32),

    #[error("Book {0} is not available for borrowing")]
    BookUnavailable(i32),

    #[error("No active borrowing record found for member {user_id} and book {book_id}")]
    NoOpenBorrow { user_id: i32, book_id: i32 },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue),
            AppError::MemberNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchMember),
            AppError::BookNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchBook),
            AppError::RecordNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchRecord),
            AppError::MemberInactive(_) => (StatusCode::BAD_REQUEST, ErrorCode::MemberInactive),
            AppError::BookUnavailable(_) => (StatusCode::BAD_REQUEST, ErrorCode::BookUnavailable),
            AppError::NoOpenBorrow { .. } => (StatusCode::NOT_FOUND, ErrorCode::NoOpenBorrow),
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::StorageFailure)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Failure)
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            code: code as u32,
            error: format!("{:?}", code),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
