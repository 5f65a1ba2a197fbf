use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use sea_orm::DbErr;

use crate::utils::flash;
use crate::views;

/// Generic rejection for failed logins. Deliberately does not say which field was wrong.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Please check your login details and try again.";
pub const EMAIL_TAKEN_MESSAGE: &str = "This email address already exists! Please try again!";
pub const EMAIL_NOT_FOUND_MESSAGE: &str = "Email not found. Please check and try again.";
pub const ADMIN_REQUIRED_MESSAGE: &str = "You must be an administrator to view that page.";

/// Application-level error type.
///
/// Every variant except `Internal` is recovered at the handler boundary as a
/// flash-and-redirect or an error page.
#[derive(Debug)]
pub enum AppError {
    /// Malformed form input. Flashed, then the client is sent back to `back_to`.
    Validation { message: String, back_to: String },
    /// The request body could not be decoded at all.
    BadRequest(String),
    /// No session identity on a page that requires one.
    Unauthenticated,
    /// Missing identity or wrong role on an admin page.
    AdminRequired,
    InvalidCredentials,
    EmailTaken,
    EmailNotFound,
    /// A unique or foreign-key constraint rejected the write.
    Conflict { message: String, back_to: String },
    NotFound(String),
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>, back_to: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            back_to: back_to.into(),
        }
    }

    pub fn conflict(message: impl Into<String>, back_to: impl Into<String>) -> Self {
        AppError::Conflict {
            message: message.into(),
            back_to: back_to.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { message, back_to }
            | AppError::Conflict { message, back_to } => flash::redirect(&back_to, &message),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                views::error_page(StatusCode::BAD_REQUEST, &msg),
            )
                .into_response(),
            AppError::Unauthenticated => Redirect::to("/login").into_response(),
            AppError::AdminRequired => flash::redirect("/login", ADMIN_REQUIRED_MESSAGE),
            AppError::InvalidCredentials => {
                flash::redirect("/login", INVALID_CREDENTIALS_MESSAGE)
            }
            AppError::EmailTaken => flash::redirect("/register", EMAIL_TAKEN_MESSAGE),
            AppError::EmailNotFound => flash::redirect("/forgot_password", EMAIL_NOT_FOUND_MESSAGE),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                views::error_page(StatusCode::NOT_FOUND, &msg),
            )
                .into_response(),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    views::error_page(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An unexpected error occurred",
                    ),
                )
                    .into_response()
            }
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Internal(err.to_string())
    }
}
