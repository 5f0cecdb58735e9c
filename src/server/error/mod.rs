//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod register;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, register::RegisterError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `RegisterError`
/// handle their own response mapping, while generic variants provide standard HTTP
/// status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Registration was rejected.
    ///
    /// Delegates to `RegisterError::into_response()` for 400/409 mapping.
    #[error(transparent)]
    RegisterErr(#[from] RegisterError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For `ConfigErr`, `DbErr` and `InternalError`
/// - Variable - For `RegisterErr`, delegated to `RegisterError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::RegisterErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::RegisterValidationError;

    async fn error_body(response: Response) -> ErrorDto {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Expected: 400 with the validation message
    #[tokio::test]
    async fn invalid_registration_is_bad_request() {
        let response = AppError::from(RegisterError::Invalid(
            RegisterValidationError::MissingFields,
        ))
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error_body(response).await.error,
            "Missing username or password or email address"
        );
    }

    /// Expected: 409 for both duplicate variants
    #[tokio::test]
    async fn duplicate_registration_is_conflict() {
        let response = AppError::from(RegisterError::EmailTaken).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            error_body(response).await.error,
            "Email address already has a user"
        );

        let response = AppError::from(RegisterError::UsernameTaken).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(error_body(response).await.error, "Username already exists");
    }

    /// Expected: 500 with a generic message, details stay server-side
    #[tokio::test]
    async fn database_error_hides_details() {
        let response =
            AppError::from(sea_orm::DbErr::Custom("disk I/O error".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_body(response).await.error, "Internal server error");
    }

    #[tokio::test]
    async fn bad_request_keeps_message() {
        let message = "Expected request with `Content-Type: application/json`";
        let response = AppError::BadRequest(message.to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_body(response).await.error, message);
    }

    #[tokio::test]
    async fn not_found_keeps_message() {
        let response = AppError::NotFound("No such user".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_body(response).await.error, "No such user");
    }

    /// Expected: 500 with a generic message, the custom message is only logged
    #[tokio::test]
    async fn internal_error_hides_message() {
        let response =
            AppError::InternalError("password hash column missing".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_body(response).await.error, "Internal server error");
    }
}
