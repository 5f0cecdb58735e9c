use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::{api::ErrorDto, user::RegisterValidationError};

#[derive(Error, Debug)]
pub enum RegisterError {
    /// The request is missing a field or a field exceeds its limit.
    ///
    /// Results in a 400 Bad Request response carrying the validation message.
    #[error("{0}")]
    Invalid(RegisterValidationError),

    /// Another account already uses this email address.
    ///
    /// Results in a 409 Conflict response.
    #[error("Email address already has a user")]
    EmailTaken,

    /// Another account already uses this username.
    ///
    /// Results in a 409 Conflict response.
    #[error("Username already exists")]
    UsernameTaken,
}

impl From<RegisterValidationError> for RegisterError {
    fn from(err: RegisterValidationError) -> Self {
        RegisterError::Invalid(err)
    }
}

/// Converts registration errors into HTTP responses.
///
/// The error message is returned to the client as-is since none of the variants
/// carry internal details.
///
/// # Returns
/// - 400 Bad Request - For `Invalid`
/// - 409 Conflict - For `EmailTaken` and `UsernameTaken`
impl IntoResponse for RegisterError {
    fn into_response(self) -> Response {
        tracing::debug!("Registration rejected: {}", self);

        let status = match self {
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::EmailTaken | Self::UsernameTaken => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
