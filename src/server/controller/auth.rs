use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        user::{RegisterFormDto, RegisterUserDto},
    },
    server::{
        error::AppError, model::user::RegisterUserParam,
        service::registration::RegistrationService, state::AppState,
    },
};

/// Registers a new account.
///
/// A body that is not JSON is a 400 with the rejection text; a JSON body with absent
/// keys is reported as missing fields.
///
/// # Returns
/// - 201 Created - `{"message": "User created successfully"}`
/// - 400 Bad Request - Malformed body, missing field or field too long
/// - 409 Conflict - Email address or username already registered
/// - 500 Internal Server Error - Database failure
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let param = RegisterUserParam::from_dto(payload)?;
    let registration_service = RegistrationService::new(&state.db);

    registration_service.register(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "User created successfully".to_string(),
        }),
    ))
}

/// Field limits for the register page.
pub async fn register_form() -> impl IntoResponse {
    Json(RegisterFormDto::default())
}
