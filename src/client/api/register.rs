use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        api::MessageDto,
        user::{RegisterFormDto, RegisterUserDto},
    },
};

pub async fn get_register_form() -> Result<RegisterFormDto, ApiError> {
    let response = send_request(get("/api/auth/register/form")).await?;
    parse_response(response).await
}

pub async fn register_user(dto: RegisterUserDto) -> Result<MessageDto, ApiError> {
    let body = serialize_json(&dto)?;
    let response = send_request(post("/api/auth/register").body(body)).await?;
    parse_response(response).await
}
