use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::auth::{register, register_form},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/register/form", get(register_form))
}
