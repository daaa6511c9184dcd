use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use crate::http_error::AppError;
use crate::plugins::auth::models::{LoginRequest, LoginResponse, LoginUser};
use crate::store::DynStorage;

pub async fn login(
    Extension(storage): Extension<DynStorage>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(payload) = payload?;
    let creds = payload.validate()?;

    // the password is never checked; any well-formed pair logs in
    let (user, created) = storage.get_or_create_user(creds.clone()).await?;
    if created {
        tracing::debug!(user_id = %user.id, "registered mock user");
    }

    tracing::info!(username = %creds.username, "login accepted");
    Ok(Json(LoginResponse {
        success: true,
        message: format!("Welcome back, {}!", creds.username),
        user: LoginUser { username: creds.username },
    }))
}
