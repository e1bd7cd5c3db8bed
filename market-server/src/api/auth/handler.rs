//! Auth API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;

use shared::models::{UserPublic, UserRole};

use crate::auth::AuthError;
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_required_text,
};

#[derive(Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/register - 注册并登录
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<RegisterPayload>,
) -> AppResult<Json<UserPublic>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;

    let user = state.auth.register(
        &payload.name,
        &payload.email,
        &payload.password,
        payload.role,
    )?;

    Ok(Json(user))
}

/// POST /api/auth/login - 登录
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginPayload>,
) -> AppResult<Json<UserPublic>> {
    let user = state.auth.login(&payload.email, &payload.password)?;
    Ok(Json(user))
}

/// POST /api/auth/logout - 登出
pub async fn logout(State(state): State<ServerState>) -> AppResult<Json<serde_json::Value>> {
    state.auth.logout()?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// GET /api/auth/me - 当前登录用户
pub async fn me(State(state): State<ServerState>) -> AppResult<Json<UserPublic>> {
    let user = state
        .auth
        .current_user()?
        .ok_or(AuthError::NotAuthenticated)?;

    Ok(Json(user))
}
