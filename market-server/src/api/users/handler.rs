//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{User, UserCreate, UserPublic, UserUpdate};
use shared::util::{new_id, now_millis};

use crate::core::ServerState;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/users - 全部用户（不含口令哈希）
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<UserPublic>>> {
    let users = state.store.users()?;
    Ok(Json(users.iter().map(UserPublic::from).collect()))
}

/// GET /api/users/{id} - 单个用户
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserPublic>> {
    let users = state.store.users()?;
    let user = users
        .iter()
        .find(|u| u.id == id)
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(UserPublic::from(user)))
}

/// POST /api/users - 创建用户（不建立会话，与 /api/auth/register 不同）
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<UserPublic>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;

    let email = payload.email.trim().to_lowercase();

    let mut users = state.store.users()?;
    if users.iter().any(|u| u.email.trim().to_lowercase() == email) {
        return Err(AppError::conflict("Email already exists"));
    }

    let password_hash = User::hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("口令哈希失败: {e}")))?;

    let user = User {
        id: new_id(),
        role: payload.role,
        name: payload.name.trim().to_string(),
        email,
        password_hash,
        created_at: now_millis(),
    };

    let public = UserPublic::from(&user);
    users.push(user);
    state.store.put_users(&users)?;

    Ok(Json(public))
}

/// PUT /api/users/{id} - 更新姓名 / 邮箱
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<UserPublic>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;

    let mut users = state.store.users()?;
    let user = users
        .iter_mut()
        .find(|u| u.id == id)
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if let Some(name) = payload.name {
        user.name = name.trim().to_string();
    }
    if let Some(email) = payload.email {
        user.email = email.trim().to_lowercase();
    }

    let public = UserPublic::from(&*user);
    state.store.put_users(&users)?;

    Ok(Json(public))
}
