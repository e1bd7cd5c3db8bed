//! 统一错误处理
//!
//! 所有 handler 返回 [`AppResult<T>`]，错误统一序列化为：
//!
//! ```json
//! { "error": "human readable message" }
//! ```
//!
//! # 错误映射
//!
//! | 变体 | 状态码 |
//! |------|--------|
//! | NotFound | 404 |
//! | Conflict | 409 |
//! | Unauthorized | 401 |
//! | Validation | 400 |
//! | Storage / Internal | 500 |
//!
//! 5xx 错误对客户端隐藏细节，完整错误写入日志。
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Order not found"))
//! ```

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use tracing::error;

use crate::auth::AuthError;
use crate::orders::ManagerError;
use crate::store::StorageError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 业务逻辑错误 (4xx) ==========
    #[error("{0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("{0}")]
    /// 资源冲突 (409)
    Conflict(String),

    #[error("{0}")]
    /// 未认证 (401)
    Unauthorized(String),

    #[error("{0}")]
    /// 验证失败 (400)
    Validation(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Storage error: {0}")]
    /// 存储错误 (500)
    Storage(#[from] StorageError),

    #[error("{0}")]
    /// 内部错误 (500)
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            // 5xx 细节只进日志，不回给客户端
            error!(target: "internal", error = %self, "Request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(serde_json::json!({ "error": message }));
        (status, body).into_response()
    }
}

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        let message = err.to_string();
        match err {
            ManagerError::OrderNotFound(_) | ManagerError::StockNotFound(_) => {
                AppError::NotFound(message)
            }
            ManagerError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let message = err.to_string();
        match err {
            AuthError::EmailTaken => AppError::Conflict(message),
            AuthError::InvalidCredentials | AuthError::NotAuthenticated => {
                AppError::Unauthorized(message)
            }
            AuthError::Hash(_) => AppError::Internal(message),
            AuthError::Storage(e) => AppError::Storage(e),
        }
    }
}
