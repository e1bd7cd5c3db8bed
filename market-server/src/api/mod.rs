//! HTTP API 模块
//!
//! # 路由总览
//!
//! | 前缀 | 说明 |
//! |------|------|
//! | `/api/health` | 健康检查 |
//! | `/api/auth` | 注册 / 登录 / 登出 / 当前用户 |
//! | `/api/users` | 用户 CRUD |
//! | `/api/stock` | 挂牌库存、需求匹配、报价建议 |
//! | `/api/demand` | 买家需求 |
//! | `/api/orders` | 订单与生命周期操作 |
//! | `/api/logistics` | 物流安排（从订单导出） |
//! | `/api/analytics` | KPI 汇总 |
//!
//! 错误统一为 `{ "error": "..." }`，见 [`crate::utils::error`]。

pub mod analytics;
pub mod auth;
pub mod demand;
pub mod health;
pub mod logistics;
pub mod orders;
pub mod stock;
pub mod users;

use axum::Router;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::core::ServerState;

pub use crate::utils::{AppError, AppResult};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_app() -> Router<ServerState> {
    Router::new()
        // Health API - public route
        .merge(health::router())
        // Auth API - session management
        .merge(auth::router())
        // Entity APIs
        .merge(users::router())
        .merge(stock::router())
        .merge(demand::router())
        .merge(orders::router())
        .merge(logistics::router())
        // Analytics API - read-only aggregation
        .merge(analytics::router())
        .fallback(fallback)
}

/// 访问日志中间件
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());

    response
}

async fn fallback() -> AppError {
    AppError::not_found("Not found")
}
