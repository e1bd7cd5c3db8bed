//! Health API Handlers

use axum::Json;

#[derive(serde::Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// GET /api/health - 服务健康检查
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
