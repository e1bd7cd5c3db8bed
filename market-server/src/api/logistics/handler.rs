//! Logistics API Handlers

use axum::{Json, extract::State};

use shared::models::LogisticsAssignment;

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/logistics - 全部物流安排
///
/// 从订单集合导出，顺序与订单一致。
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<LogisticsAssignment>>> {
    let orders = state.store.orders()?;

    let assignments = orders
        .into_iter()
        .filter_map(|o| o.logistics)
        .collect();

    Ok(Json(assignments))
}
