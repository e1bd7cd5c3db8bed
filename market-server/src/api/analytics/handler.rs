//! Analytics API Handlers

use axum::{Json, extract::State};

use crate::analytics::{self, KpiReport};
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/analytics/kpis - 市场 KPI 汇总
pub async fn kpis(State(state): State<ServerState>) -> AppResult<Json<KpiReport>> {
    let report = analytics::kpis(&state.store)?;
    Ok(Json(report))
}
