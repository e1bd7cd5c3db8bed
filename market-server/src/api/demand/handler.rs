//! Demand API Handlers

use axum::{Json, extract::State};

use shared::models::{DemandCreate, DemandEntry};
use shared::util::{new_id, now_millis};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};

/// GET /api/demand - 全部需求，按录入顺序
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DemandEntry>>> {
    let demand = state.store.demand()?;
    Ok(Json(demand))
}

/// POST /api/demand - 新需求
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DemandCreate>,
) -> AppResult<Json<DemandEntry>> {
    validate_required_text(&payload.crop, "crop", MAX_NAME_LEN)?;
    validate_required_text(&payload.buyer_id, "buyer_id", MAX_SHORT_TEXT_LEN)?;

    let entry = DemandEntry {
        id: new_id(),
        buyer_id: payload.buyer_id,
        crop: payload.crop,
        qty_needed: payload.qty_needed,
        created_at: now_millis(),
    };

    let mut demand = state.store.demand()?;
    demand.push(entry.clone());
    state.store.put_demand(&demand)?;

    Ok(Json(entry))
}
