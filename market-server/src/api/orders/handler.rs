//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{Order, OrderCreate, OrderSetCapacity, OrderSetLogistics};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};

#[derive(Deserialize)]
pub struct OrderQuery {
    pub buyer_id: Option<String>,
}

/// GET /api/orders - 全部订单，可按买家过滤
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let mut orders = state.orders.orders()?;

    if let Some(buyer_id) = &query.buyer_id {
        orders.retain(|o| &o.buyer_id == buyer_id);
    }

    Ok(Json(orders))
}

/// GET /api/orders/{id} - 单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.orders.find_order(&id)?;
    Ok(Json(order))
}

/// POST /api/orders - 创建订单
///
/// 单价取自挂牌库存，初始状态 PENDING_CAPACITY。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    validate_required_text(&payload.stock_id, "stock_id", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.buyer_id, "buyer_id", MAX_SHORT_TEXT_LEN)?;

    let order = state
        .orders
        .create_order(&payload.stock_id, &payload.buyer_id, payload.qty_kg)?;

    Ok(Json(order))
}

/// PUT /api/orders/{id}/capacity - 产能确认
pub async fn set_capacity(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderSetCapacity>,
) -> AppResult<Json<Order>> {
    let order = state.orders.set_capacity(&id, payload.ok)?;
    Ok(Json(order))
}

/// PUT /api/orders/{id}/logistics - 安排物流
pub async fn set_logistics(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderSetLogistics>,
) -> AppResult<Json<Order>> {
    let order = state.orders.set_logistics(&id, payload.mode)?;
    Ok(Json(order))
}

/// PUT /api/orders/{id}/delivery - 确认送达，扣减库存
pub async fn confirm_delivery(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.orders.confirm_delivery(&id)?;
    Ok(Json(order))
}
