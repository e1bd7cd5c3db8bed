//! Stock API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{DemandEntry, StockCreate, StockListing, StockUpdate};
use shared::util::new_id;

use crate::core::ServerState;
use crate::pricing::{self, PriceSuggestion};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
pub struct StockQuery {
    pub crop: Option<String>,
    pub location: Option<String>,
}

/// GET /api/stock - 挂牌列表（隐藏售罄）
///
/// `?crop=` 不区分大小写做子串匹配，`?location=` 精确匹配。
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<StockQuery>,
) -> AppResult<Json<Vec<StockListing>>> {
    let stock = state.store.stock()?;

    let crop_filter = query
        .crop
        .as_deref()
        .map(str::to_lowercase)
        .filter(|c| !c.is_empty());

    let listings = stock
        .into_iter()
        .filter(|l| l.has_quantity())
        .filter(|l| match &crop_filter {
            Some(c) => l.crop.to_lowercase().contains(c.as_str()),
            None => true,
        })
        .filter(|l| match &query.location {
            Some(loc) if !loc.is_empty() => l.location.as_deref() == Some(loc.as_str()),
            _ => true,
        })
        .collect();

    Ok(Json(listings))
}

/// GET /api/stock/{id} - 单个挂牌
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<StockListing>> {
    let stock = state.store.stock()?;
    let listing = stock
        .into_iter()
        .find(|l| l.id == id)
        .ok_or_else(|| AppError::not_found("Stock not found"))?;

    Ok(Json(listing))
}

/// POST /api/stock - 新挂牌
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StockCreate>,
) -> AppResult<Json<StockListing>> {
    validate_required_text(&payload.crop, "crop", MAX_NAME_LEN)?;
    validate_required_text(&payload.farmer_id, "farmer_id", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.variety, "variety", MAX_NAME_LEN)?;
    validate_optional_text(&payload.location, "location", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.harvest_date, "harvest_date", MAX_SHORT_TEXT_LEN)?;

    let listing = StockListing {
        id: new_id(),
        farmer_id: payload.farmer_id,
        crop: payload.crop,
        variety: payload.variety,
        qty_kg: payload.qty_kg,
        location: payload.location,
        harvest_date: payload.harvest_date,
        price_per_kg: payload.price_per_kg,
        status: "available".to_string(),
    };

    let mut stock = state.store.stock()?;
    stock.push(listing.clone());
    state.store.put_stock(&stock)?;

    Ok(Json(listing))
}

/// PUT /api/stock/{id} - 更新挂牌
///
/// 数量不在此处修改，只随送达确认扣减。
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StockUpdate>,
) -> AppResult<Json<StockListing>> {
    validate_optional_text(&payload.variety, "variety", MAX_NAME_LEN)?;
    validate_optional_text(&payload.location, "location", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.harvest_date, "harvest_date", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.status, "status", MAX_SHORT_TEXT_LEN)?;

    let mut stock = state.store.stock()?;
    let listing = stock
        .iter_mut()
        .find(|l| l.id == id)
        .ok_or_else(|| AppError::not_found("Stock not found"))?;

    if let Some(variety) = payload.variety {
        listing.variety = Some(variety);
    }
    if let Some(location) = payload.location {
        listing.location = Some(location);
    }
    if let Some(harvest_date) = payload.harvest_date {
        listing.harvest_date = Some(harvest_date);
    }
    if let Some(price) = payload.price_per_kg {
        listing.price_per_kg = price;
    }
    if let Some(status) = payload.status {
        listing.status = status;
    }

    let updated = listing.clone();
    state.store.put_stock(&stock)?;

    Ok(Json(updated))
}

/// GET /api/stock/{id}/matches - 与挂牌匹配的开放需求
pub async fn matches(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<DemandEntry>>> {
    let stock = state.store.stock()?;
    let listing = stock
        .iter()
        .find(|l| l.id == id)
        .ok_or_else(|| AppError::not_found("Stock not found"))?;

    let matches = pricing::find_demand_matches(&state.store, listing)?;

    Ok(Json(matches))
}

#[derive(Deserialize)]
pub struct SuggestionQuery {
    pub crop: String,
    pub price: f64,
}

/// GET /api/stock/price-suggestion?crop=Tomatoes&price=30 - 报价建议
pub async fn price_suggestion(
    State(state): State<ServerState>,
    Query(query): Query<SuggestionQuery>,
) -> AppResult<Json<PriceSuggestion>> {
    let suggestion = pricing::suggest_price(&state.store, query.price, &query.crop)?;

    Ok(Json(suggestion))
}
