//! Stock API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/stock", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/price-suggestion", get(handler::price_suggestion))
        .route("/{id}", get(handler::get_by_id).put(handler::update))
        .route("/{id}/matches", get(handler::matches))
}
