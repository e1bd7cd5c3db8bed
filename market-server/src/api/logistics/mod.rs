//! Logistics API 模块
//!
//! 物流安排内嵌在订单里，此接口把它们平铺成列表视图。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/logistics", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list))
}
