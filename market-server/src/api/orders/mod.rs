//! Order API 模块
//!
//! 生命周期操作各自独立成路由，状态只能沿状态机前进：
//! capacity → logistics → delivery。

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/capacity", put(handler::set_capacity))
        .route("/{id}/logistics", put(handler::set_logistics))
        .route("/{id}/delivery", put(handler::confirm_delivery))
}
