//! Orders API 模块

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", order_routes())
}

fn order_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        // PUT kept for the older client variant
        .route(
            "/{id}/status",
            axum::routing::patch(handler::update_status).put(handler::update_status),
        )
}
