//! Orders API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::Order;
use crate::orders::OrderManager;
use crate::utils::{AppError, AppResult};
use shared::{ApiResponse, OrderCreate, OrderStatus, StatusUpdate};

/// Query params for GET /api/orders
#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    /// Status filter; absent or "all" means every order
    pub status: Option<String>,
}

fn parse_status(raw: Option<&str>) -> AppResult<Option<OrderStatus>> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => serde_json::from_value::<OrderStatus>(serde_json::Value::String(
            s.trim().to_lowercase(),
        ))
        .map(Some)
        .map_err(|_| AppError::validation(format!("Unknown order status: {}", s))),
    }
}

/// GET /api/orders - 获取订单列表 (新单在前)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    let status = parse_status(query.status.as_deref())?;
    let manager = OrderManager::new(state.db.clone());
    let orders = manager.list_orders(status).await?;
    Ok(Json(ApiResponse::ok(orders)))
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let manager = OrderManager::new(state.db.clone());
    let order = manager.get_order(&id).await?;
    Ok(Json(ApiResponse::ok(order)))
}

/// POST /api/orders - 从购物车快照创建订单
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Order>>)> {
    let manager = OrderManager::new(state.db.clone());
    let order = manager.create_order(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            order,
            "Order placed successfully",
        )),
    ))
}

/// PATCH/PUT /api/orders/:id/status - 推进订单状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<StatusUpdate>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let manager = OrderManager::new(state.db.clone());
    let order = manager.transition(&id, data.status).await?;
    Ok(Json(ApiResponse::ok_with_message(
        order,
        "Order status updated",
    )))
}
