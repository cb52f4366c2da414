//! Analytics API Handlers
//!
//! Dashboard rollups, recomputed from the order table on every call.
//! Aggregation failures surface as real 500s; there is no placeholder
//! fallback hiding an outage.

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::Order;
use crate::db::repository::{AnalyticsRepository, OrderRepository};
use crate::utils::AppResult;
use shared::ApiResponse;
use shared::util::{millis_to_day, now_millis};

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;
const SALES_WINDOW_DAYS: i64 = 7;
const RECENT_ORDERS_LIMIT: usize = 10;

// ============================================================================
// Response Types
// ============================================================================

/// Headline dashboard numbers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_revenue: f64,
    pub total_orders: i64,
    /// Distinct customer phone numbers
    pub total_customers: i64,
    /// Week-over-week revenue change, percent
    pub growth_rate: f64,
}

/// One day in the trailing sales window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesPoint {
    /// Calendar day, "YYYY-MM-DD"
    pub day: String,
    /// Revenue for the day
    pub sales: f64,
    /// Order count for the day
    pub orders: i64,
}

/// Full dashboard response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub sales_data: Vec<SalesPoint>,
    pub recent_orders: Vec<Order>,
}

// ============================================================================
// Aggregation Helpers
// ============================================================================

/// Group (created_at millis, total) rows into per-day buckets, ascending
pub(crate) fn bucket_by_day(rows: impl IntoIterator<Item = (i64, f64)>) -> Vec<SalesPoint> {
    let mut buckets: BTreeMap<String, (f64, i64)> = BTreeMap::new();
    for (created_at, total) in rows {
        let entry = buckets.entry(millis_to_day(created_at)).or_insert((0.0, 0));
        entry.0 += total;
        entry.1 += 1;
    }
    buckets
        .into_iter()
        .map(|(day, (sales, orders))| SalesPoint { day, sales, orders })
        .collect()
}

/// Week-over-week percent change, rounded to one decimal.
///
/// An empty prior window yields 0.0 rather than a division blowup; there
/// is nothing meaningful to compare against.
pub(crate) fn growth_rate(current: f64, previous: f64) -> f64 {
    if previous <= 0.0 {
        return 0.0;
    }
    let pct = (current - previous) / previous * 100.0;
    (pct * 10.0).round() / 10.0
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/analytics/dashboard - 统计看板
pub async fn dashboard(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<DashboardResponse>>> {
    let analytics = AnalyticsRepository::new(state.db.clone());
    let orders = OrderRepository::new(state.db.clone());

    let totals = analytics.store_totals().await?;

    let now = now_millis();
    let window_start = now - SALES_WINDOW_DAYS * DAY_MILLIS;
    let prior_start = window_start - SALES_WINDOW_DAYS * DAY_MILLIS;

    let window_orders = orders.find_since(window_start).await?;
    let sales_data = bucket_by_day(window_orders.iter().map(|o| (o.created_at, o.total)));

    let current_revenue: f64 = window_orders.iter().map(|o| o.total).sum();
    let prior_revenue = analytics.revenue_between(prior_start, window_start).await?;

    let recent_orders = orders.find_recent(RECENT_ORDERS_LIMIT).await?;

    let response = DashboardResponse {
        stats: DashboardStats {
            total_revenue: totals.total_revenue,
            total_orders: totals.total_orders,
            total_customers: totals.total_customers,
            growth_rate: growth_rate(current_revenue, prior_revenue),
        },
        sales_data,
        recent_orders,
    };

    Ok(Json(ApiResponse::ok(response)))
}
