//! Analytics Repository
//!
//! Read-only rollups over the order table. Everything here is computed
//! fresh on every call; there is no cached or incremental state.

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};

/// Whole-store aggregate row
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StoreTotals {
    pub total_revenue: f64,
    pub total_orders: i64,
    pub total_customers: i64,
}

impl Default for StoreTotals {
    fn default() -> Self {
        Self {
            total_revenue: 0.0,
            total_orders: 0,
            total_customers: 0,
        }
    }
}

#[derive(Clone)]
pub struct AnalyticsRepository {
    base: BaseRepository,
}

impl AnalyticsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Revenue, order count and distinct customer count over all orders.
    ///
    /// Distinct customers are keyed by phone number, the one required
    /// contact field.
    pub async fn store_totals(&self) -> RepoResult<StoreTotals> {
        let mut result = self
            .base
            .db()
            .query(
                r#"
                LET $orders = (SELECT total, customer.phone AS phone FROM orders);

                RETURN {
                    total_revenue: math::sum($orders.total) OR 0,
                    total_orders: count($orders),
                    total_customers: count(array::distinct($orders.phone))
                };
                "#,
            )
            .await?;

        let totals: Option<StoreTotals> = result.take(1)?;
        Ok(totals.unwrap_or_default())
    }

    /// Sum of order totals with `start <= createdAt < end` (millis)
    pub async fn revenue_between(&self, start: i64, end: i64) -> RepoResult<f64> {
        let mut result = self
            .base
            .db()
            .query(
                "RETURN math::sum((SELECT VALUE total FROM orders \
                 WHERE createdAt >= $start AND createdAt < $end)) OR 0",
            )
            .bind(("start", start))
            .bind(("end", end))
            .await?;

        let revenue: Option<f64> = result.take(0)?;
        Ok(revenue.unwrap_or(0.0))
    }
}
