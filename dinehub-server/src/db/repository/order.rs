//! Order Repository
//!
//! Persistence for orders. Status changes must come through
//! `OrderManager`, which validates the state machine first.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::Order;
use shared::OrderStatus;
use shared::util::now_millis;

const ORDER_TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// List orders, newest first, optionally filtered by status
    pub async fn find_all(&self, status: Option<OrderStatus>) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = match status {
            Some(status) => {
                self.base
                    .db()
                    .query("SELECT * FROM orders WHERE status = $status ORDER BY createdAt DESC")
                    .bind(("status", status))
                    .await?
                    .take(0)?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM orders ORDER BY createdAt DESC")
                    .await?
                    .take(0)?
            }
        };
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let record_id = parse_record_id(ORDER_TABLE, id)?;
        let order: Option<Order> = self.base.db().select(record_id).await?;
        Ok(order)
    }

    /// The `limit` newest orders
    pub async fn find_recent(&self, limit: usize) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders ORDER BY createdAt DESC LIMIT $limit")
            .bind(("limit", limit))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Orders created at or after `start` millis, ascending
    pub async fn find_since(&self, start: i64) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders WHERE createdAt >= $start ORDER BY createdAt ASC")
            .bind(("start", start))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Persist a new order.
    ///
    /// A unique-index violation on `order_number` comes back as
    /// [`RepoError::Duplicate`] so the caller can retry with a fresh number.
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Persist a status change and bump `updated_at`
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        #[derive(serde::Serialize)]
        struct StatusPatch {
            status: OrderStatus,
            #[serde(rename = "updatedAt")]
            updated_at: i64,
        }

        let record_id = parse_record_id(ORDER_TABLE, id)?;
        let updated: Option<Order> = self
            .base
            .db()
            .update(record_id)
            .merge(StatusPatch {
                status,
                updated_at: now_millis(),
            })
            .await?;

        updated.ok_or_else(|| RepoError::NotFound(format!("Order {}", id)))
    }
}
