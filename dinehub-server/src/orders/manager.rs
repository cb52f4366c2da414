//! Order Manager
//!
//! 订单创建与状态流转的唯一入口。

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::Order;
use crate::db::repository::{OrderRepository, RepoError, SystemStateRepository};
use crate::utils::{AppError, AppResult};
use shared::util::now_millis;
use shared::{OrderCreate, OrderStatus};

/// Retry budget for order-number collisions.
///
/// The sequence counter is atomic, so a collision means a concurrent
/// writer reserved the same formatted number out of band (e.g. restored
/// data). One fresh number per attempt is enough to get past it.
const MAX_NUMBER_ATTEMPTS: u32 = 3;

/// Format a sequence value as a human-readable order number
fn format_order_number(seq: i64) -> String {
    format!("ORD-{:04}", seq)
}

/// Money comparison at cent precision
fn cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Validate a create payload against the order invariants.
///
/// - cart must be non-empty, quantities >= 1, prices >= 0
/// - customer name and phone are required
/// - declared subtotal must equal the sum over the item snapshots
/// - declared total must equal subtotal + tax
fn validate_create(data: &OrderCreate) -> AppResult<()> {
    if data.items.is_empty() {
        return Err(AppError::validation("Cart must not be empty"));
    }
    if data.customer.name.trim().is_empty() {
        return Err(AppError::validation("Customer name is required"));
    }
    if data.customer.phone.trim().is_empty() {
        return Err(AppError::validation("Customer phone is required"));
    }

    for item in &data.items {
        if item.quantity < 1 {
            return Err(AppError::validation(format!(
                "Invalid quantity for item '{}'",
                item.name
            )));
        }
        if item.price < 0.0 {
            return Err(AppError::validation(format!(
                "Invalid price for item '{}'",
                item.name
            )));
        }
    }

    if data.tax < 0.0 {
        return Err(AppError::validation("Tax must be >= 0"));
    }

    let computed_subtotal: i64 = data
        .items
        .iter()
        .map(|i| cents(i.price) * i.quantity as i64)
        .sum();
    if computed_subtotal != cents(data.subtotal) {
        return Err(AppError::validation(
            "Subtotal does not match the sum of item prices",
        ));
    }
    if cents(data.subtotal) + cents(data.tax) != cents(data.total) {
        return Err(AppError::validation("Total must equal subtotal + tax"));
    }

    Ok(())
}

/// Order lifecycle manager
#[derive(Clone)]
pub struct OrderManager {
    orders: OrderRepository,
    counters: SystemStateRepository,
}

impl OrderManager {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            counters: SystemStateRepository::new(db),
        }
    }

    /// Create an order from a cart snapshot.
    ///
    /// Reserves a number from the atomic sequence, persists with
    /// `status = pending`, and retries with a fresh number if the
    /// unique index reports a collision. A failed persist creates
    /// nothing; there is no partial state to roll back.
    pub async fn create_order(&self, data: OrderCreate) -> AppResult<Order> {
        validate_create(&data)?;

        let mut last_duplicate: Option<RepoError> = None;

        for attempt in 1..=MAX_NUMBER_ATTEMPTS {
            let seq = self.counters.next_order_seq().await?;
            let order_number = format_order_number(seq);
            let order = Order::from_create(data.clone(), order_number.clone(), now_millis());

            match self.orders.create(order).await {
                Ok(created) => {
                    tracing::info!(
                        order_number = %created.order_number,
                        total = created.total,
                        "Order created"
                    );
                    return Ok(created);
                }
                Err(RepoError::Duplicate(msg)) => {
                    tracing::warn!(
                        order_number = %order_number,
                        attempt,
                        "Order number collision, retrying"
                    );
                    last_duplicate = Some(RepoError::Duplicate(msg));
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(last_duplicate
            .map(AppError::from)
            .unwrap_or_else(|| AppError::conflict("Could not reserve an order number")))
    }

    /// Advance an order through the state machine.
    ///
    /// Illegal jumps (e.g. completed -> pending) are rejected before
    /// anything is persisted.
    pub async fn transition(&self, id: &str, new_status: OrderStatus) -> AppResult<Order> {
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {}", id)))?;

        order
            .status
            .validate_transition(new_status)
            .map_err(|e| AppError::business_rule(e.to_string()))?;

        let updated = self.orders.update_status(id, new_status).await?;
        tracing::info!(
            order_number = %updated.order_number,
            from = %order.status,
            to = %new_status,
            "Order status updated"
        );
        Ok(updated)
    }

    /// List orders, newest first. `None` means no status filter.
    pub async fn list_orders(&self, status: Option<OrderStatus>) -> AppResult<Vec<Order>> {
        Ok(self.orders.find_all(status).await?)
    }

    /// Single order lookup
    pub async fn get_order(&self, id: &str) -> AppResult<Order> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {}", id)))
    }
}
