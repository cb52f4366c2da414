//! Order Model
//!
//! 订单是下单时刻的价格快照：行项目复制菜品名称和价格，
//! 之后菜单怎么改都不影响已有订单。

use serde::{Deserialize, Serialize};
use shared::{CartItemInput, CustomerInfo, OrderCreate, OrderStatus, PaymentStatus};
use surrealdb::RecordId;

use super::serde_helpers;

/// Frozen order line item (price snapshot at order time)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    /// Menu item id at order time; provenance only, never dereferenced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item: Option<String>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

impl From<CartItemInput> for OrderLineItem {
    fn from(item: CartItemInput) -> Self {
        Self {
            menu_item: item.menu_item,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Human-readable sequential number, unique across all orders
    pub order_number: String,
    pub customer: CustomerInfo,
    pub items: Vec<OrderLineItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub payment_status: PaymentStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Order {
    /// Build a pending order from a validated create payload
    pub fn from_create(data: OrderCreate, order_number: String, now: i64) -> Self {
        Self {
            id: None,
            order_number,
            customer: data.customer,
            items: data.items.into_iter().map(OrderLineItem::from).collect(),
            subtotal: data.subtotal,
            tax: data.tax,
            total: data.total,
            status: OrderStatus::Pending,
            special_instructions: data.special_instructions,
            payment_status: PaymentStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }
}
