//! Domain Models

pub mod menu_item;
pub mod order;

// Re-exports
pub use menu_item::{MenuCategory, MenuItemCreate, MenuItemUpdate};
pub use order::{
    CartItemInput, CustomerInfo, InvalidTransition, OrderCreate, OrderStatus, PaymentStatus,
    StatusUpdate,
};
