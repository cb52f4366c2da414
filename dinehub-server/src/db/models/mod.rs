//! Database Models

// Serde helpers
pub mod serde_helpers;

pub mod menu_item;
pub mod order;
pub mod system_state;

// Re-exports
pub use menu_item::MenuItem;
pub use order::{Order, OrderLineItem};
pub use system_state::SystemState;
