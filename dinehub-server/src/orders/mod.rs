//! Order Lifecycle Management
//!
//! Owns order creation (validation + sequential number assignment) and
//! the status state machine. All order writes go through [`OrderManager`];
//! the repositories never change a status on their own.

mod manager;

pub use manager::OrderManager;
