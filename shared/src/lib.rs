//! DineHub Shared - 餐厅点餐平台共享类型
//!
//! Domain types shared between the server and any client:
//!
//! - **模型** (`models`): menu categories, order status state machine, DTOs
//! - **响应** (`response`): unified `{success, data, message}` API envelope
//! - **工具** (`util`): millisecond timestamps and day bucketing

pub mod models;
pub mod response;
pub mod util;

// Re-export 公共类型
pub use models::{
    CartItemInput, CustomerInfo, InvalidTransition, MenuCategory, MenuItemCreate, MenuItemUpdate,
    OrderCreate, OrderStatus, PaymentStatus, StatusUpdate,
};
pub use response::ApiResponse;
