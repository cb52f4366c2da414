//! System State Model (Singleton)

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// System counters singleton (`system_state:counters`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemState {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// Order number sequence; incremented atomically per order
    pub order_seq: i64,
}
