//! Repository Module
//!
//! CRUD operations over the embedded SurrealDB tables.

pub mod analytics;
pub mod menu_item;
pub mod order;
pub mod system_state;

// Re-exports
pub use analytics::AnalyticsRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use system_state::SystemStateRepository;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // Unique index violations read "index `...` already contains ..."
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================

/// Parse an API-supplied id into a RecordId for `table`.
///
/// Accepts both the full "table:key" form and a bare key; a prefix for a
/// different table is rejected as not-found rather than silently rebound.
pub fn parse_record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    match id.split_once(':') {
        Some((prefix, key)) if prefix == table && !key.is_empty() => id
            .parse::<RecordId>()
            .map_err(|_| RepoError::NotFound(format!("Invalid id format: {}", id))),
        Some(_) => Err(RepoError::NotFound(format!("Invalid id format: {}", id))),
        None if !id.is_empty() => Ok(RecordId::from_table_key(table, id)),
        None => Err(RepoError::NotFound("Empty id".to_string())),
    }
}
