//! System State Repository (Singleton Counters)

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::SystemState;

const SYSTEM_STATE_TABLE: &str = "system_state";
const COUNTERS_ID: &str = "counters";

/// Sequence seed; the first issued order number is ORD-1001
const ORDER_SEQ_SEED: i64 = 1000;

/// Create the counters singleton if it does not exist yet.
///
/// Called once during schema definition, before any request runs, so the
/// select-then-create here is not racy.
pub async fn ensure_counters(db: &Surreal<Db>) -> Result<(), surrealdb::Error> {
    let existing: Option<SystemState> = db.select((SYSTEM_STATE_TABLE, COUNTERS_ID)).await?;
    if existing.is_none() {
        let _: Option<SystemState> = db
            .create((SYSTEM_STATE_TABLE, COUNTERS_ID))
            .content(SystemState {
                id: None,
                order_seq: ORDER_SEQ_SEED,
            })
            .await?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct SystemStateRepository {
    base: BaseRepository,
}

impl SystemStateRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Atomically reserve the next order sequence value.
    ///
    /// A single UPDATE statement; concurrent callers each observe a
    /// distinct value. This replaces the racy count-then-format scheme.
    pub async fn next_order_seq(&self) -> RepoResult<i64> {
        let updated: Vec<SystemState> = self
            .base
            .db()
            .query("UPDATE system_state:counters SET order_seq += 1 RETURN AFTER")
            .await?
            .take(0)?;

        updated
            .into_iter()
            .next()
            .map(|s| s.order_seq)
            .ok_or_else(|| RepoError::Database("Counters record missing".to_string()))
    }
}
