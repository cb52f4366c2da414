//! Database Module
//!
//! Embedded SurrealDB storage: connection, schema and index definitions.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "dinehub";
const DATABASE: &str = "main";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the RocksDB-backed database and apply the schema
    pub async fn new(db_path: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

        define_schema(&db)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply schema: {}", e)))?;

        tracing::info!(path = %db_path.display(), "Database ready (SurrealDB RocksDB)");

        Ok(Self { db })
    }
}

/// Define tables, indexes and seed the counter singleton.
///
/// Idempotent; runs on every startup. The UNIQUE index on
/// `order.orderNumber` is the storage-level guarantee behind
/// order-number uniqueness (creation retries on violation).
pub async fn define_schema(db: &Surreal<Db>) -> Result<(), surrealdb::Error> {
    db.query(
        r#"
        DEFINE TABLE IF NOT EXISTS menu_item SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS orders SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS system_state SCHEMALESS;

        DEFINE INDEX IF NOT EXISTS menu_item_category ON menu_item FIELDS category;
        DEFINE INDEX IF NOT EXISTS order_number_unique ON orders FIELDS orderNumber UNIQUE;
        DEFINE INDEX IF NOT EXISTS order_created_at ON orders FIELDS createdAt;
        "#,
    )
    .await?
    .check()?;

    repository::system_state::ensure_counters(db).await?;

    Ok(())
}
