//! RocksDB-backed storage tests
//!
//! The other suites run on the in-memory engine; this one opens a real
//! on-disk database and checks schema application is idempotent.

use dinehub_server::db::{DbService, define_schema};
use dinehub_server::db::repository::{MenuItemRepository, SystemStateRepository};
use shared::MenuCategory;
use shared::models::menu_item::MenuItemCreate;

fn item_payload() -> MenuItemCreate {
    MenuItemCreate {
        name: "Masala Chai".into(),
        description: "Spiced tea".into(),
        price: 2.5,
        category: MenuCategory::Beverage,
        image: None,
        is_veg: None,
        is_available: None,
        prep_time: Some(5),
    }
}

#[tokio::test]
async fn rocksdb_store_survives_schema_reapplication() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("dinehub.db");

    let service = DbService::new(&db_path).await.expect("open database");

    let menu = MenuItemRepository::new(service.db.clone());
    let counters = SystemStateRepository::new(service.db.clone());

    let created = menu.create(item_payload()).await.unwrap();
    assert_eq!(counters.next_order_seq().await.unwrap(), 1001);
    assert_eq!(counters.next_order_seq().await.unwrap(), 1002);

    // Startup schema definition must be safe to run again: no reseeded
    // counter, no lost rows
    define_schema(&service.db).await.expect("reapply schema");

    assert_eq!(counters.next_order_seq().await.unwrap(), 1003);
    let items = menu.find_filtered(None, None).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, created.id);
}
