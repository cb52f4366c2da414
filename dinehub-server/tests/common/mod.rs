//! Shared test harness: a full ServerState on an in-memory database

use dinehub_server::db::define_schema;
use dinehub_server::{Config, ServerState};
use shared::{CartItemInput, CustomerInfo, OrderCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

/// Boot a ServerState backed by the in-memory engine, schema applied
pub async fn test_state() -> ServerState {
    let db = Surreal::new::<Mem>(()).await.expect("open in-memory db");
    db.use_ns("dinehub")
        .use_db("test")
        .await
        .expect("select namespace");
    define_schema(&db).await.expect("apply schema");

    ServerState::with_db(Config::with_overrides("/tmp/dinehub-test", 0), db)
}

/// A valid two-line order payload
pub fn order_payload(phone: &str) -> OrderCreate {
    OrderCreate {
        customer: CustomerInfo {
            name: "Ravi Kumar".into(),
            phone: phone.into(),
            email: Some("ravi@example.com".into()),
            table_number: Some("T2".into()),
        },
        items: vec![
            CartItemInput {
                menu_item: None,
                name: "Veg Biryani".into(),
                price: 11.0,
                quantity: 2,
            },
            CartItemInput {
                menu_item: None,
                name: "Lassi".into(),
                price: 3.5,
                quantity: 1,
            },
        ],
        subtotal: 25.5,
        tax: 1.28,
        total: 26.78,
        special_instructions: None,
    }
}
