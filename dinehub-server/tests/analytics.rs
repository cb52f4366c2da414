//! Analytics dashboard tests
//!
//! Seeds orders at controlled timestamps and checks the rollups are
//! recomputed from live data on every call.

mod common;

use axum::Router;
use axum::body::Body;
use common::{order_payload, test_state};
use dinehub_server::OrderManager;
use dinehub_server::core::build_app;
use dinehub_server::db::models::{Order, OrderLineItem};
use dinehub_server::db::repository::OrderRepository;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use shared::util::now_millis;
use shared::{CustomerInfo, OrderStatus, PaymentStatus};
use tower::ServiceExt;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

async fn fetch_dashboard(app: &Router) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/analytics/dashboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("router call");
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).expect("JSON body"))
}

/// Build an order directly in the store at a chosen timestamp
fn seeded_order(number: &str, phone: &str, total: f64, created_at: i64) -> Order {
    Order {
        id: None,
        order_number: number.into(),
        customer: CustomerInfo {
            name: "Seeded".into(),
            phone: phone.into(),
            email: None,
            table_number: None,
        },
        items: vec![OrderLineItem {
            menu_item: None,
            name: "Thali".into(),
            price: total,
            quantity: 1,
        }],
        subtotal: total,
        tax: 0.0,
        total,
        status: OrderStatus::Pending,
        special_instructions: None,
        payment_status: PaymentStatus::default(),
        created_at,
        updated_at: created_at,
    }
}

#[tokio::test]
async fn empty_store_reports_zeros() {
    let app = build_app().with_state(test_state().await);

    let (status, body) = fetch_dashboard(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let stats = &body["data"]["stats"];
    assert_eq!(stats["totalRevenue"], 0.0);
    assert_eq!(stats["totalOrders"], 0);
    assert_eq!(stats["totalCustomers"], 0);
    assert_eq!(stats["growthRate"], 0.0);
    assert!(body["data"]["salesData"].as_array().unwrap().is_empty());
    assert!(body["data"]["recentOrders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn totals_cover_all_orders_and_distinct_phones() {
    let state = test_state().await;
    let app = build_app().with_state(state.clone());
    let repo = OrderRepository::new(state.db.clone());
    let now = now_millis();

    // Two customers, three orders; one far outside the sales window
    repo.create(seeded_order("ORD-0001", "111", 10.0, now - 30 * DAY_MILLIS))
        .await
        .unwrap();
    repo.create(seeded_order("ORD-0002", "111", 20.0, now - DAY_MILLIS))
        .await
        .unwrap();
    repo.create(seeded_order("ORD-0003", "222", 5.5, now))
        .await
        .unwrap();

    let (_, body) = fetch_dashboard(&app).await;
    let stats = &body["data"]["stats"];
    assert_eq!(stats["totalRevenue"], 35.5);
    assert_eq!(stats["totalOrders"], 3);
    assert_eq!(stats["totalCustomers"], 2);

    // The 30-day-old order stays out of the 7-day sales window
    let sales: f64 = body["data"]["salesData"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["sales"].as_f64().unwrap())
        .sum();
    assert_eq!(sales, 25.5);
}

#[tokio::test]
async fn sales_window_buckets_by_day() {
    let state = test_state().await;
    let app = build_app().with_state(state.clone());
    let repo = OrderRepository::new(state.db.clone());
    let now = now_millis();

    // Two orders yesterday, one today
    repo.create(seeded_order("ORD-0001", "111", 10.0, now - DAY_MILLIS))
        .await
        .unwrap();
    repo.create(seeded_order("ORD-0002", "222", 15.0, now - DAY_MILLIS + 1_000))
        .await
        .unwrap();
    repo.create(seeded_order("ORD-0003", "333", 7.0, now))
        .await
        .unwrap();

    let (_, body) = fetch_dashboard(&app).await;
    let points = body["data"]["salesData"].as_array().unwrap().clone();
    assert_eq!(points.len(), 2);
    // Ascending by day: yesterday first
    assert_eq!(points[0]["sales"], 25.0);
    assert_eq!(points[0]["orders"], 2);
    assert_eq!(points[1]["sales"], 7.0);
    assert_eq!(points[1]["orders"], 1);
}

#[tokio::test]
async fn growth_rate_compares_the_two_windows() {
    let state = test_state().await;
    let app = build_app().with_state(state.clone());
    let repo = OrderRepository::new(state.db.clone());
    let now = now_millis();

    // Prior window: 100.0; current window: 123.5
    repo.create(seeded_order("ORD-0001", "111", 100.0, now - 10 * DAY_MILLIS))
        .await
        .unwrap();
    repo.create(seeded_order("ORD-0002", "222", 123.5, now - DAY_MILLIS))
        .await
        .unwrap();

    let (_, body) = fetch_dashboard(&app).await;
    assert_eq!(body["data"]["stats"]["growthRate"], 23.5);
}

#[tokio::test]
async fn recent_orders_cap_at_ten() {
    let state = test_state().await;
    let app = build_app().with_state(state.clone());
    let repo = OrderRepository::new(state.db.clone());
    let now = now_millis();

    for i in 0..12i64 {
        repo.create(seeded_order(
            &format!("ORD-{:04}", i),
            &format!("{}", i),
            5.0,
            now - i * 60_000,
        ))
        .await
        .unwrap();
    }

    let (_, body) = fetch_dashboard(&app).await;
    let recent = body["data"]["recentOrders"].as_array().unwrap();
    assert_eq!(recent.len(), 10);
    // Newest first
    assert_eq!(recent[0]["orderNumber"], "ORD-0000");
}

#[tokio::test]
async fn revenue_is_recomputed_on_every_call() {
    let state = test_state().await;
    let app = build_app().with_state(state.clone());
    let manager = OrderManager::new(state.db.clone());

    manager.create_order(order_payload("111")).await.unwrap();
    let (_, before) = fetch_dashboard(&app).await;
    assert_eq!(before["data"]["stats"]["totalOrders"], 1);

    manager.create_order(order_payload("222")).await.unwrap();
    let (_, after) = fetch_dashboard(&app).await;
    assert_eq!(after["data"]["stats"]["totalOrders"], 2);

    let before_rev = before["data"]["stats"]["totalRevenue"].as_f64().unwrap();
    let after_rev = after["data"]["stats"]["totalRevenue"].as_f64().unwrap();
    assert!((after_rev - before_rev - 26.78).abs() < 0.005);
}
