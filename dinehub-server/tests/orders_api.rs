//! Orders REST surface tests

mod common;

use axum::Router;
use axum::body::Body;
use common::{order_payload, test_state};
use dinehub_server::core::build_app;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router call");
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).expect("JSON body");
    (status, body)
}

fn post_order(payload: &shared::OrderCreate) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/orders")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

fn patch_status(id: &str, status: &str) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(format!("/api/orders/{}/status", id))
        .header("content-type", "application/json")
        .body(Body::from(json!({"status": status}).to_string()))
        .unwrap()
}

#[tokio::test]
async fn checkout_returns_the_wrapped_order() {
    let app = build_app().with_state(test_state().await);

    let (status, body) = send(&app, post_order(&order_payload("777"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Order placed successfully");
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["paymentStatus"], "pending");
    assert_eq!(body["data"]["orderNumber"], "ORD-1001");
    assert_eq!(body["data"]["customer"]["phone"], "777");
}

#[tokio::test]
async fn invalid_checkout_is_a_400_envelope() {
    let app = build_app().with_state(test_state().await);

    let mut payload = order_payload("777");
    payload.items.clear();

    let (status, body) = send(&app, post_order(&payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Cart must not be empty");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn staff_advance_status_over_patch_and_put() {
    let app = build_app().with_state(test_state().await);

    let (_, created) = send(&app, post_order(&order_payload("777"))).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, patch_status(&id, "preparing")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "preparing");

    // Older client variant uses PUT
    let put = Request::builder()
        .method("PUT")
        .uri(format!("/api/orders/{}/status", id))
        .header("content-type", "application/json")
        .body(Body::from(json!({"status": "ready"}).to_string()))
        .unwrap();
    let (status, body) = send(&app, put).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ready");
}

#[tokio::test]
async fn illegal_transition_is_a_422_envelope() {
    let app = build_app().with_state(test_state().await);

    let (_, created) = send(&app, post_order(&order_payload("777"))).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, patch_status(&id, "completed")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("pending -> completed")
    );
}

#[tokio::test]
async fn unknown_order_is_a_404_envelope() {
    let app = build_app().with_state(test_state().await);

    let (status, body) = send(&app, patch_status("orders:missing", "preparing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn list_supports_the_all_and_status_filters() {
    let app = build_app().with_state(test_state().await);

    let (_, a) = send(&app, post_order(&order_payload("111"))).await;
    send(&app, post_order(&order_payload("222"))).await;
    let id = a["data"]["id"].as_str().unwrap().to_string();
    send(&app, patch_status(&id, "preparing")).await;

    let (status, body) = send(
        &app,
        Request::builder()
            .uri("/api/orders?status=all")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = send(
        &app,
        Request::builder()
            .uri("/api/orders?status=preparing")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["orderNumber"], "ORD-1001");
}
