use anyhow::Result;
use httpmock::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use swifthaul_client::domain::model::SessionUser;
use swifthaul_client::{ApiClient, ClientError, OrderDraft, OrdersApi, SessionStore};

fn test_user() -> SessionUser {
    SessionUser {
        id: 1,
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        role: "customer".to_string(),
    }
}

fn valid_draft() -> OrderDraft {
    OrderDraft {
        pickup_lat: Some("28.6139".to_string()),
        pickup_lng: Some("77.2090".to_string()),
        drop_lat: Some("28.7041".to_string()),
        drop_lng: Some("77.1025".to_string()),
        pickup_address: Some("Connaught Place, New Delhi".to_string()),
        drop_address: Some("Pitampura, New Delhi".to_string()),
        material_type: Some("electronics".to_string()),
        weight_kg: Some("12.5".to_string()),
        material_description: None,
    }
}

fn orders_api(server: &MockServer) -> (SessionStore, OrdersApi) {
    let session = SessionStore::new();
    let client = ApiClient::new(&server.base_url(), session.clone()).unwrap();
    (session, OrdersApi::new(client))
}

#[tokio::test]
async fn test_create_order_success() -> Result<()> {
    let server = MockServer::start();
    let order_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/customer/orders")
            .header("authorization", "Bearer token-abc")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "pickup_lat": 28.6139,
                "pickup_lng": 77.2090,
                "drop_lat": 28.7041,
                "drop_lng": 77.1025,
                "pickup_address": "Connaught Place, New Delhi",
                "drop_address": "Pitampura, New Delhi",
                "material_type": "electronics",
                "weight_kg": 12.5
            }));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "order_id": 7,
                "fare_total": 120.5,
                "distance_km": 9.6
            }));
    });

    let (session, orders) = orders_api(&server);
    session.set_token("token-abc".to_string());

    let confirmation = orders.create_order(&valid_draft()).await?;

    order_mock.assert();
    assert_eq!(confirmation.order_id, 7);
    assert_eq!(confirmation.fare_total, 120.5);
    assert_eq!(confirmation.distance_km, Some(9.6));
    assert!(confirmation.extra.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_create_order_keeps_uncontracted_response_fields() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/customer/orders");
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "order_id": 12,
                "fare_total": 95.0,
                "status": "pending"
            }));
    });

    let (session, orders) = orders_api(&server);
    session.set_token("token-abc".to_string());

    let confirmation = orders.create_order(&valid_draft()).await?;

    assert_eq!(confirmation.order_id, 12);
    assert_eq!(confirmation.distance_km, None);
    assert_eq!(
        confirmation.extra.get("status"),
        Some(&serde_json::json!("pending"))
    );

    Ok(())
}

#[tokio::test]
async fn test_create_order_without_credential_makes_no_request() {
    let server = MockServer::start();
    let order_mock = server.mock(|when, then| {
        when.method(POST).path("/api/customer/orders");
        then.status(201)
            .json_body(serde_json::json!({"order_id": 1, "fare_total": 1.0}));
    });

    let (_session, orders) = orders_api(&server);

    let err = orders.create_order(&valid_draft()).await.unwrap_err();
    assert!(matches!(err, ClientError::AuthenticationRequired));
    assert_eq!(
        err.to_string(),
        "Authentication token not found. Please login first."
    );
    assert_eq!(order_mock.hits(), 0);
}

#[tokio::test]
async fn test_validation_failure_makes_no_request() {
    let server = MockServer::start();
    let order_mock = server.mock(|when, then| {
        when.method(POST).path("/api/customer/orders");
        then.status(201)
            .json_body(serde_json::json!({"order_id": 1, "fare_total": 1.0}));
    });

    let (session, orders) = orders_api(&server);
    session.set_token("token-abc".to_string());

    let mut draft = valid_draft();
    draft.pickup_lat = Some("91".to_string());

    let err = orders.create_order(&draft).await.unwrap_err();
    match err {
        ClientError::OutOfRange { field, .. } => assert_eq!(field, "pickup_lat"),
        other => panic!("expected OutOfRange, got {:?}", other),
    }
    assert_eq!(order_mock.hits(), 0);
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_fires_hook() {
    let server = MockServer::start();
    let order_mock = server.mock(|when, then| {
        when.method(POST).path("/api/customer/orders");
        then.status(401)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "Token has expired"}));
    });

    let session = SessionStore::new();
    let hook_fired = Arc::new(AtomicBool::new(false));
    let flag = hook_fired.clone();
    let client = ApiClient::new(&server.base_url(), session.clone())
        .unwrap()
        .on_unauthorized(move || flag.store(true, Ordering::SeqCst));
    let orders = OrdersApi::new(client);

    session.store("stale-token".to_string(), test_user());

    let err = orders.create_order(&valid_draft()).await.unwrap_err();

    order_mock.assert();
    assert!(matches!(err, ClientError::SessionExpired));
    assert_eq!(err.to_string(), "Session expired. Please login again.");
    assert!(session.token().is_none());
    assert!(session.user().is_none());
    assert!(hook_fired.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_server_error_message_is_extracted() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/customer/orders");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "Invalid coordinates"}));
    });

    let (session, orders) = orders_api(&server);
    session.set_token("token-abc".to_string());

    let err = orders.create_order(&valid_draft()).await.unwrap_err();
    match &err {
        ClientError::Http { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "Invalid coordinates");
        }
        other => panic!("expected Http, got {:?}", other),
    }
    assert_eq!(err.to_string(), "HTTP 400: Invalid coordinates");
}

#[tokio::test]
async fn test_server_error_plain_text_body_passes_through() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/customer/orders");
        then.status(500).body("database exploded");
    });

    let (session, orders) = orders_api(&server);
    session.set_token("token-abc".to_string());

    let err = orders.create_order(&valid_draft()).await.unwrap_err();
    match err {
        ClientError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database exploded");
        }
        other => panic!("expected Http, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_empty_body_uses_status_reason() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/customer/orders");
        then.status(503);
    });

    let (session, orders) = orders_api(&server);
    session.set_token("token-abc".to_string());

    let err = orders.create_order(&valid_draft()).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
}

#[tokio::test]
async fn test_create_order_from_form() -> Result<()> {
    let server = MockServer::start();
    let order_mock = server.mock(|when, then| {
        when.method(POST).path("/api/customer/orders");
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"order_id": 3, "fare_total": 54.2}));
    });

    let (session, orders) = orders_api(&server);
    session.set_token("token-abc".to_string());

    let mut form = HashMap::new();
    form.insert("pickup_lat".to_string(), "12.9716".to_string());
    form.insert("pickup_lng".to_string(), "77.5946".to_string());
    form.insert("drop_lat".to_string(), "12.2958".to_string());
    form.insert("drop_lng".to_string(), "76.6394".to_string());
    form.insert("pickup_address".to_string(), "Bengaluru".to_string());
    form.insert("drop_address".to_string(), "Mysuru".to_string());
    form.insert("material_type".to_string(), "textiles".to_string());
    form.insert("weight_kg".to_string(), "40".to_string());

    let confirmation = orders.create_order_from_form(&form).await?;

    order_mock.assert();
    assert_eq!(confirmation.order_id, 3);

    Ok(())
}

#[tokio::test]
async fn test_create_order_from_form_reports_absent_fields() {
    let server = MockServer::start();

    let (session, orders) = orders_api(&server);
    session.set_token("token-abc".to_string());

    let mut form = HashMap::new();
    form.insert("pickup_lat".to_string(), "12.9716".to_string());
    form.insert("pickup_lng".to_string(), "77.5946".to_string());
    form.insert("drop_lat".to_string(), "12.2958".to_string());
    form.insert("drop_lng".to_string(), "76.6394".to_string());
    form.insert("pickup_address".to_string(), "Bengaluru".to_string());
    form.insert("weight_kg".to_string(), "40".to_string());

    let err = orders.create_order_from_form(&form).await.unwrap_err();
    match err {
        ClientError::MissingFields(names) => {
            assert_eq!(names, vec!["drop_address", "material_type"]);
        }
        other => panic!("expected MissingFields, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_orders() -> Result<()> {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/customer/orders")
            .header("authorization", "Bearer token-abc");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {
                    "id": 7,
                    "status": "pending",
                    "fare_total": 120.5,
                    "driver_id": null,
                    "distance_km": 9.6,
                    "created_at": "2026-08-01T09:15:00"
                },
                {
                    "id": 8,
                    "status": "assigned",
                    "fare_total": 80.0,
                    "driver_id": 3,
                    "distance_km": 4.2,
                    "created_at": "2026-08-02T17:40:12"
                }
            ]));
    });

    let (session, orders) = orders_api(&server);
    session.set_token("token-abc".to_string());

    let listing = orders.list_orders().await?;

    list_mock.assert();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].id, 7);
    assert_eq!(listing[0].driver_id, None);
    assert_eq!(listing[1].status, "assigned");
    assert_eq!(
        listing[0].created_at,
        chrono::NaiveDate::from_ymd_opt(2026, 8, 1)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap()
    );

    Ok(())
}

#[tokio::test]
async fn test_track_order() -> Result<()> {
    let server = MockServer::start();
    let track_mock = server.mock(|when, then| {
        when.method(GET).path("/api/customer/orders/7/track");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "status": "in_transit",
                "driver": {"id": 3, "lat": 28.65, "lng": 77.18}
            }));
    });

    let (session, orders) = orders_api(&server);
    session.set_token("token-abc".to_string());

    let tracking = orders.track_order(7).await?;

    track_mock.assert();
    assert_eq!(tracking.status, "in_transit");
    let driver = tracking.driver.unwrap();
    assert_eq!(driver.id, 3);
    assert_eq!(driver.lat, Some(28.65));

    Ok(())
}

#[tokio::test]
async fn test_track_order_without_assigned_driver() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/customer/orders/9/track");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"status": "pending", "driver": null}));
    });

    let (session, orders) = orders_api(&server);
    session.set_token("token-abc".to_string());

    let tracking = orders.track_order(9).await?;
    assert_eq!(tracking.status, "pending");
    assert!(tracking.driver.is_none());

    Ok(())
}
