use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::adapters::in_memory::in_memory_store::InMemoryStore;
use crate::core::ports::TimelineStore;
use crate::core::status_catalog::ShipmentStatus;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn a_shipment_travels_forward_rolls_back_and_stays_consistent() {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::with_store(store.clone());

    // Create.
    let response = router(state.clone())
        .oneshot(json_request(
            "POST",
            "/shipments",
            serde_json::json!({
                "sender_name": "Kenji Watanabe",
                "sender_phone": "+81 6 1234 5678",
                "sender_street": "2-4-1 Umeda",
                "sender_city": "Osaka",
                "sender_country": "Japan",
                "receiver_name": "Sarah Mitchell",
                "receiver_phone": "+1 617 555 0142",
                "receiver_street": "5 Elm St",
                "receiver_city": "Boston",
                "receiver_country": "USA",
                "package_type": "Box"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    let tracking_code = created["tracking_code"].as_str().unwrap().to_string();
    let id = uuid::Uuid::parse_str(created["id"].as_str().unwrap()).unwrap();

    // Walk forward, revisit two statuses, and roll all the way back.
    let journey = [
        "Picked Up",
        "In Transit",
        "Picked Up",
        "At Destination",
        "Delivered",
        "Processing",
    ];
    for status in journey {
        let response = router(state.clone())
            .oneshot(json_request(
                "PATCH",
                &format!("/shipments/{tracking_code}"),
                serde_json::json!({ "status": status }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "patch to {status}");
    }

    // Every status was visited once or twice but each holds a single entry.
    let entries = store.list_for_shipment(id).await.unwrap();
    assert_eq!(entries.len(), 5);
    for status in ShipmentStatus::ALL {
        assert_eq!(
            entries.iter().filter(|entry| entry.status == status).count(),
            1,
            "one entry for {status}"
        );
    }

    // The public tracking page reflects the rollback.
    let response = router(state.clone())
        .oneshot(
            Request::get(format!("/track/{tracking_code}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let view = json_body(response).await;
    assert_eq!(view["shipment"]["status"], "Processing");
    assert_eq!(view["progress"]["completed_steps"], 1);
    assert_eq!(view["progress"]["percentage"], 20);
    assert_eq!(view["timeline"].as_array().unwrap().len(), 5);

    // Delete cascades; tracking stops resolving.
    let response = router(state.clone())
        .oneshot(
            Request::delete(format!("/shipments/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(store.list_for_shipment(id).await.unwrap().is_empty());

    let response = router(state)
        .oneshot(
            Request::get(format!("/track/{tracking_code}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
