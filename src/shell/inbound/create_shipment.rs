use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::application::errors::ApplicationError;
use crate::core::shipment::{NewShipment, Shipment};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<NewShipment>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.create_shipment.handle(payload).await {
        Ok(shipment) => (StatusCode::CREATED, Json::<Shipment>(shipment)).into_response(),
        Err(ApplicationError::Validation(message)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: message }),
        )
            .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod create_shipment_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::adapters::in_memory::in_memory_store::InMemoryStore;
    use crate::shell::state::AppState;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/shipments", post(handle))
            .with_state(state)
    }

    fn valid_body() -> String {
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
            "package_type": "Box",
            "weight_kg": 2.5
        })
        .to_string()
    }

    #[tokio::test]
    async fn it_should_return_201_with_the_created_shipment() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::post("/shipments")
                    .header("content-type", "application/json")
                    .body(Body::from(valid_body()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "Processing");
        assert!(
            json["tracking_code"]
                .as_str()
                .unwrap()
                .starts_with("SW")
        );
    }

    #[tokio::test]
    async fn it_should_return_400_with_the_validation_message() {
        let body = serde_json::json!({
            "sender_name": "",
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
        })
        .to_string();

        let response = app(AppState::in_memory())
            .oneshot(
                Request::post("/shipments")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Sender name is required");
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::post("/shipments")
                    .header("content-type", "application/json")
                    .body(Body::from("not-json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_shipment_store_is_offline() {
        let store = Arc::new(InMemoryStore::new());
        store.set_shipments_offline(true);

        let response = app(AppState::with_store(store))
            .oneshot(
                Request::post("/shipments")
                    .header("content-type", "application/json")
                    .body(Body::from(valid_body()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
