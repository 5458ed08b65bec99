use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::application::errors::ApplicationError;
use crate::core::shipment::{Shipment, TimelineEntry};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ShipmentDetailsResponse {
    pub shipment: Shipment,
    pub timeline: Vec<TimelineEntry>,
    pub warnings: Vec<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> impl IntoResponse {
    match state.queries.details(&reference).await {
        Ok(details) => (
            StatusCode::OK,
            Json(ShipmentDetailsResponse {
                shipment: details.shipment,
                timeline: details.timeline,
                warnings: details.warnings,
            }),
        )
            .into_response(),
        Err(ApplicationError::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod get_shipment_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::adapters::in_memory::in_memory_store::InMemoryStore;
    use crate::core::ports::{ShipmentStore, TimelineStore};
    use crate::core::status_catalog::ShipmentStatus;
    use crate::shell::state::AppState;
    use crate::test_support::fixtures::NewShipmentBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/shipments/{reference}", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_shipment_and_timeline() {
        let store = Arc::new(InMemoryStore::new());
        let shipment = ShipmentStore::insert(
            store.as_ref(),
            NewShipmentBuilder::new().build_shipment(),
        )
        .await
        .unwrap();
        TimelineStore::insert(
            store.as_ref(),
            shipment.id,
            ShipmentStatus::Processing,
            Some("Osaka Sorting Center".into()),
            None,
        )
        .await
        .unwrap();

        let response = app(AppState::with_store(store))
            .oneshot(
                Request::get(format!("/shipments/{}", shipment.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["shipment"]["id"], shipment.id.to_string());
        assert_eq!(json["timeline"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_reference() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::get("/shipments/SWMISSING01")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
