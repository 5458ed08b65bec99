use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::core::shipment::Shipment;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list().await {
        Ok(shipments) => (StatusCode::OK, Json::<Vec<Shipment>>(shipments)).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
