use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::application::errors::ApplicationError;
use crate::core::shipment::{Shipment, TimelineEntry};
use crate::core::status_catalog::Progress;
use crate::shell::state::AppState;

/// Public tracking view. This surface is served cross-origin to the tracking
/// page and never exposes the internal id as a lookup key.
#[derive(Serialize)]
pub struct TrackShipmentResponse {
    pub shipment: Shipment,
    pub timeline: Vec<TimelineEntry>,
    pub progress: Progress,
    pub warnings: Vec<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> impl IntoResponse {
    match state.queries.track(&tracking_code).await {
        Ok(view) => (
            StatusCode::OK,
            Json(TrackShipmentResponse {
                shipment: view.shipment,
                timeline: view.timeline,
                progress: view.progress,
                warnings: view.warnings,
            }),
        )
            .into_response(),
        Err(ApplicationError::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
