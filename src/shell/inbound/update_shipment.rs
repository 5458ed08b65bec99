use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::application::command_handlers::update_shipment::UpdateShipment;
use crate::application::errors::ApplicationError;
use crate::core::shipment::{Shipment, ShipmentPatch, TimelineEntry};
use crate::core::status_catalog::ShipmentStatus;
use crate::shell::state::AppState;

/// Everything the admin update form may send. An unknown status value fails
/// deserialization and surfaces as 422.
#[derive(Deserialize)]
pub struct UpdateShipmentBody {
    #[serde(default)]
    pub status: Option<ShipmentStatus>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub patch: ShipmentPatch,
}

#[derive(Serialize)]
pub struct UpdateShipmentResponse {
    pub shipment: Shipment,
    pub timeline: Vec<TimelineEntry>,
    pub warnings: Vec<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(reference): Path<String>,
    body: Result<Json<UpdateShipmentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateShipment {
        status: body.status,
        location: body.location,
        notes: body.notes,
        patch: body.patch,
    };

    match state.update_shipment.handle(&reference, command).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(UpdateShipmentResponse {
                shipment: outcome.shipment,
                timeline: outcome.timeline,
                warnings: outcome.warnings,
            }),
        )
            .into_response(),
        Err(ApplicationError::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
