// Shipment creation: validate, persist, and seed the first timeline entry.
//
// Responsibilities
// - Reject incomplete payloads before anything is persisted.
// - Start every shipment at the first catalog status.
// - Seed the "Processing" timeline entry with catalog defaults; seeding is
//   best-effort under the same non-fatal timeline policy as the reconciler.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::application::errors::ApplicationError;
use crate::core::ports::{ShipmentStore, TimelineStore};
use crate::core::shipment::{NewShipment, Shipment};
use crate::core::status_catalog::{ShipmentStatus, default_location_and_notes};

pub struct CreateShipmentHandler<S, T>
where
    S: ShipmentStore + Send + Sync + 'static,
    T: TimelineStore + Send + Sync + 'static,
{
    shipments: Arc<S>,
    timeline: Arc<T>,
}

impl<S, T> CreateShipmentHandler<S, T>
where
    S: ShipmentStore + Send + Sync + 'static,
    T: TimelineStore + Send + Sync + 'static,
{
    pub fn new(shipments: Arc<S>, timeline: Arc<T>) -> Self {
        Self { shipments, timeline }
    }

    pub async fn handle(&self, payload: NewShipment) -> Result<Shipment, ApplicationError> {
        payload
            .validate()
            .map_err(|errors| ApplicationError::Validation(errors.join(", ")))?;

        let shipment = payload.into_shipment(Uuid::now_v7(), Utc::now());
        let shipment = self.shipments.insert(shipment).await?;

        let (location, notes) = default_location_and_notes(ShipmentStatus::Processing, &shipment);
        if let Err(err) = self
            .timeline
            .insert(
                shipment.id,
                ShipmentStatus::Processing,
                Some(location),
                Some(notes),
            )
            .await
        {
            tracing::warn!(
                shipment_id = %shipment.id,
                "seeding the initial timeline entry failed: {err}"
            );
        }

        Ok(shipment)
    }
}
