// Read-side handlers: shipment details for the admin surface, the full list,
// and the public tracking view.
//
// Failure semantics
// - The shipment read is authoritative. A timeline read failure degrades the
//   view to an empty history with a warning, same policy as the write side.

use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::core::ports::{ShipmentStore, StoreError, TimelineStore};
use crate::core::shipment::{Shipment, TimelineEntry};
use crate::core::status_catalog::Progress;

#[derive(Debug, Clone)]
pub struct ShipmentDetails {
    pub shipment: Shipment,
    /// Newest first.
    pub timeline: Vec<TimelineEntry>,
    pub warnings: Vec<String>,
}

/// What the public tracking page shows for one tracking code.
#[derive(Debug, Clone)]
pub struct TrackingView {
    pub shipment: Shipment,
    pub timeline: Vec<TimelineEntry>,
    pub progress: Progress,
    pub warnings: Vec<String>,
}

pub struct ShipmentQueries<S, T>
where
    S: ShipmentStore + Send + Sync + 'static,
    T: TimelineStore + Send + Sync + 'static,
{
    shipments: Arc<S>,
    timeline: Arc<T>,
}

impl<S, T> ShipmentQueries<S, T>
where
    S: ShipmentStore + Send + Sync + 'static,
    T: TimelineStore + Send + Sync + 'static,
{
    pub fn new(shipments: Arc<S>, timeline: Arc<T>) -> Self {
        Self { shipments, timeline }
    }

    /// Details by id or tracking code.
    pub async fn details(&self, reference: &str) -> Result<ShipmentDetails, ApplicationError> {
        let shipment = match self.shipments.resolve(reference).await {
            Ok(shipment) => shipment,
            Err(StoreError::NotFound) => return Err(ApplicationError::NotFound),
            Err(other) => return Err(other.into()),
        };
        let (timeline, warnings) = self.timeline_or_empty(&shipment).await;
        Ok(ShipmentDetails {
            shipment,
            timeline,
            warnings,
        })
    }

    /// All shipments, newest first.
    pub async fn list(&self) -> Result<Vec<Shipment>, ApplicationError> {
        Ok(self.shipments.list().await?)
    }

    /// Public tracking view; lookup by tracking code only, the internal id is
    /// never accepted here.
    pub async fn track(&self, tracking_code: &str) -> Result<TrackingView, ApplicationError> {
        let shipment = match self.shipments.get_by_tracking_code(tracking_code).await {
            Ok(shipment) => shipment,
            Err(StoreError::NotFound) => return Err(ApplicationError::NotFound),
            Err(other) => return Err(other.into()),
        };
        let (timeline, warnings) = self.timeline_or_empty(&shipment).await;
        let progress = shipment.status.progress();
        Ok(TrackingView {
            shipment,
            timeline,
            progress,
            warnings,
        })
    }

    async fn timeline_or_empty(&self, shipment: &Shipment) -> (Vec<TimelineEntry>, Vec<String>) {
        match self.timeline.list_for_shipment(shipment.id).await {
            Ok(entries) => (entries, Vec::new()),
            Err(err) => {
                let message = format!("timeline read failed: {err}");
                tracing::warn!(shipment_id = %shipment.id, "{message}");
                (Vec::new(), vec![message])
            }
        }
    }
}
