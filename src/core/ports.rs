// Ports define what the core needs from the outside world, without
// implementing it.
//
// Responsibilities
// - Describe the shipment and timeline stores as traits.
// - Keep the core independent of any concrete database by coding against
//   traits; adapters implement them in the adapters layer.
//
// Testing guidance
// - Use the in-memory implementations for tests and local development.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::core::shipment::{Shipment, ShipmentPatch, TimelineEntry};
use crate::core::status_catalog::ShipmentStatus;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ShipmentStore: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Shipment, StoreError>;

    async fn get_by_tracking_code(&self, code: &str) -> Result<Shipment, StoreError>;

    /// Lookup by either identifier: the internal id is tried first, the
    /// tracking code is the fallback.
    async fn resolve(&self, reference: &str) -> Result<Shipment, StoreError> {
        if let Ok(id) = Uuid::parse_str(reference) {
            match self.get(id).await {
                Ok(shipment) => return Ok(shipment),
                Err(StoreError::NotFound) => {}
                Err(other) => return Err(other),
            }
        }
        self.get_by_tracking_code(reference).await
    }

    async fn insert(&self, shipment: Shipment) -> Result<Shipment, StoreError>;

    /// Persist the patch and, when provided, the new status in one write.
    /// The store bumps `updated_at`.
    async fn update(
        &self,
        id: Uuid,
        status: Option<ShipmentStatus>,
        patch: &ShipmentPatch,
    ) -> Result<(), StoreError>;

    /// Deleting a shipment cascades to its timeline; that cascade is the
    /// store's responsibility, not the caller's.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// All shipments, newest `created_at` first.
    async fn list(&self) -> Result<Vec<Shipment>, StoreError>;
}

#[async_trait]
pub trait TimelineStore: Send + Sync {
    /// Timeline for one shipment, newest `created_at` first.
    async fn list_for_shipment(
        &self,
        shipment_id: Uuid,
    ) -> Result<Vec<TimelineEntry>, StoreError>;

    /// Earliest entry recorded for (shipment, status); oldest wins if
    /// duplicates somehow exist.
    async fn find_by_status(
        &self,
        shipment_id: Uuid,
        status: ShipmentStatus,
    ) -> Result<Option<TimelineEntry>, StoreError>;

    /// Append a new entry; the store assigns the id and timestamp and is the
    /// authoritative guard for the one-entry-per-(shipment, status) rule.
    async fn insert(
        &self,
        shipment_id: Uuid,
        status: ShipmentStatus,
        location: Option<String>,
        notes: Option<String>,
    ) -> Result<TimelineEntry, StoreError>;

    /// Amend an existing entry in place. Only provided fields are written;
    /// `created_at` is never touched.
    async fn update_fields(
        &self,
        entry_id: Uuid,
        location: Option<String>,
        notes: Option<String>,
    ) -> Result<(), StoreError>;
}
