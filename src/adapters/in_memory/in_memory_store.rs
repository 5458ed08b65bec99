// In-memory implementation of the ShipmentStore and TimelineStore ports.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep shipments and timeline rows in one shared map so deleting a
//   shipment cascades to its timeline, like the relational schema does.
// - Enforce the unique (shipment, status) timeline constraint.
// - Simulate backend outages per port for failure-path tests.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::ports::{ShipmentStore, StoreError, TimelineStore};
use crate::core::shipment::{Shipment, ShipmentPatch, TimelineEntry};
use crate::core::status_catalog::ShipmentStatus;

#[derive(Default)]
struct Inner {
    shipments: HashMap<Uuid, Shipment>,
    timeline: Vec<TimelineEntry>,
}

#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
    shipments_offline: AtomicBool,
    timeline_offline: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_shipments_offline(&self, offline: bool) {
        self.shipments_offline.store(offline, Ordering::SeqCst);
    }

    pub fn set_timeline_offline(&self, offline: bool) {
        self.timeline_offline.store(offline, Ordering::SeqCst);
    }

    fn check_shipments_online(&self) -> Result<(), StoreError> {
        if self.shipments_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("shipment store offline".into()));
        }
        Ok(())
    }

    fn check_timeline_online(&self) -> Result<(), StoreError> {
        if self.timeline_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("timeline store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ShipmentStore for InMemoryStore {
    async fn get(&self, id: Uuid) -> Result<Shipment, StoreError> {
        self.check_shipments_online()?;
        let guard = self.inner.read().await;
        guard.shipments.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn get_by_tracking_code(&self, code: &str) -> Result<Shipment, StoreError> {
        self.check_shipments_online()?;
        let guard = self.inner.read().await;
        guard
            .shipments
            .values()
            .find(|shipment| shipment.tracking_code == code)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, shipment: Shipment) -> Result<Shipment, StoreError> {
        self.check_shipments_online()?;
        let mut guard = self.inner.write().await;
        if guard.shipments.contains_key(&shipment.id) {
            return Err(StoreError::Conflict(format!(
                "shipment {} already exists",
                shipment.id
            )));
        }
        guard.shipments.insert(shipment.id, shipment.clone());
        Ok(shipment)
    }

    async fn update(
        &self,
        id: Uuid,
        status: Option<ShipmentStatus>,
        patch: &ShipmentPatch,
    ) -> Result<(), StoreError> {
        self.check_shipments_online()?;
        let mut guard = self.inner.write().await;
        let shipment = guard.shipments.get_mut(&id).ok_or(StoreError::NotFound)?;
        patch.apply_to(shipment);
        if let Some(status) = status {
            shipment.status = status;
        }
        shipment.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.check_shipments_online()?;
        let mut guard = self.inner.write().await;
        guard.shipments.remove(&id).ok_or(StoreError::NotFound)?;
        guard.timeline.retain(|entry| entry.shipment_id != id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Shipment>, StoreError> {
        self.check_shipments_online()?;
        let guard = self.inner.read().await;
        let mut shipments: Vec<Shipment> = guard.shipments.values().cloned().collect();
        shipments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(shipments)
    }
}

#[async_trait::async_trait]
impl TimelineStore for InMemoryStore {
    async fn list_for_shipment(
        &self,
        shipment_id: Uuid,
    ) -> Result<Vec<TimelineEntry>, StoreError> {
        self.check_timeline_online()?;
        let guard = self.inner.read().await;
        let mut entries: Vec<TimelineEntry> = guard
            .timeline
            .iter()
            .filter(|entry| entry.shipment_id == shipment_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(entries)
    }

    async fn find_by_status(
        &self,
        shipment_id: Uuid,
        status: ShipmentStatus,
    ) -> Result<Option<TimelineEntry>, StoreError> {
        self.check_timeline_online()?;
        let guard = self.inner.read().await;
        let earliest = guard
            .timeline
            .iter()
            .filter(|entry| entry.shipment_id == shipment_id && entry.status == status)
            .min_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
            .cloned();
        Ok(earliest)
    }

    async fn insert(
        &self,
        shipment_id: Uuid,
        status: ShipmentStatus,
        location: Option<String>,
        notes: Option<String>,
    ) -> Result<TimelineEntry, StoreError> {
        self.check_timeline_online()?;
        let mut guard = self.inner.write().await;
        if guard
            .timeline
            .iter()
            .any(|entry| entry.shipment_id == shipment_id && entry.status == status)
        {
            return Err(StoreError::Conflict(format!(
                "timeline entry for status '{status}' already exists"
            )));
        }
        let entry = TimelineEntry {
            id: Uuid::now_v7(),
            shipment_id,
            status,
            location,
            notes,
            created_at: Utc::now(),
        };
        guard.timeline.push(entry.clone());
        Ok(entry)
    }

    async fn update_fields(
        &self,
        entry_id: Uuid,
        location: Option<String>,
        notes: Option<String>,
    ) -> Result<(), StoreError> {
        self.check_timeline_online()?;
        let mut guard = self.inner.write().await;
        let entry = guard
            .timeline
            .iter_mut()
            .find(|entry| entry.id == entry_id)
            .ok_or(StoreError::NotFound)?;
        if location.is_some() {
            entry.location = location;
        }
        if notes.is_some() {
            entry.notes = notes;
        }
        Ok(())
    }
}
