// The timeline reconciler: applies a status change (and any other field
// updates) to a shipment while keeping its timeline consistent.
//
// Responsibilities
// - Re-read the current persisted status before mutating; never trust a
//   client-held copy.
// - Persist field updates and the new status in one shipment write.
// - Insert a timeline entry on forward progression, amend the existing entry
//   in place on rollback or re-visit.
//
// Failure semantics
// - The shipment write is the atomic boundary: its failure fails the
//   operation. Timeline reads and writes after it degrade to warnings; the
//   shipment's status must never be blocked by a timeline fault.

use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::core::ports::{ShipmentStore, StoreError, TimelineStore};
use crate::core::shipment::{Shipment, ShipmentPatch, TimelineEntry};
use crate::core::status_catalog::{ShipmentStatus, default_location_and_notes};

/// One status-change request from the admin surface. With `status` absent
/// only the patch is applied and the timeline is left alone.
#[derive(Debug, Clone, Default)]
pub struct UpdateShipment {
    pub status: Option<ShipmentStatus>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub patch: ShipmentPatch,
}

#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub shipment: Shipment,
    /// Newest first.
    pub timeline: Vec<TimelineEntry>,
    /// Non-fatal timeline degradations, for operators and the response body.
    pub warnings: Vec<String>,
}

pub struct UpdateShipmentHandler<S, T>
where
    S: ShipmentStore + Send + Sync + 'static,
    T: TimelineStore + Send + Sync + 'static,
{
    shipments: Arc<S>,
    timeline: Arc<T>,
}

impl<S, T> UpdateShipmentHandler<S, T>
where
    S: ShipmentStore + Send + Sync + 'static,
    T: TimelineStore + Send + Sync + 'static,
{
    pub fn new(shipments: Arc<S>, timeline: Arc<T>) -> Self {
        Self { shipments, timeline }
    }

    pub async fn handle(
        &self,
        reference: &str,
        command: UpdateShipment,
    ) -> Result<UpdateOutcome, ApplicationError> {
        let before = match self.shipments.resolve(reference).await {
            Ok(shipment) => shipment,
            Err(StoreError::NotFound) => return Err(ApplicationError::NotFound),
            Err(other) => return Err(other.into()),
        };

        self.shipments
            .update(before.id, command.status, &command.patch)
            .await?;

        let mut warnings = Vec::new();
        if let Some(new_status) = command.status {
            self.reconcile_timeline(
                &before,
                new_status,
                non_empty(command.location),
                non_empty(command.notes),
                &mut warnings,
            )
            .await;
        }

        let shipment = self.shipments.get(before.id).await?;
        let timeline = match self.timeline.list_for_shipment(before.id).await {
            Ok(entries) => entries,
            Err(err) => {
                warn(&mut warnings, format!("timeline read failed: {err}"));
                Vec::new()
            }
        };

        Ok(UpdateOutcome {
            shipment,
            timeline,
            warnings,
        })
    }

    /// Decide between inserting a new entry (forward progression) and
    /// amending the earliest existing one (rollback or re-visit). All faults
    /// here degrade to warnings.
    async fn reconcile_timeline(
        &self,
        before: &Shipment,
        new_status: ShipmentStatus,
        explicit_location: Option<String>,
        explicit_notes: Option<String>,
        warnings: &mut Vec<String>,
    ) {
        let existing = match self.timeline.find_by_status(before.id, new_status).await {
            Ok(existing) => existing,
            Err(err) => {
                // A failed duplicate check must not be followed by a blind
                // insert; skip the timeline write rather than risk a
                // duplicate row.
                warn(
                    warnings,
                    format!("timeline check for status '{new_status}' failed: {err}"),
                );
                return;
            }
        };

        let amendment_requested = explicit_location.is_some() || explicit_notes.is_some();
        if new_status == before.status && existing.is_some() && !amendment_requested {
            // Re-applying the current status is a timeline no-op.
            return;
        }

        let (default_location, default_notes) = default_location_and_notes(new_status, before);
        let location = explicit_location.unwrap_or(default_location);
        let notes = explicit_notes.unwrap_or(default_notes);

        let result = match existing {
            Some(entry) => {
                self.timeline
                    .update_fields(entry.id, Some(location), Some(notes))
                    .await
            }
            None => self
                .timeline
                .insert(before.id, new_status, Some(location), Some(notes))
                .await
                .map(|_| ()),
        };
        if let Err(err) = result {
            warn(
                warnings,
                format!("timeline write for status '{new_status}' failed: {err}"),
            );
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn warn(warnings: &mut Vec<String>, message: String) {
    tracing::warn!("{message}");
    warnings.push(message);
}
