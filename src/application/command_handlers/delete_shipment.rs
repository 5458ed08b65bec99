use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::core::ports::{ShipmentStore, StoreError};

/// Removes a shipment by id or tracking code. The store cascades the
/// deletion to the shipment's timeline.
pub struct DeleteShipmentHandler<S>
where
    S: ShipmentStore + Send + Sync + 'static,
{
    shipments: Arc<S>,
}

impl<S> DeleteShipmentHandler<S>
where
    S: ShipmentStore + Send + Sync + 'static,
{
    pub fn new(shipments: Arc<S>) -> Self {
        Self { shipments }
    }

    pub async fn handle(&self, reference: &str) -> Result<(), ApplicationError> {
        let shipment = match self.shipments.resolve(reference).await {
            Ok(shipment) => shipment,
            Err(StoreError::NotFound) => return Err(ApplicationError::NotFound),
            Err(other) => return Err(other.into()),
        };
        self.shipments.delete(shipment.id).await?;
        Ok(())
    }
}
