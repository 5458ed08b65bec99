use std::sync::Arc;

use crate::adapters::in_memory::in_memory_store::InMemoryStore;
use crate::application::command_handlers::create_shipment::CreateShipmentHandler;
use crate::application::command_handlers::delete_shipment::DeleteShipmentHandler;
use crate::application::command_handlers::update_shipment::UpdateShipmentHandler;
use crate::application::query_handlers::shipment_queries::ShipmentQueries;

#[derive(Clone)]
pub struct AppState {
    pub create_shipment: Arc<CreateShipmentHandler<InMemoryStore, InMemoryStore>>,
    pub update_shipment: Arc<UpdateShipmentHandler<InMemoryStore, InMemoryStore>>,
    pub delete_shipment: Arc<DeleteShipmentHandler<InMemoryStore>>,
    pub queries: Arc<ShipmentQueries<InMemoryStore, InMemoryStore>>,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }

    /// Wire every handler onto one shared store. The same object backs both
    /// ports so deletes cascade like they would in the relational schema.
    pub fn with_store(store: Arc<InMemoryStore>) -> Self {
        Self {
            create_shipment: Arc::new(CreateShipmentHandler::new(store.clone(), store.clone())),
            update_shipment: Arc::new(UpdateShipmentHandler::new(store.clone(), store.clone())),
            delete_shipment: Arc::new(DeleteShipmentHandler::new(store.clone())),
            queries: Arc::new(ShipmentQueries::new(store.clone(), store)),
        }
    }
}
