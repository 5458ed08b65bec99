pub mod create_shipment;
pub mod delete_shipment;
pub mod get_shipment;
pub mod list_shipments;
pub mod track_shipment;
pub mod update_shipment;
