use axum::{
    Router,
    routing::{get, post},
};

use crate::shell::inbound::{
    create_shipment, delete_shipment, get_shipment, list_shipments, track_shipment,
    update_shipment,
};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/shipments",
            post(create_shipment::handle).get(list_shipments::handle),
        )
        .route(
            "/shipments/{reference}",
            get(get_shipment::handle)
                .patch(update_shipment::handle)
                .delete(delete_shipment::handle),
        )
        .route("/track/{tracking_code}", get(track_shipment::handle))
        .with_state(state)
}
