// The status catalog is the fixed, ordered set of lifecycle stages a shipment
// passes through, together with the default location/notes text used when a
// caller does not supply any.
//
// Boundaries
// - Pure functions only. No store access, no input or output.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::shipment::Shipment;

/// Lifecycle stages in catalog order. The wire names ("Picked Up", ...) are
/// what the store and the HTTP surface carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipmentStatus {
    Processing,
    #[serde(rename = "Picked Up")]
    PickedUp,
    #[serde(rename = "In Transit")]
    InTransit,
    #[serde(rename = "At Destination")]
    AtDestination,
    Delivered,
}

impl ShipmentStatus {
    pub const ALL: [ShipmentStatus; 5] = [
        ShipmentStatus::Processing,
        ShipmentStatus::PickedUp,
        ShipmentStatus::InTransit,
        ShipmentStatus::AtDestination,
        ShipmentStatus::Delivered,
    ];

    /// 1-based position in the catalog.
    pub fn position(self) -> u8 {
        match self {
            ShipmentStatus::Processing => 1,
            ShipmentStatus::PickedUp => 2,
            ShipmentStatus::InTransit => 3,
            ShipmentStatus::AtDestination => 4,
            ShipmentStatus::Delivered => 5,
        }
    }

    pub fn progress(self) -> Progress {
        let completed_steps = self.position();
        Progress {
            completed_steps,
            percentage: completed_steps * 20,
        }
    }

    pub fn is_final(self) -> bool {
        self == ShipmentStatus::Delivered
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShipmentStatus::Processing => "Processing",
            ShipmentStatus::PickedUp => "Picked Up",
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::AtDestination => "At Destination",
            ShipmentStatus::Delivered => "Delivered",
        };
        f.write_str(name)
    }
}

/// Completion state for the public tracking page: steps out of 5 and a
/// rounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed_steps: u8,
    pub percentage: u8,
}

/// Default timeline text for a status, derived from the shipment's own
/// sender/receiver fields. Used whenever the caller supplies no explicit
/// location or notes.
pub fn default_location_and_notes(status: ShipmentStatus, shipment: &Shipment) -> (String, String) {
    let sender_city = city_or(&shipment.sender_city, "Origin");
    let receiver_city = city_or(&shipment.receiver_city, "Destination");

    match status {
        ShipmentStatus::Processing => (
            format!("{sender_city} Sorting Center"),
            "Shipment created and processed".to_string(),
        ),
        ShipmentStatus::PickedUp => (
            format!("{sender_city} Sorting Center"),
            "Package picked up by courier".to_string(),
        ),
        ShipmentStatus::InTransit => (
            format!("{receiver_city} Distribution Hub"),
            "Package in transit to destination".to_string(),
        ),
        ShipmentStatus::AtDestination => (
            format!("{receiver_city} Distribution Hub"),
            format!("Package in {receiver_city} Distribution Hub"),
        ),
        ShipmentStatus::Delivered => (
            receiver_full_address(shipment),
            "Package picked up by receiver".to_string(),
        ),
    }
}

fn city_or<'a>(city: &'a str, fallback: &'a str) -> &'a str {
    if city.trim().is_empty() { fallback } else { city }
}

fn receiver_full_address(shipment: &Shipment) -> String {
    let parts: Vec<&str> = [
        shipment.receiver_street.as_str(),
        shipment.receiver_city.as_str(),
        shipment.receiver_country.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.trim().is_empty())
    .collect();

    if parts.is_empty() {
        city_or(&shipment.receiver_city, "Destination").to_string()
    } else {
        parts.join(", ")
    }
}
