// Shipment and timeline entry records, plus the creation payload and the
// partial-update patch the admin surface sends.
//
// Boundaries
// - Plain data and validation only; persistence lives behind the ports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::status_catalog::ShipmentStatus;

/// One parcel. `id` is the stable internal identity; `tracking_code` is the
/// human-facing identifier handed to the receiver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: Uuid,
    pub tracking_code: String,
    pub status: ShipmentStatus,

    pub sender_name: String,
    pub sender_phone: String,
    pub sender_email: Option<String>,
    pub sender_street: String,
    pub sender_city: String,
    pub sender_country: String,

    pub receiver_name: String,
    pub receiver_phone: String,
    pub receiver_street: String,
    pub receiver_city: String,
    pub receiver_country: String,

    pub package_type: String,
    pub weight_kg: Option<f64>,
    pub length_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub height_cm: Option<f64>,
    pub declared_value_usd: Option<f64>,

    pub invoice_number: Option<String>,
    pub payment_status: Option<String>,
    pub payment_method: Option<String>,
    pub payment_date: Option<String>,
    pub shipping_cost_yen: Option<f64>,
    pub insurance_yen: Option<f64>,
    pub taxes_yen: Option<f64>,
    pub additional_fees_usd: Option<f64>,
    pub total_amount_yen: Option<f64>,

    pub clearance_status: Option<String>,
    pub declaration_number: Option<String>,
    pub clearance_notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One status occurrence in a shipment's history. `created_at` is assigned by
/// the store and immutable once written; at most one entry exists per
/// (shipment, status) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: Uuid,
    pub shipment_id: Uuid,
    pub status: ShipmentStatus,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload. Status is not part of it: every shipment starts at the
/// first catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewShipment {
    pub sender_name: String,
    pub sender_phone: String,
    #[serde(default)]
    pub sender_email: Option<String>,
    pub sender_street: String,
    pub sender_city: String,
    pub sender_country: String,

    pub receiver_name: String,
    pub receiver_phone: String,
    pub receiver_street: String,
    pub receiver_city: String,
    pub receiver_country: String,

    pub package_type: String,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub length_cm: Option<f64>,
    #[serde(default)]
    pub width_cm: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub declared_value_usd: Option<f64>,

    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default)]
    pub shipping_cost_yen: Option<f64>,
    #[serde(default)]
    pub insurance_yen: Option<f64>,
    #[serde(default)]
    pub taxes_yen: Option<f64>,
    #[serde(default)]
    pub additional_fees_usd: Option<f64>,
    #[serde(default)]
    pub total_amount_yen: Option<f64>,

    #[serde(default)]
    pub clearance_status: Option<String>,
    #[serde(default)]
    pub declaration_number: Option<String>,
    #[serde(default)]
    pub clearance_notes: Option<String>,
}

impl NewShipment {
    /// Required-field validation; nothing may be persisted when this fails.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let required = [
            (&self.sender_name, "Sender name is required"),
            (&self.sender_phone, "Sender phone is required"),
            (&self.sender_street, "Sender street address is required"),
            (&self.sender_city, "Sender city is required"),
            (&self.sender_country, "Sender country is required"),
            (&self.receiver_name, "Receiver name is required"),
            (&self.receiver_phone, "Receiver phone is required"),
            (&self.receiver_street, "Receiver street address is required"),
            (&self.receiver_city, "Receiver city is required"),
            (&self.receiver_country, "Receiver country is required"),
            (&self.package_type, "Package type is required"),
        ];
        for (value, message) in required {
            if value.trim().is_empty() {
                errors.push(message.to_string());
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Materialize the shipment record; identity, tracking code, initial
    /// status, and timestamps are assigned here.
    pub fn into_shipment(self, id: Uuid, now: DateTime<Utc>) -> Shipment {
        Shipment {
            id,
            tracking_code: tracking_code_for(id),
            status: ShipmentStatus::Processing,
            sender_name: self.sender_name,
            sender_phone: self.sender_phone,
            sender_email: self.sender_email,
            sender_street: self.sender_street,
            sender_city: self.sender_city,
            sender_country: self.sender_country,
            receiver_name: self.receiver_name,
            receiver_phone: self.receiver_phone,
            receiver_street: self.receiver_street,
            receiver_city: self.receiver_city,
            receiver_country: self.receiver_country,
            package_type: self.package_type,
            weight_kg: self.weight_kg,
            length_cm: self.length_cm,
            width_cm: self.width_cm,
            height_cm: self.height_cm,
            declared_value_usd: self.declared_value_usd,
            invoice_number: self.invoice_number,
            payment_status: self.payment_status,
            payment_method: self.payment_method,
            payment_date: self.payment_date,
            shipping_cost_yen: self.shipping_cost_yen,
            insurance_yen: self.insurance_yen,
            taxes_yen: self.taxes_yen,
            additional_fees_usd: self.additional_fees_usd,
            total_amount_yen: self.total_amount_yen,
            clearance_status: self.clearance_status,
            declaration_number: self.declaration_number,
            clearance_notes: self.clearance_notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Human-facing tracking code, derived from the random tail of the shipment
/// id so codes stay unique without a second generator.
pub fn tracking_code_for(id: Uuid) -> String {
    let simple = id.simple().to_string();
    format!("SW{}", simple[simple.len() - 10..].to_uppercase())
}

/// Non-status attributes the admin update surface may change. Fields left as
/// `None` stay untouched; the patch never writes to the timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentPatch {
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default)]
    pub shipping_cost_yen: Option<f64>,
    #[serde(default)]
    pub insurance_yen: Option<f64>,
    #[serde(default)]
    pub taxes_yen: Option<f64>,
    #[serde(default)]
    pub additional_fees_usd: Option<f64>,
    #[serde(default)]
    pub total_amount_yen: Option<f64>,
    #[serde(default)]
    pub clearance_status: Option<String>,
    #[serde(default)]
    pub declaration_number: Option<String>,
    #[serde(default)]
    pub clearance_notes: Option<String>,
}

impl ShipmentPatch {
    pub fn is_empty(&self) -> bool {
        *self == ShipmentPatch::default()
    }

    pub fn apply_to(&self, shipment: &mut Shipment) {
        let fields = [
            (&self.invoice_number, &mut shipment.invoice_number),
            (&self.payment_status, &mut shipment.payment_status),
            (&self.payment_method, &mut shipment.payment_method),
            (&self.payment_date, &mut shipment.payment_date),
            (&self.clearance_status, &mut shipment.clearance_status),
            (&self.declaration_number, &mut shipment.declaration_number),
            (&self.clearance_notes, &mut shipment.clearance_notes),
        ];
        for (patch_value, field) in fields {
            if patch_value.is_some() {
                *field = patch_value.clone();
            }
        }

        let amounts = [
            (self.shipping_cost_yen, &mut shipment.shipping_cost_yen),
            (self.insurance_yen, &mut shipment.insurance_yen),
            (self.taxes_yen, &mut shipment.taxes_yen),
            (self.additional_fees_usd, &mut shipment.additional_fees_usd),
            (self.total_amount_yen, &mut shipment.total_amount_yen),
        ];
        for (patch_value, field) in amounts {
            if patch_value.is_some() {
                *field = patch_value;
            }
        }
    }
}
