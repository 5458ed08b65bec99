// Builders for test data. Defaults form a fully valid Osaka-to-Boston
// creation payload; individual fields are overridden per test.

use chrono::Utc;
use uuid::Uuid;

use crate::core::shipment::{NewShipment, Shipment};

pub struct NewShipmentBuilder {
    payload: NewShipment,
}

impl NewShipmentBuilder {
    pub fn new() -> Self {
        Self {
            payload: NewShipment {
                sender_name: "Kenji Watanabe".into(),
                sender_phone: "+81 6 1234 5678".into(),
                sender_email: Some("kenji.watanabe@example.jp".into()),
                sender_street: "2-4-1 Umeda".into(),
                sender_city: "Osaka".into(),
                sender_country: "Japan".into(),
                receiver_name: "Sarah Mitchell".into(),
                receiver_phone: "+1 617 555 0142".into(),
                receiver_street: "5 Elm St".into(),
                receiver_city: "Boston".into(),
                receiver_country: "USA".into(),
                package_type: "Box".into(),
                weight_kg: Some(2.5),
                length_cm: Some(30.0),
                width_cm: Some(20.0),
                height_cm: Some(15.0),
                declared_value_usd: Some(120.0),
                invoice_number: None,
                payment_status: None,
                payment_method: None,
                payment_date: None,
                shipping_cost_yen: None,
                insurance_yen: None,
                taxes_yen: None,
                additional_fees_usd: None,
                total_amount_yen: None,
                clearance_status: None,
                declaration_number: None,
                clearance_notes: None,
            },
        }
    }

    pub fn sender_name(mut self, value: &str) -> Self {
        self.payload.sender_name = value.into();
        self
    }

    pub fn sender_city(mut self, value: &str) -> Self {
        self.payload.sender_city = value.into();
        self
    }

    pub fn receiver_phone(mut self, value: &str) -> Self {
        self.payload.receiver_phone = value.into();
        self
    }

    pub fn receiver_street(mut self, value: &str) -> Self {
        self.payload.receiver_street = value.into();
        self
    }

    pub fn receiver_city(mut self, value: &str) -> Self {
        self.payload.receiver_city = value.into();
        self
    }

    pub fn receiver_country(mut self, value: &str) -> Self {
        self.payload.receiver_country = value.into();
        self
    }

    pub fn package_type(mut self, value: &str) -> Self {
        self.payload.package_type = value.into();
        self
    }

    pub fn build(self) -> NewShipment {
        self.payload
    }

    /// Materialize a shipment record directly, bypassing creation-time
    /// validation. Useful for seeding stores with edge-case data.
    pub fn build_shipment(self) -> Shipment {
        self.payload.into_shipment(Uuid::now_v7(), Utc::now())
    }
}

impl Default for NewShipmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
