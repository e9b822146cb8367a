//! Shipments and shipment items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identified;

/// A shipment of (part of) an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shipment {
    pub id: u32,
    pub order_id: u32,
    pub tracking_number: String,
    pub total_weight: Option<f64>,
    pub shipped_date_utc: Option<DateTime<Utc>>,
    pub delivery_date_utc: Option<DateTime<Utc>>,
    pub ready_for_pickup_date_utc: Option<DateTime<Utc>>,
    pub admin_comment: String,
    pub created_on_utc: DateTime<Utc>,
}

impl Shipment {
    /// An empty shipment for an order, stamped with the creation time
    pub fn for_order(order_id: u32, created_on_utc: DateTime<Utc>) -> Self {
        Self {
            order_id,
            created_on_utc,
            ..Default::default()
        }
    }
}

impl Identified for Shipment {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// One order item (or part of its quantity) inside a shipment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentItem {
    pub id: u32,
    pub shipment_id: u32,
    pub order_item_id: u32,
    pub quantity: i32,
    pub warehouse_id: u32,
}

impl Identified for ShipmentItem {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}
