//! Shipment transport shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::delta::{FieldCopy, Mergeable, WireSchema};
use crate::domain::{Shipment, ShipmentItem};
use crate::serializer::RootObject;

use super::order::OrderItemDto;

/// Shipment as exchanged with clients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentDto {
    pub id: u32,
    #[serde(deserialize_with = "null_as_empty")]
    pub tracking_number: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub admin_comment: String,
    pub weight: f64,
    pub created_on_utc: DateTime<Utc>,
    pub shipped_date_utc: Option<DateTime<Utc>>,
    pub delivery_date_utc: Option<DateTime<Utc>>,
    pub ready_for_pickup_date_utc: Option<DateTime<Utc>>,
    pub shipment_items: Vec<ShipmentItemDto>,
}

/// `null` clears a text field
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl WireSchema for ShipmentDto {
    const ROOT_NAME: &'static str = "shipment";
    const FIELD_NAMES: &'static [&'static str] = &[
        "id",
        "tracking_number",
        "admin_comment",
        "weight",
        "created_on_utc",
        "shipped_date_utc",
        "delivery_date_utc",
        "ready_for_pickup_date_utc",
        "shipment_items",
    ];
}

impl Mergeable<ShipmentDto> for ShipmentDto {
    const FIELDS: &'static [FieldCopy<Self, ShipmentDto>] = &[
        FieldCopy {
            name: "id",
            copy: |src, dst| dst.id = src.id,
        },
        FieldCopy {
            name: "tracking_number",
            copy: |src, dst| dst.tracking_number.clone_from(&src.tracking_number),
        },
        FieldCopy {
            name: "admin_comment",
            copy: |src, dst| dst.admin_comment.clone_from(&src.admin_comment),
        },
        FieldCopy {
            name: "weight",
            copy: |src, dst| dst.weight = src.weight,
        },
        FieldCopy {
            name: "created_on_utc",
            copy: |src, dst| dst.created_on_utc = src.created_on_utc,
        },
        FieldCopy {
            name: "shipped_date_utc",
            copy: |src, dst| dst.shipped_date_utc = src.shipped_date_utc,
        },
        FieldCopy {
            name: "delivery_date_utc",
            copy: |src, dst| dst.delivery_date_utc = src.delivery_date_utc,
        },
        FieldCopy {
            name: "ready_for_pickup_date_utc",
            copy: |src, dst| dst.ready_for_pickup_date_utc = src.ready_for_pickup_date_utc,
        },
        FieldCopy {
            name: "shipment_items",
            copy: |src, dst| dst.shipment_items.clone_from(&src.shipment_items),
        },
    ];
}

/// Record mapping. `id` is the record's identity and `shipment_items` are
/// separate rows, so neither is copied here.
impl Mergeable<Shipment> for ShipmentDto {
    const FIELDS: &'static [FieldCopy<Self, Shipment>] = &[
        FieldCopy {
            name: "tracking_number",
            copy: |src, dst| dst.tracking_number.clone_from(&src.tracking_number),
        },
        FieldCopy {
            name: "admin_comment",
            copy: |src, dst| dst.admin_comment.clone_from(&src.admin_comment),
        },
        FieldCopy {
            name: "weight",
            copy: |src, dst| dst.total_weight = Some(src.weight),
        },
        FieldCopy {
            name: "created_on_utc",
            copy: |src, dst| dst.created_on_utc = src.created_on_utc,
        },
        FieldCopy {
            name: "shipped_date_utc",
            copy: |src, dst| dst.shipped_date_utc = src.shipped_date_utc,
        },
        FieldCopy {
            name: "delivery_date_utc",
            copy: |src, dst| dst.delivery_date_utc = src.delivery_date_utc,
        },
        FieldCopy {
            name: "ready_for_pickup_date_utc",
            copy: |src, dst| dst.ready_for_pickup_date_utc = src.ready_for_pickup_date_utc,
        },
    ];
}

/// Shipment item as exchanged with clients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentItemDto {
    pub id: u32,
    pub quantity: i32,
    /// Output only; filled in when a shipment is prepared for a response
    pub order_item: Option<OrderItemDto>,
    pub order_item_id: u32,
    pub warehouse_id: u32,
}

impl ShipmentItemDto {
    /// New record for this item inside `shipment_id`
    pub fn to_record(&self, shipment_id: u32) -> ShipmentItem {
        ShipmentItem {
            id: 0,
            shipment_id,
            order_item_id: self.order_item_id,
            quantity: self.quantity,
            warehouse_id: self.warehouse_id,
        }
    }
}

impl WireSchema for ShipmentItemDto {
    const ROOT_NAME: &'static str = "shipment_item";
    const FIELD_NAMES: &'static [&'static str] =
        &["id", "quantity", "order_item", "order_item_id", "warehouse_id"];
}

impl Mergeable<ShipmentItemDto> for ShipmentItemDto {
    const FIELDS: &'static [FieldCopy<Self, ShipmentItemDto>] = &[
        FieldCopy {
            name: "id",
            copy: |src, dst| dst.id = src.id,
        },
        FieldCopy {
            name: "quantity",
            copy: |src, dst| dst.quantity = src.quantity,
        },
        FieldCopy {
            name: "order_item_id",
            copy: |src, dst| dst.order_item_id = src.order_item_id,
        },
        FieldCopy {
            name: "warehouse_id",
            copy: |src, dst| dst.warehouse_id = src.warehouse_id,
        },
    ];
}

impl Mergeable<ShipmentItem> for ShipmentItemDto {
    const FIELDS: &'static [FieldCopy<Self, ShipmentItem>] = &[
        FieldCopy {
            name: "quantity",
            copy: |src, dst| dst.quantity = src.quantity,
        },
        FieldCopy {
            name: "order_item_id",
            copy: |src, dst| dst.order_item_id = src.order_item_id,
        },
        FieldCopy {
            name: "warehouse_id",
            copy: |src, dst| dst.warehouse_id = src.warehouse_id,
        },
    ];
}

/// `{"shipments": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentsRootObject {
    pub shipments: Vec<ShipmentDto>,
}

impl ShipmentsRootObject {
    pub fn single(shipment: ShipmentDto) -> Self {
        Self {
            shipments: vec![shipment],
        }
    }
}

impl RootObject for ShipmentsRootObject {
    fn primary_property_name(&self) -> &'static str {
        "shipments"
    }

    fn primary_field_names(&self) -> &'static [&'static str] {
        ShipmentDto::FIELD_NAMES
    }
}

/// `{"shipment_items": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentItemsRootObject {
    pub shipment_items: Vec<ShipmentItemDto>,
}

impl RootObject for ShipmentItemsRootObject {
    fn primary_property_name(&self) -> &'static str {
        "shipment_items"
    }

    fn primary_field_names(&self) -> &'static [&'static str] {
        ShipmentItemDto::FIELD_NAMES
    }
}

impl Shipment {
    /// Transport form without items; see `DtoHelper` for the full shape
    pub fn to_dto(&self) -> ShipmentDto {
        ShipmentDto {
            id: self.id,
            tracking_number: self.tracking_number.clone(),
            admin_comment: self.admin_comment.clone(),
            weight: self.total_weight.unwrap_or_default(),
            created_on_utc: self.created_on_utc,
            shipped_date_utc: self.shipped_date_utc,
            delivery_date_utc: self.delivery_date_utc,
            ready_for_pickup_date_utc: self.ready_for_pickup_date_utc,
            shipment_items: Vec::new(),
        }
    }
}

impl ShipmentItem {
    pub fn to_dto(&self) -> ShipmentItemDto {
        ShipmentItemDto {
            id: self.id,
            quantity: self.quantity,
            order_item: None,
            order_item_id: self.order_item_id,
            warehouse_id: self.warehouse_id,
        }
    }
}
