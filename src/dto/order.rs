//! Order transport shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::delta::WireSchema;
use crate::domain::{Order, OrderItem, OrderStatus, PaymentStatus, ShippingStatus};
use crate::serializer::RootObject;

/// Order as exchanged with clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: u32,
    pub customer_id: u32,
    pub store_id: u32,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub shipping_status: ShippingStatus,
    pub created_on_utc: DateTime<Utc>,
}

impl WireSchema for OrderDto {
    const ROOT_NAME: &'static str = "order";
    const FIELD_NAMES: &'static [&'static str] = &[
        "id",
        "customer_id",
        "store_id",
        "order_status",
        "payment_status",
        "shipping_status",
        "created_on_utc",
    ];
}

/// Order line as exchanged with clients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItemDto {
    pub id: u32,
    pub order_id: u32,
    pub product_id: u32,
    pub quantity: i32,
}

impl WireSchema for OrderItemDto {
    const ROOT_NAME: &'static str = "order_item";
    const FIELD_NAMES: &'static [&'static str] = &["id", "order_id", "product_id", "quantity"];
}

/// `{"orders": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdersRootObject {
    pub orders: Vec<OrderDto>,
}

impl RootObject for OrdersRootObject {
    fn primary_property_name(&self) -> &'static str {
        "orders"
    }

    fn primary_field_names(&self) -> &'static [&'static str] {
        OrderDto::FIELD_NAMES
    }
}

/// `{"count": n}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersCountRootObject {
    pub count: usize,
}

impl Order {
    pub fn to_dto(&self) -> OrderDto {
        OrderDto {
            id: self.id,
            customer_id: self.customer_id,
            store_id: self.store_id,
            order_status: self.order_status,
            payment_status: self.payment_status,
            shipping_status: self.shipping_status,
            created_on_utc: self.created_on_utc,
        }
    }
}

impl OrderItem {
    pub fn to_dto(&self) -> OrderItemDto {
        OrderItemDto {
            id: self.id,
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}
