//! Transport representations
//!
//! Wire shapes (snake_case names), their root envelopes, record-to-DTO
//! mappings, and the merge tables used for partial updates.

mod order;
mod shipment;

pub use order::{OrderDto, OrderItemDto, OrdersCountRootObject, OrdersRootObject};
pub use shipment::{ShipmentDto, ShipmentItemDto, ShipmentItemsRootObject, ShipmentsRootObject};
