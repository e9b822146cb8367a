//! Domain records
//!
//! Storage-side shapes of the commerce backend. These are what repositories
//! hold; transport shapes live in `dto`.

mod order;
mod shipment;

pub use order::{Order, OrderItem, OrderStatus, PaymentStatus, ProductCategory, ShippingStatus};
pub use shipment::{Shipment, ShipmentItem};

/// A record with a stable numeric identifier.
///
/// Ordering and cursor pagination are defined in terms of this id.
pub trait Identified {
    fn id(&self) -> u32;

    /// Assigns the identifier. Repositories call this on insert.
    fn set_id(&mut self, id: u32);
}
