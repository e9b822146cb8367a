//! Domain services
//!
//! Thin read/write operations over repositories. Query shape (filters,
//! ordering, cursor, page) is composed here and handed to `ApiList`.

mod dto_helper;
mod orders;
mod repository;
mod shipments;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Order, OrderItem, ProductCategory, Shipment, ShipmentItem};

pub use dto_helper::DtoHelper;
pub use orders::OrderApiService;
pub use repository::{InMemoryRepository, Repository, RepositoryError, RepositoryResult};
pub use shipments::ShipmentApiService;

/// Seed records loaded at boot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub product_categories: Vec<ProductCategory>,
    pub shipments: Vec<Shipment>,
    pub shipment_items: Vec<ShipmentItem>,
}

/// In-memory repositories for every record type
#[derive(Debug, Default)]
pub struct Stores {
    pub orders: Arc<InMemoryRepository<Order>>,
    pub order_items: Arc<InMemoryRepository<OrderItem>>,
    pub product_categories: Arc<InMemoryRepository<ProductCategory>>,
    pub shipments: Arc<InMemoryRepository<Shipment>>,
    pub shipment_items: Arc<InMemoryRepository<ShipmentItem>>,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixtures(fixtures: Fixtures) -> RepositoryResult<Self> {
        let stores = Self::new();
        for order in fixtures.orders {
            stores.orders.insert(order)?;
        }
        for item in fixtures.order_items {
            stores.order_items.insert(item)?;
        }
        for mapping in fixtures.product_categories {
            stores.product_categories.insert(mapping)?;
        }
        for shipment in fixtures.shipments {
            stores.shipments.insert(shipment)?;
        }
        for item in fixtures.shipment_items {
            stores.shipment_items.insert(item)?;
        }
        Ok(stores)
    }

    pub fn order_service(&self) -> OrderApiService {
        OrderApiService::new(
            self.orders.clone(),
            self.order_items.clone(),
            self.product_categories.clone(),
        )
    }

    pub fn shipment_service(&self) -> ShipmentApiService {
        ShipmentApiService::new(self.shipments.clone(), self.shipment_items.clone())
    }

    pub fn dto_helper(&self) -> DtoHelper {
        DtoHelper::new(self.shipment_service(), self.order_items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fixtures_seed_stores() {
        let fixtures: Fixtures = serde_json::from_value(json!({
            "orders": [{
                "id": 1,
                "customer_id": 7,
                "order_status": "pending",
                "payment_status": "paid",
                "shipping_status": "not_yet_shipped",
                "created_on_utc": "2024-01-01T00:00:00Z"
            }],
            "order_items": [{"id": 1, "order_id": 1, "product_id": 5}]
        }))
        .unwrap();

        let stores = Stores::from_fixtures(fixtures).unwrap();
        assert_eq!(stores.orders.len(), 1);
        assert_eq!(stores.order_items.len(), 1);
        assert!(stores.shipments.is_empty());
        assert!(stores.order_service().get_order_by_id(1).is_some());
    }
}
