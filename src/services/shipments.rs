//! Shipment storage operations

use std::sync::Arc;

use crate::domain::{Order, Shipment, ShipmentItem};
use crate::pagination::{ApiList, PageRequest};

use super::repository::{Repository, RepositoryResult};

/// Shipment operations used by the controllers
#[derive(Clone)]
pub struct ShipmentApiService {
    shipments: Arc<dyn Repository<Shipment>>,
    shipment_items: Arc<dyn Repository<ShipmentItem>>,
}

impl ShipmentApiService {
    pub fn new(
        shipments: Arc<dyn Repository<Shipment>>,
        shipment_items: Arc<dyn Repository<ShipmentItem>>,
    ) -> Self {
        Self {
            shipments,
            shipment_items,
        }
    }

    /// One page of an order's shipments, after the cursor
    pub fn get_shipments_for_order(&self, order: &Order, page: PageRequest, since_id: u32) -> ApiList<Shipment> {
        let order_id = order.id;
        let query = self
            .shipments
            .table()
            .filter(move |shipment| shipment.order_id == order_id)
            .order_by_id()
            .since_id(since_id);
        ApiList::new(query, page.page_index, page.page_size)
    }

    pub fn get_shipment_by_id(&self, shipment_id: u32) -> Option<Shipment> {
        self.shipments.get(shipment_id)
    }

    /// Items of a shipment, ordered by id
    pub fn get_shipment_items(&self, shipment_id: u32) -> Vec<ShipmentItem> {
        self.shipment_items
            .table()
            .filter(move |item| item.shipment_id == shipment_id)
            .order_by_id()
            .into_vec()
    }

    pub fn insert_shipment(&self, shipment: Shipment) -> RepositoryResult<Shipment> {
        self.shipments.insert(shipment)
    }

    pub fn insert_shipment_items(&self, items: Vec<ShipmentItem>) -> RepositoryResult<Vec<ShipmentItem>> {
        items
            .into_iter()
            .map(|item| self.shipment_items.insert(item))
            .collect()
    }

    /// Replaces every item of a shipment with `items`
    pub fn replace_shipment_items(
        &self,
        shipment_id: u32,
        items: Vec<ShipmentItem>,
    ) -> RepositoryResult<Vec<ShipmentItem>> {
        for existing in self.get_shipment_items(shipment_id) {
            self.shipment_items.delete(existing.id);
        }
        self.insert_shipment_items(items)
    }

    pub fn update_shipment(&self, shipment: Shipment) -> RepositoryResult<()> {
        self.shipments.update(shipment)
    }

    /// Deletes the shipment and its items. Returns whether it existed.
    pub fn delete_shipment(&self, shipment_id: u32) -> bool {
        for item in self.get_shipment_items(shipment_id) {
            self.shipment_items.delete(item.id);
        }
        self.shipments.delete(shipment_id)
    }
}
