//! Full transport shapes for responses

use std::sync::Arc;

use crate::domain::{OrderItem, Shipment};
use crate::dto::ShipmentDto;

use super::repository::Repository;
use super::shipments::ShipmentApiService;

/// Assembles DTOs that need more than one record
#[derive(Clone)]
pub struct DtoHelper {
    shipments: ShipmentApiService,
    order_items: Arc<dyn Repository<OrderItem>>,
}

impl DtoHelper {
    pub fn new(shipments: ShipmentApiService, order_items: Arc<dyn Repository<OrderItem>>) -> Self {
        Self {
            shipments,
            order_items,
        }
    }

    /// Shipment with its items, each carrying its order item
    pub fn prepare_shipment_dto(&self, shipment: &Shipment) -> ShipmentDto {
        let mut dto = shipment.to_dto();
        dto.shipment_items = self
            .shipments
            .get_shipment_items(shipment.id)
            .iter()
            .map(|item| {
                let mut item_dto = item.to_dto();
                item_dto.order_item = self.order_items.get(item.order_item_id).map(|oi| oi.to_dto());
                item_dto
            })
            .collect();
        dto
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShipmentItem;
    use crate::services::InMemoryRepository;
    use chrono::Utc;

    #[test]
    fn test_prepare_shipment_dto() {
        let order_items = Arc::new(InMemoryRepository::with_records(vec![OrderItem {
            id: 4,
            order_id: 1,
            product_id: 77,
            quantity: 3,
        }]).unwrap());
        let shipments = ShipmentApiService::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
        );
        let helper = DtoHelper::new(shipments.clone(), order_items);

        let mut shipment = Shipment::for_order(1, Utc::now());
        shipment.tracking_number = "T9".to_string();
        let shipment = shipments.insert_shipment(shipment).unwrap();
        shipments.insert_shipment_items(vec![
            ShipmentItem {
                shipment_id: shipment.id,
                order_item_id: 4,
                quantity: 2,
                ..Default::default()
            },
            ShipmentItem {
                shipment_id: shipment.id,
                order_item_id: 404,
                quantity: 1,
                ..Default::default()
            },
        ])
        .unwrap();

        let dto = helper.prepare_shipment_dto(&shipment);
        assert_eq!(dto.tracking_number, "T9");
        assert_eq!(dto.shipment_items.len(), 2);
        assert_eq!(dto.shipment_items[0].order_item.as_ref().unwrap().product_id, 77);
        assert!(dto.shipment_items[1].order_item.is_none());
    }
}
