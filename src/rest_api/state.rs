//! Shared controller state

use std::sync::Arc;

use crate::observability::ActivityLog;
use crate::services::{DtoHelper, OrderApiService, ShipmentApiService, Stores};

/// Services handed to every handler
#[derive(Clone)]
pub struct ApiState {
    pub orders: OrderApiService,
    pub shipments: ShipmentApiService,
    pub dto_helper: DtoHelper,
    pub activity: Arc<dyn ActivityLog>,
}

impl ApiState {
    pub fn new(stores: &Stores, activity: Arc<dyn ActivityLog>) -> Self {
        Self {
            orders: stores.order_service(),
            shipments: stores.shipment_service(),
            dto_helper: stores.dto_helper(),
            activity,
        }
    }
}
