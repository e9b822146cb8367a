//! Commerce API routes
//!
//! Mounted under `/api`.

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::rest_api::orders::{
    count_orders_handler, customer_orders_handler, get_order_handler, list_orders_handler,
};
use crate::rest_api::shipments::{
    create_shipment_handler, delete_shipment_handler, get_shipment_handler,
    list_shipment_items_handler, list_shipments_handler, update_shipment_handler,
};
use crate::rest_api::ApiState;

/// Create the commerce API router
pub fn api_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        // Orders
        .route("/orders", get(list_orders_handler))
        .route("/orders/count", get(count_orders_handler))
        .route("/orders/customer/:customer_id", get(customer_orders_handler))
        .route("/orders/:order_id", get(get_order_handler))
        // Shipments
        .route(
            "/orders/:order_id/shipments",
            get(list_shipments_handler).post(create_shipment_handler),
        )
        .route(
            "/orders/:order_id/shipments/:shipment_id",
            put(update_shipment_handler)
                .get(get_shipment_handler)
                .delete(delete_shipment_handler),
        )
        .route(
            "/orders/:order_id/shipments/:shipment_id/items",
            get(list_shipment_items_handler),
        )
        .with_state(state)
}
