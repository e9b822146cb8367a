//! Shipment endpoints
//!
//! Writes take a rooted partial payload, `{"shipment": {...}}`. Only the
//! fields present in it are applied; `created_on_utc` is owned by the server.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use chrono::Utc;

use crate::delta::Delta;
use crate::domain::{Order, Shipment};
use crate::dto::{ShipmentDto, ShipmentItemsRootObject, ShipmentsRootObject};
use crate::observability::{ActivityRecord, Logger};
use crate::serializer::{FieldSelection, JsonFieldsSerializer};

use super::errors::{RestError, RestResult};
use super::orders::parse_id;
use super::parser::{parse_fields, ShipmentsParameters};
use super::response::RawJson;
use super::state::ApiState;

fn find_order(state: &ApiState, order_id: &str) -> RestResult<Order> {
    let order_id = parse_id(order_id, "order_id")?;
    state
        .orders
        .get_order_by_id(order_id)
        .ok_or(RestError::not_found("order"))
}

/// A shipment of `order`; one filed under another order is not found
fn find_shipment(state: &ApiState, order: &Order, shipment_id: &str) -> RestResult<Shipment> {
    let shipment_id = parse_id(shipment_id, "shipment_id")?;
    state
        .shipments
        .get_shipment_by_id(shipment_id)
        .filter(|shipment| shipment.order_id == order.id)
        .ok_or(RestError::not_found("shipment"))
}

fn render_shipment(state: &ApiState, shipment: &Shipment, fields: &FieldSelection) -> RestResult<RawJson> {
    let root = ShipmentsRootObject::single(state.dto_helper.prepare_shipment_dto(shipment));
    Ok(RawJson(JsonFieldsSerializer::serialize(&root, fields)?))
}

fn record_activity(state: &ApiState, keyword: &str, comment: String, shipment: &Shipment) {
    let record = ActivityRecord::new(keyword, comment, "shipment", shipment.id);
    if let Err(e) = state.activity.insert_activity(record) {
        let shipment_id = shipment.id.to_string();
        let error = e.to_string();
        Logger::error(
            "ACTIVITY_WRITE_FAILED",
            &[("shipment_id", shipment_id.as_str()), ("error", error.as_str())],
        );
    }
}

pub async fn list_shipments_handler(
    State(state): State<Arc<ApiState>>,
    Path(order_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> RestResult<RawJson> {
    let parameters = ShipmentsParameters::parse(&params)?;
    let order = find_order(&state, &order_id)?;

    let shipments = state
        .shipments
        .get_shipments_for_order(&order, parameters.page, parameters.since_id);
    let root = ShipmentsRootObject {
        shipments: shipments
            .iter()
            .map(|shipment| state.dto_helper.prepare_shipment_dto(shipment))
            .collect(),
    };
    Ok(RawJson(JsonFieldsSerializer::serialize(&root, &parameters.fields)?))
}

pub async fn get_shipment_handler(
    State(state): State<Arc<ApiState>>,
    Path((order_id, shipment_id)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> RestResult<RawJson> {
    let order = find_order(&state, &order_id)?;
    let shipment = find_shipment(&state, &order, &shipment_id)?;
    render_shipment(&state, &shipment, &parse_fields(&params))
}

pub async fn list_shipment_items_handler(
    State(state): State<Arc<ApiState>>,
    Path((order_id, shipment_id)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> RestResult<RawJson> {
    let order = find_order(&state, &order_id)?;
    let shipment = find_shipment(&state, &order, &shipment_id)?;

    let root = ShipmentItemsRootObject {
        shipment_items: state.dto_helper.prepare_shipment_dto(&shipment).shipment_items,
    };
    Ok(RawJson(JsonFieldsSerializer::serialize(&root, &parse_fields(&params))?))
}

pub async fn create_shipment_handler(
    State(state): State<Arc<ApiState>>,
    Path(order_id): Path<String>,
    body: String,
) -> RestResult<RawJson> {
    let delta = Delta::<ShipmentDto>::parse_rooted(&body)?;
    let order = find_order(&state, &order_id)?;

    let mut shipment = delta.merge_into(Shipment::default());
    shipment.order_id = order.id;
    shipment.created_on_utc = Utc::now();
    let shipment = state.shipments.insert_shipment(shipment)?;

    let items = delta
        .dto()
        .shipment_items
        .iter()
        .map(|item| item.to_record(shipment.id))
        .collect();
    let items = state.shipments.insert_shipment_items(items)?;

    record_activity(
        &state,
        "AddNewShipment",
        format!("Added a new shipment (ID = {})", shipment.id),
        &shipment,
    );
    let shipment_id = shipment.id.to_string();
    let order_id = order.id.to_string();
    let item_count = items.len().to_string();
    Logger::info(
        "SHIPMENT_CREATED",
        &[
            ("items", item_count.as_str()),
            ("order_id", order_id.as_str()),
            ("shipment_id", shipment_id.as_str()),
        ],
    );

    render_shipment(&state, &shipment, &FieldSelection::all())
}

pub async fn update_shipment_handler(
    State(state): State<Arc<ApiState>>,
    Path((order_id, shipment_id)): Path<(String, String)>,
    body: String,
) -> RestResult<RawJson> {
    let delta = Delta::<ShipmentDto>::parse_rooted(&body)?;
    let order = find_order(&state, &order_id)?;
    let mut shipment = find_shipment(&state, &order, &shipment_id)?;

    let created_on_utc = shipment.created_on_utc;
    delta.merge(&mut shipment);
    shipment.created_on_utc = created_on_utc;

    state.shipments.update_shipment(shipment.clone())?;

    if delta.is_present("shipment_items") {
        let items = delta
            .dto()
            .shipment_items
            .iter()
            .map(|item| item.to_record(shipment.id))
            .collect();
        state.shipments.replace_shipment_items(shipment.id, items)?;
    }

    record_activity(
        &state,
        "UpdateShipment",
        format!("Updated a shipment (ID = {})", shipment.id),
        &shipment,
    );
    let shipment_id = shipment.id.to_string();
    let changed: Vec<&str> = delta.presence().iter().collect();
    let changed = changed.join(",");
    Logger::info(
        "SHIPMENT_UPDATED",
        &[("fields", changed.as_str()), ("shipment_id", shipment_id.as_str())],
    );

    render_shipment(&state, &shipment, &FieldSelection::all())
}

pub async fn delete_shipment_handler(
    State(state): State<Arc<ApiState>>,
    Path((order_id, shipment_id)): Path<(String, String)>,
) -> RestResult<RawJson> {
    let order = find_order(&state, &order_id)?;
    let shipment = find_shipment(&state, &order, &shipment_id)?;

    if !state.shipments.delete_shipment(shipment.id) {
        return Err(RestError::not_found("shipment"));
    }

    let shipment_id = shipment.id.to_string();
    Logger::info("SHIPMENT_DELETED", &[("shipment_id", shipment_id.as_str())]);

    Ok(RawJson::empty_object())
}
