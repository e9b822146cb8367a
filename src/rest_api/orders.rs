//! Order endpoints

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};

use crate::dto::{OrdersCountRootObject, OrdersRootObject};
use crate::serializer::{FieldSelection, JsonFieldsSerializer};

use super::errors::{RestError, RestResult};
use super::parser::{parse_criteria, parse_fields, OrdersParameters};
use super::response::RawJson;
use super::state::ApiState;

/// Parses a route id. Zero is never a valid id.
pub(crate) fn parse_id(raw: &str, key: &'static str) -> RestResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(RestError::invalid_param(key, "invalid id")),
    }
}

fn render(orders: OrdersRootObject, fields: &FieldSelection) -> RestResult<RawJson> {
    Ok(RawJson(JsonFieldsSerializer::serialize(&orders, fields)?))
}

pub async fn list_orders_handler(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<HashMap<String, String>>,
) -> RestResult<RawJson> {
    let parameters = OrdersParameters::parse(&params)?;
    let orders = state
        .orders
        .get_orders(parameters.criteria, parameters.page, parameters.since_id);

    let root = OrdersRootObject {
        orders: orders.iter().map(|order| order.to_dto()).collect(),
    };
    render(root, &parameters.fields)
}

pub async fn count_orders_handler(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<HashMap<String, String>>,
) -> RestResult<RawJson> {
    let criteria = parse_criteria(&params)?;
    let count = OrdersCountRootObject {
        count: state.orders.get_orders_count(criteria),
    };
    serde_json::to_string(&count)
        .map(RawJson)
        .map_err(|e| RestError::Internal(e.to_string()))
}

pub async fn get_order_handler(
    State(state): State<Arc<ApiState>>,
    Path(order_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> RestResult<RawJson> {
    let order_id = parse_id(&order_id, "id")?;
    let order = state
        .orders
        .get_order_by_id(order_id)
        .ok_or(RestError::not_found("order"))?;

    let root = OrdersRootObject {
        orders: vec![order.to_dto()],
    };
    render(root, &parse_fields(&params))
}

pub async fn customer_orders_handler(
    State(state): State<Arc<ApiState>>,
    Path(customer_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> RestResult<RawJson> {
    let customer_id = parse_id(&customer_id, "customer_id")?;
    let orders = state.orders.get_orders_by_customer_id(customer_id);

    let root = OrdersRootObject {
        orders: orders.iter().map(|order| order.to_dto()).collect(),
    };
    render(root, &parse_fields(&params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12", "id").unwrap(), 12);
        assert_eq!(parse_id("0", "id").unwrap_err().key(), "id");
        assert_eq!(parse_id("-3", "order_id").unwrap_err().key(), "order_id");
        assert!(parse_id("abc", "id").is_err());
    }
}
