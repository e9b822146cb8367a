//! # Query Parameter Parser
//!
//! Turns query strings into page requests, cursors, field selections and
//! order criteria. Blank values count as absent.

use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::pagination::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE, DEFAULT_SINCE_ID};
use crate::query::OrderCriteria;
use crate::serializer::FieldSelection;

use super::errors::{RestError, RestResult};

/// Parsed `GET /api/orders/:order_id/shipments` parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentsParameters {
    pub page: PageRequest,
    pub since_id: u32,
    pub fields: FieldSelection,
}

impl ShipmentsParameters {
    pub fn parse(params: &HashMap<String, String>) -> RestResult<Self> {
        Ok(Self {
            page: parse_page(params)?,
            since_id: parse_since_id(params)?,
            fields: parse_fields(params),
        })
    }
}

/// Parsed `GET /api/orders` parameters
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersParameters {
    pub page: PageRequest,
    pub since_id: u32,
    pub fields: FieldSelection,
    pub criteria: OrderCriteria,
}

impl OrdersParameters {
    pub fn parse(params: &HashMap<String, String>) -> RestResult<Self> {
        Ok(Self {
            page: parse_page(params)?,
            since_id: parse_since_id(params)?,
            fields: parse_fields(params),
            criteria: parse_criteria(params)?,
        })
    }
}

/// `fields=a,b`; absent means every field
pub fn parse_fields(params: &HashMap<String, String>) -> FieldSelection {
    value(params, "fields")
        .map(FieldSelection::parse)
        .unwrap_or_else(FieldSelection::all)
}

/// Order criteria shared by the list and count endpoints
pub fn parse_criteria(params: &HashMap<String, String>) -> RestResult<OrderCriteria> {
    Ok(OrderCriteria {
        ids: value(params, "ids").and_then(parse_ids),
        created_at_min: parse_optional(params, "created_at_min", parse_date)?,
        created_at_max: parse_optional(params, "created_at_max", parse_date)?,
        status: parse_optional(params, "status", |s| s.parse().ok())?,
        payment_status: parse_optional(params, "payment_status", |s| s.parse().ok())?,
        shipping_status: parse_optional(params, "shipping_status", |s| s.parse().ok())?,
        customer_id: parse_optional(params, "customer_id", parse_number)?,
        store_id: parse_optional(params, "store_id", parse_number)?,
    })
}

fn parse_page(params: &HashMap<String, String>) -> RestResult<PageRequest> {
    let limit = parse_optional(params, "limit", parse_number::<i64>)?.unwrap_or(i64::from(DEFAULT_LIMIT));
    let page = parse_optional(params, "page", parse_number::<i64>)?.unwrap_or(i64::from(DEFAULT_PAGE));
    Ok(PageRequest::from_params(limit, page)?)
}

fn parse_since_id(params: &HashMap<String, String>) -> RestResult<u32> {
    Ok(parse_optional(params, "since_id", parse_number)?.unwrap_or(DEFAULT_SINCE_ID))
}

fn value<'p>(params: &'p HashMap<String, String>, key: &str) -> Option<&'p str> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn parse_optional<T>(
    params: &HashMap<String, String>,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> RestResult<Option<T>> {
    match value(params, key) {
        None => Ok(None),
        Some(raw) => parse(raw)
            .map(Some)
            .ok_or_else(|| RestError::invalid_param(key, format!("Invalid value: {raw}"))),
    }
}

fn parse_number<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

/// RFC 3339 timestamp, or a bare date at midnight UTC
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Comma-separated ids. Tokens that are not ids are skipped; no valid
/// id at all means no constraint.
fn parse_ids(raw: &str) -> Option<BTreeSet<u32>> {
    let ids: BTreeSet<u32> = raw
        .split(',')
        .filter_map(|token| token.trim().parse().ok())
        .collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderStatus, ShippingStatus};
    use chrono::TimeZone;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let parsed = ShipmentsParameters::parse(&HashMap::new()).unwrap();
        assert_eq!(parsed.page.page_index, 0);
        assert_eq!(parsed.page.page_size, DEFAULT_LIMIT);
        assert_eq!(parsed.since_id, 0);
        assert!(parsed.fields.is_empty());
    }

    #[test]
    fn test_page_and_limit() {
        let parsed = ShipmentsParameters::parse(&params(&[("limit", "10"), ("page", "3")])).unwrap();
        assert_eq!(parsed.page.page_index, 2);
        assert_eq!(parsed.page.page_size, 10);
    }

    #[test]
    fn test_out_of_bounds_limit() {
        let err = ShipmentsParameters::parse(&params(&[("limit", "251")])).unwrap_err();
        assert_eq!(err.key(), "limit");

        let err = ShipmentsParameters::parse(&params(&[("limit", "0")])).unwrap_err();
        assert_eq!(err.key(), "limit");

        let err = ShipmentsParameters::parse(&params(&[("page", "0")])).unwrap_err();
        assert_eq!(err.key(), "page");
    }

    #[test]
    fn test_non_numeric_values_are_rejected() {
        let err = ShipmentsParameters::parse(&params(&[("since_id", "abc")])).unwrap_err();
        assert_eq!(err.key(), "since_id");

        let err = OrdersParameters::parse(&params(&[("customer_id", "-1")])).unwrap_err();
        assert_eq!(err.key(), "customer_id");
    }

    #[test]
    fn test_blank_values_are_absent() {
        let parsed = OrdersParameters::parse(&params(&[("limit", " "), ("status", "")])).unwrap();
        assert_eq!(parsed.page.page_size, DEFAULT_LIMIT);
        assert_eq!(parsed.criteria.status, None);
    }

    #[test]
    fn test_criteria() {
        let parsed = OrdersParameters::parse(&params(&[
            ("ids", "3, 1,x,3"),
            ("status", "Processing"),
            ("shipping_status", "partially_shipped"),
            ("customer_id", "7"),
            ("created_at_min", "2024-01-01T00:00:00Z"),
            ("created_at_max", "2024-02-01"),
            ("fields", "id,order_status"),
        ]))
        .unwrap();

        let criteria = parsed.criteria;
        assert_eq!(criteria.ids, Some(BTreeSet::from([1, 3])));
        assert_eq!(criteria.status, Some(OrderStatus::Processing));
        assert_eq!(criteria.shipping_status, Some(ShippingStatus::PartiallyShipped));
        assert_eq!(criteria.customer_id, Some(7));
        assert_eq!(criteria.store_id, None);
        assert_eq!(
            criteria.created_at_min,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            criteria.created_at_max,
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
        );
        assert!(parsed.fields.contains("order_status"));
    }

    #[test]
    fn test_ids_without_valid_tokens() {
        let criteria = parse_criteria(&params(&[("ids", "a,b")])).unwrap();
        assert_eq!(criteria.ids, None);
    }

    #[test]
    fn test_unknown_status() {
        let err = parse_criteria(&params(&[("payment_status", "lost")])).unwrap_err();
        assert_eq!(err.key(), "payment_status");
    }
}
