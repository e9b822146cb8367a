//! Request-scoped order criteria

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::domain::{Order, OrderStatus, PaymentStatus, ShippingStatus};

use super::filters::OrderFilters;
use super::ordered::OrderedQuery;

/// Optional order criteria. `None` means no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderCriteria {
    pub ids: Option<BTreeSet<u32>>,
    pub created_at_min: Option<DateTime<Utc>>,
    pub created_at_max: Option<DateTime<Utc>>,
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub shipping_status: Option<ShippingStatus>,
    pub customer_id: Option<u32>,
    pub store_id: Option<u32>,
}

impl OrderCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer(mut self, customer_id: u32) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn store(mut self, store_id: u32) -> Self {
        self.store_id = Some(store_id);
        self
    }

    /// Runs every scalar combinator over the query
    pub fn apply<'a>(self, query: OrderedQuery<'a, Order>) -> OrderedQuery<'a, Order> {
        query
            .where_customer_id(self.customer_id)
            .where_order_id_in(self.ids)
            .where_payment_status(self.payment_status)
            .where_shipping_status(self.shipping_status)
            .where_created_at_min(self.created_at_min)
            .where_created_at_max(self.created_at_max)
            .where_order_status(self.status)
            .where_store_id(self.store_id)
    }

    /// The same criteria without the id set.
    ///
    /// The count endpoint ignores ids.
    pub fn without_ids(mut self) -> Self {
        self.ids = None;
        self
    }
}
