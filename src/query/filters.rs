//! Order filter combinators
//!
//! Each combinator is the identity when its criterion is absent, so chains
//! can be written unconditionally and in any order. Criteria are independent
//! conjunctions.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::domain::{Order, OrderItem, OrderStatus, PaymentStatus, ProductCategory, ShippingStatus};

use super::ordered::OrderedQuery;

/// Null-tolerant predicates over an order query
pub trait OrderFilters<'a>: Sized {
    fn where_not_deleted(self) -> Self;
    fn where_customer_id(self, customer_id: Option<u32>) -> Self;
    fn where_store_id(self, store_id: Option<u32>) -> Self;
    fn where_order_id_in(self, ids: Option<BTreeSet<u32>>) -> Self;
    fn where_order_status(self, status: Option<OrderStatus>) -> Self;
    fn where_payment_status(self, status: Option<PaymentStatus>) -> Self;
    fn where_shipping_status(self, status: Option<ShippingStatus>) -> Self;

    /// Orders created strictly after the bound
    fn where_created_at_min(self, min: Option<DateTime<Utc>>) -> Self;

    /// Orders created strictly before the bound
    fn where_created_at_max(self, max: Option<DateTime<Utc>>) -> Self;

    /// Orders having at least one item for the product
    fn where_has_product_id(
        self,
        product_id: Option<u32>,
        order_items: OrderedQuery<'a, OrderItem>,
    ) -> Self;

    /// Orders having at least one item whose product is in the category
    fn where_has_category_id(
        self,
        category_id: Option<u32>,
        order_items: OrderedQuery<'a, OrderItem>,
        product_categories: OrderedQuery<'a, ProductCategory>,
    ) -> Self;
}

impl<'a> OrderFilters<'a> for OrderedQuery<'a, Order> {
    fn where_not_deleted(self) -> Self {
        self.filter(|order| !order.deleted)
    }

    fn where_customer_id(self, customer_id: Option<u32>) -> Self {
        match customer_id {
            None => self,
            Some(id) => self.filter(move |order| order.customer_id == id),
        }
    }

    fn where_store_id(self, store_id: Option<u32>) -> Self {
        match store_id {
            None => self,
            Some(id) => self.filter(move |order| order.store_id == id),
        }
    }

    fn where_order_id_in(self, ids: Option<BTreeSet<u32>>) -> Self {
        match ids {
            None => self,
            Some(ids) => self.filter(move |order| ids.contains(&order.id)),
        }
    }

    fn where_order_status(self, status: Option<OrderStatus>) -> Self {
        match status {
            None => self,
            Some(status) => self.filter(move |order| order.order_status == status),
        }
    }

    fn where_payment_status(self, status: Option<PaymentStatus>) -> Self {
        match status {
            None => self,
            Some(status) => self.filter(move |order| order.payment_status == status),
        }
    }

    fn where_shipping_status(self, status: Option<ShippingStatus>) -> Self {
        match status {
            None => self,
            Some(status) => self.filter(move |order| order.shipping_status == status),
        }
    }

    fn where_created_at_min(self, min: Option<DateTime<Utc>>) -> Self {
        match min {
            None => self,
            Some(min) => self.filter(move |order| order.created_on_utc > min),
        }
    }

    fn where_created_at_max(self, max: Option<DateTime<Utc>>) -> Self {
        match max {
            None => self,
            Some(max) => self.filter(move |order| order.created_on_utc < max),
        }
    }

    fn where_has_product_id(
        self,
        product_id: Option<u32>,
        order_items: OrderedQuery<'a, OrderItem>,
    ) -> Self {
        match product_id {
            None => self,
            Some(product_id) => {
                let items = order_items.filter(move |item| item.product_id == product_id);
                self.join(items, |order, item| order.id == item.order_id)
            }
        }
    }

    fn where_has_category_id(
        self,
        category_id: Option<u32>,
        order_items: OrderedQuery<'a, OrderItem>,
        product_categories: OrderedQuery<'a, ProductCategory>,
    ) -> Self {
        match category_id {
            None => self,
            Some(category_id) => {
                let categorized = product_categories
                    .filter(move |mapping| mapping.category_id == category_id);
                let items =
                    order_items.join(categorized, |item, mapping| item.product_id == mapping.product_id);
                self.join(items, |order, item| order.id == item.order_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order(id: u32, customer_id: u32, store_id: u32) -> Order {
        Order {
            id,
            customer_id,
            store_id,
            order_status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            shipping_status: ShippingStatus::NotYetShipped,
            created_on_utc: Utc.with_ymd_and_hms(2024, 1, id, 12, 0, 0).unwrap(),
            deleted: false,
        }
    }

    fn orders() -> Vec<Order> {
        let mut orders = vec![order(1, 7, 1), order(2, 8, 1), order(3, 7, 2), order(4, 9, 2)];
        orders[1].order_status = OrderStatus::Complete;
        orders[1].payment_status = PaymentStatus::Paid;
        orders[2].shipping_status = ShippingStatus::Shipped;
        orders[3].deleted = true;
        orders
    }

    fn ids(query: OrderedQuery<'_, Order>) -> Vec<u32> {
        query.map(|o| o.id).collect()
    }

    fn item(id: u32, order_id: u32, product_id: u32) -> OrderItem {
        OrderItem {
            id,
            order_id,
            product_id,
            quantity: 1,
        }
    }

    #[test]
    fn test_absent_criteria_are_identity() {
        let query = OrderedQuery::from_vec(orders())
            .where_customer_id(None)
            .where_store_id(None)
            .where_order_id_in(None)
            .where_order_status(None)
            .where_payment_status(None)
            .where_shipping_status(None)
            .where_created_at_min(None)
            .where_created_at_max(None)
            .where_has_product_id(None, OrderedQuery::empty())
            .where_has_category_id(None, OrderedQuery::empty(), OrderedQuery::empty());

        assert_eq!(ids(query), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_scalar_criteria() {
        let by_customer = OrderedQuery::from_vec(orders()).where_customer_id(Some(7));
        assert_eq!(ids(by_customer), vec![1, 3]);

        let by_store = OrderedQuery::from_vec(orders()).where_store_id(Some(2));
        assert_eq!(ids(by_store), vec![3, 4]);

        let by_status = OrderedQuery::from_vec(orders()).where_order_status(Some(OrderStatus::Complete));
        assert_eq!(ids(by_status), vec![2]);

        let by_payment = OrderedQuery::from_vec(orders()).where_payment_status(Some(PaymentStatus::Paid));
        assert_eq!(ids(by_payment), vec![2]);

        let by_shipping =
            OrderedQuery::from_vec(orders()).where_shipping_status(Some(ShippingStatus::Shipped));
        assert_eq!(ids(by_shipping), vec![3]);

        let by_ids = OrderedQuery::from_vec(orders()).where_order_id_in(Some(BTreeSet::from([2, 4, 99])));
        assert_eq!(ids(by_ids), vec![2, 4]);

        let live = OrderedQuery::from_vec(orders()).where_not_deleted();
        assert_eq!(ids(live), vec![1, 2, 3]);
    }

    #[test]
    fn test_created_at_bounds_are_exclusive() {
        let day2 = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();

        let after = OrderedQuery::from_vec(orders()).where_created_at_min(Some(day2));
        assert_eq!(ids(after), vec![3, 4]);

        let before = OrderedQuery::from_vec(orders()).where_created_at_max(Some(day2));
        assert_eq!(ids(before), vec![1]);
    }

    #[test]
    fn test_combinators_commute() {
        let a = OrderedQuery::from_vec(orders())
            .where_customer_id(Some(7))
            .where_store_id(Some(2));
        let b = OrderedQuery::from_vec(orders())
            .where_store_id(Some(2))
            .where_customer_id(Some(7));
        assert_eq!(ids(a), ids(b));
    }

    #[test]
    fn test_has_product_id_join() {
        let items = vec![item(1, 1, 100), item(2, 1, 100), item(3, 3, 100), item(4, 2, 200)];

        let query = OrderedQuery::from_vec(orders())
            .where_has_product_id(Some(100), OrderedQuery::from_vec(items))
            .distinct_by_id()
            .order_by_id();

        assert_eq!(ids(query), vec![1, 3]);
    }

    #[test]
    fn test_has_category_id_join() {
        let items = vec![item(1, 1, 100), item(2, 2, 200), item(3, 3, 300)];
        let categories = vec![
            ProductCategory { id: 1, product_id: 100, category_id: 5 },
            ProductCategory { id: 2, product_id: 300, category_id: 5 },
            ProductCategory { id: 3, product_id: 200, category_id: 6 },
        ];

        let query = OrderedQuery::from_vec(orders())
            .where_has_category_id(
                Some(5),
                OrderedQuery::from_vec(items),
                OrderedQuery::from_vec(categories),
            )
            .distinct_by_id()
            .order_by_id();

        assert_eq!(ids(query), vec![1, 3]);
    }
}
