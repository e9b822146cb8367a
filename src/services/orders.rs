//! Order queries

use std::sync::Arc;

use crate::domain::{Order, OrderItem, ProductCategory};
use crate::pagination::{ApiList, PageRequest, ToApiList};
use crate::query::{OrderCriteria, OrderFilters, OrderedQuery};

use super::repository::Repository;

/// Read-side order operations used by the controllers
#[derive(Clone)]
pub struct OrderApiService {
    orders: Arc<dyn Repository<Order>>,
    order_items: Arc<dyn Repository<OrderItem>>,
    product_categories: Arc<dyn Repository<ProductCategory>>,
}

impl OrderApiService {
    pub fn new(
        orders: Arc<dyn Repository<Order>>,
        order_items: Arc<dyn Repository<OrderItem>>,
        product_categories: Arc<dyn Repository<ProductCategory>>,
    ) -> Self {
        Self {
            orders,
            order_items,
            product_categories,
        }
    }

    /// One page of live orders matching `criteria`, after the cursor
    pub fn get_orders(&self, criteria: OrderCriteria, page: PageRequest, since_id: u32) -> ApiList<Order> {
        let query = self.orders_query(criteria).since_id(since_id);
        ApiList::new(query, page.page_index, page.page_size)
    }

    /// Number of live orders matching `criteria`. The id set is not applied.
    pub fn get_orders_count(&self, criteria: OrderCriteria) -> usize {
        self.orders_query(criteria.without_ids()).count()
    }

    pub fn get_order_by_id(&self, order_id: u32) -> Option<Order> {
        self.orders.get(order_id).filter(|order| !order.deleted)
    }

    pub fn get_orders_by_customer_id(&self, customer_id: u32) -> ApiList<Order> {
        self.orders
            .table()
            .where_not_deleted()
            .where_customer_id(Some(customer_id))
            .order_by_id()
            .to_api_list()
    }

    /// Live orders with at least one line for `product_id`
    pub fn get_orders_for_product_id(&self, product_id: u32, criteria: OrderCriteria) -> ApiList<Order> {
        criteria
            .apply(self.orders.table().where_not_deleted())
            .where_has_product_id(Some(product_id), self.order_items.table())
            .distinct_by_id()
            .order_by_id()
            .to_api_list()
    }

    /// Live orders with at least one line whose product is in `category_id`
    pub fn get_orders_for_category_id(&self, category_id: u32, criteria: OrderCriteria) -> ApiList<Order> {
        criteria
            .apply(self.orders.table().where_not_deleted())
            .where_has_category_id(
                Some(category_id),
                self.order_items.table(),
                self.product_categories.table(),
            )
            .distinct_by_id()
            .order_by_id()
            .to_api_list()
    }

    fn orders_query(&self, criteria: OrderCriteria) -> OrderedQuery<'static, Order> {
        criteria
            .apply(self.orders.table().where_not_deleted())
            .distinct_by_id()
            .order_by_id()
    }
}
