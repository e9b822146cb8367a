//! Orders and their correlated rows

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identified;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Complete,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Complete,
        OrderStatus::Cancelled,
    ];

    /// Numeric code stored with the order
    pub fn code(&self) -> u16 {
        match self {
            OrderStatus::Pending => 10,
            OrderStatus::Processing => 20,
            OrderStatus::Complete => 30,
            OrderStatus::Cancelled => 40,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Complete => "complete",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Payment status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Authorized,
    Paid,
    PartiallyRefunded,
    Refunded,
    Voided,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 6] = [
        PaymentStatus::Pending,
        PaymentStatus::Authorized,
        PaymentStatus::Paid,
        PaymentStatus::PartiallyRefunded,
        PaymentStatus::Refunded,
        PaymentStatus::Voided,
    ];

    pub fn code(&self) -> u16 {
        match self {
            PaymentStatus::Pending => 10,
            PaymentStatus::Authorized => 20,
            PaymentStatus::Paid => 30,
            PaymentStatus::PartiallyRefunded => 35,
            PaymentStatus::Refunded => 40,
            PaymentStatus::Voided => 50,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Authorized => "authorized",
            PaymentStatus::Paid => "paid",
            PaymentStatus::PartiallyRefunded => "partially_refunded",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Voided => "voided",
        }
    }
}

/// Shipping status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingStatus {
    ShippingNotRequired,
    NotYetShipped,
    PartiallyShipped,
    Shipped,
    Delivered,
}

impl ShippingStatus {
    pub const ALL: [ShippingStatus; 5] = [
        ShippingStatus::ShippingNotRequired,
        ShippingStatus::NotYetShipped,
        ShippingStatus::PartiallyShipped,
        ShippingStatus::Shipped,
        ShippingStatus::Delivered,
    ];

    pub fn code(&self) -> u16 {
        match self {
            ShippingStatus::ShippingNotRequired => 10,
            ShippingStatus::NotYetShipped => 20,
            ShippingStatus::PartiallyShipped => 25,
            ShippingStatus::Shipped => 30,
            ShippingStatus::Delivered => 40,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingStatus::ShippingNotRequired => "shipping_not_required",
            ShippingStatus::NotYetShipped => "not_yet_shipped",
            ShippingStatus::PartiallyShipped => "partially_shipped",
            ShippingStatus::Shipped => "shipped",
            ShippingStatus::Delivered => "delivered",
        }
    }
}

/// Error returned when a status name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

/// Status names are matched case-insensitively; `PartiallyShipped` and
/// `partially_shipped` are the same status. A bare numeric code such as `25`
/// is accepted too.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn by_code<S: Copy>(s: &str, all: &[S], code: fn(&S) -> u16) -> Result<S, UnknownStatus> {
    let wanted = s.trim().parse::<u16>().ok();
    all.iter()
        .copied()
        .find(|status| Some(code(status)) == wanted)
        .ok_or_else(|| UnknownStatus(s.to_string()))
}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "complete" => Ok(OrderStatus::Complete),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => by_code(s, &OrderStatus::ALL, OrderStatus::code),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "authorized" => Ok(PaymentStatus::Authorized),
            "paid" => Ok(PaymentStatus::Paid),
            "partiallyrefunded" => Ok(PaymentStatus::PartiallyRefunded),
            "refunded" => Ok(PaymentStatus::Refunded),
            "voided" => Ok(PaymentStatus::Voided),
            _ => by_code(s, &PaymentStatus::ALL, PaymentStatus::code),
        }
    }
}

impl FromStr for ShippingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "shippingnotrequired" => Ok(ShippingStatus::ShippingNotRequired),
            "notyetshipped" => Ok(ShippingStatus::NotYetShipped),
            "partiallyshipped" => Ok(ShippingStatus::PartiallyShipped),
            "shipped" => Ok(ShippingStatus::Shipped),
            "delivered" => Ok(ShippingStatus::Delivered),
            _ => by_code(s, &ShippingStatus::ALL, ShippingStatus::code),
        }
    }
}

/// An order record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: u32,
    pub customer_id: u32,
    #[serde(default)]
    pub store_id: u32,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub shipping_status: ShippingStatus,
    pub created_on_utc: DateTime<Utc>,
    /// Soft-delete flag; deleted orders are invisible to the API
    #[serde(default)]
    pub deleted: bool,
}

impl Order {
    /// A pending, unpaid order placed now
    pub fn new(customer_id: u32, store_id: u32) -> Self {
        Self {
            id: 0,
            customer_id,
            store_id,
            order_status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            shipping_status: ShippingStatus::NotYetShipped,
            created_on_utc: Utc::now(),
            deleted: false,
        }
    }
}

impl Identified for Order {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// A purchased product line on an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub id: u32,
    pub order_id: u32,
    pub product_id: u32,
    #[serde(default)]
    pub quantity: i32,
}

impl Identified for OrderItem {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// Product to category mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    #[serde(default)]
    pub id: u32,
    pub product_id: u32,
    pub category_id: u32,
}

impl Identified for ProductCategory {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!("Pending".parse::<OrderStatus>().unwrap(), OrderStatus::Pending);
        assert_eq!(
            "partially_refunded".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::PartiallyRefunded
        );
        assert_eq!(
            "NotYetShipped".parse::<ShippingStatus>().unwrap(),
            ShippingStatus::NotYetShipped
        );
        assert!("lost".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(OrderStatus::Cancelled.code(), 40);
        assert_eq!(PaymentStatus::PartiallyRefunded.code(), 35);
        assert_eq!(ShippingStatus::PartiallyShipped.code(), 25);
    }

    #[test]
    fn test_status_parsing_accepts_codes() {
        assert_eq!("20".parse::<OrderStatus>().unwrap(), OrderStatus::Processing);
        assert_eq!(" 35 ".parse::<PaymentStatus>().unwrap(), PaymentStatus::PartiallyRefunded);
        assert_eq!("40".parse::<ShippingStatus>().unwrap(), ShippingStatus::Delivered);
        assert!("21".parse::<OrderStatus>().is_err());
        assert!("-10".parse::<PaymentStatus>().is_err());
    }

    #[test]
    fn test_status_wire_name_matches_as_str() {
        let json = serde_json::to_value(ShippingStatus::ShippingNotRequired).unwrap();
        assert_eq!(json, ShippingStatus::ShippingNotRequired.as_str());
    }
}
