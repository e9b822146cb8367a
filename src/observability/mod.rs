//! Observability
//!
//! - Structured JSON logging (`Logger`)
//! - Customer activity records for mutating API calls (`ActivityLog`)
//!
//! ```ignore
//! use commerce_api::observability::Logger;
//!
//! Logger::info("SHIPMENT_CREATED", &[("shipment_id", "12"), ("order_id", "3")]);
//! ```

mod activity;
mod logger;

pub use activity::{ActivityLog, ActivityRecord, LoggerActivityLog, MemoryActivityLog};
pub use logger::{Logger, Severity};
