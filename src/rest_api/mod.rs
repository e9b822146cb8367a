//! # REST API Module
//!
//! Controllers for orders and shipments. Handlers validate parameters,
//! call the services, and answer with serializer output or a
//! `{"errors": {...}}` body.

pub mod errors;
pub mod orders;
pub mod parser;
pub mod response;
pub mod shipments;
pub mod state;

pub use errors::{ErrorsRootObject, RestError, RestResult};
pub use parser::{OrdersParameters, ShipmentsParameters};
pub use response::RawJson;
pub use state::ApiState;
