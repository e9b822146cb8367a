//! commerce_api - orders and shipments over a REST API
//!
//! The reusable core is four mechanisms:
//! - `query`: lazy, null-tolerant filter composition over ordered records
//! - `pagination`: page slicing and cursor bounds
//! - `delta`: partial updates that apply only the fields a client sent
//! - `serializer`: root-wrapped JSON pruned to requested fields
//!
//! `domain`, `dto` and `services` describe the records and their storage;
//! `rest_api`, `http_server` and `cli` expose them.

pub mod cli;
pub mod delta;
pub mod domain;
pub mod dto;
pub mod http_server;
pub mod observability;
pub mod pagination;
pub mod query;
pub mod rest_api;
pub mod serializer;
pub mod services;
