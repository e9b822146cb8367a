//! Response serialization
//!
//! Every response body is a root envelope rendered to text here and returned
//! to the client as-is. Clients may narrow the nested representations with a
//! `fields` list; the envelope key itself is never pruned.

mod fields;
mod root;
mod selection;

pub use fields::{JsonFieldsSerializer, SerializerError, SerializerResult};
pub use root::RootObject;
pub use selection::FieldSelection;
