//! Response envelopes

use serde::Serialize;

/// A named envelope holding one representation or a list of them under a
/// single well-known key, e.g. `{"shipments": [...]}`.
pub trait RootObject: Serialize {
    /// Key under which the representations live
    fn primary_property_name(&self) -> &'static str;

    /// Declared wire names of the nested representation
    fn primary_field_names(&self) -> &'static [&'static str];
}
