//! Wire schemas and field copy tables

/// Declared wire shape of a transport type
pub trait WireSchema {
    /// Singular root key used when the payload is wrapped, e.g. `shipment`
    const ROOT_NAME: &'static str;

    /// Every declared wire name, in declaration order
    const FIELD_NAMES: &'static [&'static str];
}

/// Copies one field from a parsed value onto a target
pub struct FieldCopy<S, T> {
    /// Wire name the entry is keyed by
    pub name: &'static str,
    pub copy: fn(&S, &mut T),
}

/// Explicit field-by-field merge table from `Self` onto `Target`.
///
/// Only names listed here can ever be written by a merge. Fields that must
/// never change through a merge (creation timestamps, identities) are either
/// left out of the table or restored by the caller.
pub trait Mergeable<Target: 'static>: WireSchema + Sized + 'static {
    const FIELDS: &'static [FieldCopy<Self, Target>];
}
