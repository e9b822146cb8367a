//! Partial updates
//!
//! PATCH-like semantics over full transport types: a payload is parsed into
//! a value plus the set of keys it really contained, and only those keys are
//! copied onto the target.
//!
//! # Flow
//!
//! 1. `Delta::parse` / `Delta::parse_rooted` validate the payload and record
//!    field presence. Any failure happens here.
//! 2. The handler snapshots fields that must survive the merge.
//! 3. `Delta::merge` copies present fields through the type's `Mergeable`
//!    table.
//! 4. The handler restores the snapshot and persists the target.

mod delta;
mod errors;
mod presence;
mod schema;

pub use delta::Delta;
pub use errors::{DeltaError, DeltaResult};
pub use presence::FieldPresenceSet;
pub use schema::{FieldCopy, Mergeable, WireSchema};
