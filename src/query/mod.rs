//! Query composition
//!
//! Builds predicates over lazily evaluated, id-ordered record sequences.
//!
//! # Composition order
//!
//! 1. Start from a repository table
//! 2. Apply criteria combinators (absent criteria are no-ops)
//! 3. Apply joins against secondary sources, if any
//! 4. `distinct_by_id` + `order_by_id` for a stable, duplicate-free order
//! 5. Cursor (`since_id`)
//! 6. Hand the query to `pagination::ApiList`
//!
//! Nothing here performs I/O or fails; an unmatched criterion is an empty
//! result, not an error.

mod criteria;
mod filters;
mod ordered;

pub use criteria::OrderCriteria;
pub use filters::OrderFilters;
pub use ordered::OrderedQuery;
