//! Pagination
//!
//! Slices an ordered query into one page. Clients address pages 1-based;
//! everything below the HTTP boundary uses a zero-based page index.

mod api_list;
mod request;

pub use api_list::{ApiList, ToApiList};
pub use request::{PageRequest, PaginationError};

/// Smallest accepted page size
pub const MIN_LIMIT: u32 = 1;

/// Largest accepted page size
pub const MAX_LIMIT: u32 = 250;

/// Page size if not specified
pub const DEFAULT_LIMIT: u32 = 50;

/// First page, 1-based
pub const DEFAULT_PAGE: u32 = 1;

/// No cursor
pub const DEFAULT_SINCE_ID: u32 = 0;
