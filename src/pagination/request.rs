//! Page bound validation
//!
//! Bounds are checked at the HTTP boundary, before a query is materialized.

use thiserror::Error;

use super::{DEFAULT_PAGE, MAX_LIMIT, MIN_LIMIT};

/// Page parameter errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Limit outside `[MIN_LIMIT, MAX_LIMIT]`
    #[error("Invalid limit parameter")]
    InvalidLimit(i64),

    /// Page below the first page
    #[error("Invalid request parameters")]
    InvalidPage(i64),
}

impl PaginationError {
    /// Name of the offending request parameter
    pub fn param(&self) -> &'static str {
        match self {
            PaginationError::InvalidLimit(_) => "limit",
            PaginationError::InvalidPage(_) => "page",
        }
    }
}

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index (requested page minus one)
    pub page_index: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Validates a 1-based page and a limit as received from a client
    pub fn from_params(limit: i64, page: i64) -> Result<Self, PaginationError> {
        if limit < i64::from(MIN_LIMIT) || limit > i64::from(MAX_LIMIT) {
            return Err(PaginationError::InvalidLimit(limit));
        }
        if page < i64::from(DEFAULT_PAGE) {
            return Err(PaginationError::InvalidPage(page));
        }

        let page_index =
            u32::try_from(page - 1).map_err(|_| PaginationError::InvalidPage(page))?;

        Ok(Self {
            page_index,
            // bounded by MAX_LIMIT above
            page_size: limit as u32,
        })
    }
}
