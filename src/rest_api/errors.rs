//! # REST API Errors
//!
//! Every failure is rendered as `{"errors": {"<key>": ["<message>"]}}`.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::delta::DeltaError;
use crate::observability::Logger;
use crate::pagination::PaginationError;
use crate::serializer::SerializerError;
use crate::services::RepositoryError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestError {
    /// Malformed query string or route parameter
    #[error("{key}: {message}")]
    InvalidParam { key: String, message: String },

    /// Request body failed validation
    #[error("{key}: {message}")]
    Validation { key: String, message: String },

    /// Referenced record does not exist
    #[error("{key}: not found")]
    NotFound { key: &'static str },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    pub fn invalid_param(key: impl Into<String>, message: impl Into<String>) -> Self {
        RestError::InvalidParam {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn not_found(key: &'static str) -> Self {
        RestError::NotFound { key }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidParam { .. } => StatusCode::BAD_REQUEST,
            RestError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Key under `errors` in the response body
    pub fn key(&self) -> &str {
        match self {
            RestError::InvalidParam { key, .. } | RestError::Validation { key, .. } => key,
            RestError::NotFound { key } => key,
            RestError::Internal(_) => "internal",
        }
    }

    fn message(&self) -> String {
        match self {
            RestError::InvalidParam { message, .. } | RestError::Validation { message, .. } => {
                message.clone()
            }
            RestError::NotFound { .. } => "not found".to_string(),
            RestError::Internal(message) => message.clone(),
        }
    }
}

impl From<DeltaError> for RestError {
    fn from(err: DeltaError) -> Self {
        RestError::Validation {
            key: err.key().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<PaginationError> for RestError {
    fn from(err: PaginationError) -> Self {
        RestError::invalid_param(err.param(), err.to_string())
    }
}

impl From<RepositoryError> for RestError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => RestError::not_found("shipment"),
            RepositoryError::IdsExhausted => RestError::Internal(err.to_string()),
        }
    }
}

impl From<SerializerError> for RestError {
    fn from(err: SerializerError) -> Self {
        RestError::Internal(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorsRootObject {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl From<&RestError> for ErrorsRootObject {
    fn from(err: &RestError) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(err.key().to_string(), vec![err.message()]);
        Self { errors }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = status.as_u16().to_string();
        let fields = [("key", self.key()), ("status", code.as_str())];
        if status.is_server_error() {
            Logger::error("REQUEST_FAILED", &fields);
        } else {
            Logger::warn("REQUEST_REJECTED", &fields);
        }

        let body = Json(ErrorsRootObject::from(&self));
        (status, body).into_response()
    }
}
