//! Delta parse errors
//!
//! Every variant is raised while parsing, before a target is touched.

use thiserror::Error;

/// Result type for delta parsing
pub type DeltaResult<T> = Result<T, DeltaError>;

/// Inbound payload validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeltaError {
    /// Payload is not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Payload is JSON but not an object
    #[error("Payload must be a JSON object")]
    NotAnObject,

    /// Root-wrapped payload without its root key
    #[error("Missing root property: {0}")]
    MissingRoot(&'static str),

    /// Root key holds something other than an object
    #[error("Root property {0} must be a JSON object")]
    RootNotAnObject(&'static str),

    /// A declared field has a value of the wrong type
    #[error("Invalid value for {field}: {message}")]
    InvalidField { field: String, message: String },
}

impl DeltaError {
    /// Error key reported to the client
    pub fn key(&self) -> &str {
        match self {
            DeltaError::InvalidJson(_) | DeltaError::NotAnObject => "json",
            DeltaError::MissingRoot(_) | DeltaError::RootNotAnObject(_) => "root_property",
            DeltaError::InvalidField { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(DeltaError::NotAnObject.key(), "json");
        assert_eq!(DeltaError::MissingRoot("shipment").key(), "root_property");
        let err = DeltaError::InvalidField {
            field: "weight".to_string(),
            message: "expected f64".to_string(),
        };
        assert_eq!(err.key(), "weight");
        assert_eq!(err.to_string(), "Invalid value for weight: expected f64");
    }
}
