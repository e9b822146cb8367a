//! # Response Formatting
//!
//! Bodies are rendered by the field serializer and sent verbatim.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Pre-rendered JSON text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawJson(pub String);

impl RawJson {
    /// `{}`
    pub fn empty_object() -> Self {
        RawJson("{}".to_string())
    }
}

impl IntoResponse for RawJson {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            self.0,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type() {
        let response = RawJson::empty_object().into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
