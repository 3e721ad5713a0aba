//! Error response body (RFC 7807 problem details).

use serde::{Deserialize, Serialize};

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
        }
    }

    pub fn with_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = error_type.into();
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn invalid_post(detail: impl Into<String>) -> Self {
        Self::new(400, "Invalid Post")
            .with_type("/problems/invalid-post")
            .with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    /// The request body was not valid JSON for the expected shape.
    pub fn malformed_body(detail: impl Into<String>) -> Self {
        Self::new(500, "Malformed Request Body")
            .with_type("/problems/malformed-body")
            .with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_type_field_and_skips_empty_detail() {
        let json = serde_json::to_value(ErrorResponse::internal_error()).unwrap();
        assert_eq!(json["type"], "about:blank");
        assert_eq!(json["status"], 500);
        assert!(json.get("detail").is_none());
    }

    #[test]
    fn invalid_post_is_a_bad_request() {
        let err = ErrorResponse::invalid_post("tags must not be empty");
        assert_eq!(err.status, 400);
        assert_eq!(err.error_type, "/problems/invalid-post");
        assert_eq!(err.detail.as_deref(), Some("tags must not be empty"));
    }
}
