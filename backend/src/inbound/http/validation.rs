//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every rejection produced here is an [`Error::invalid_request`] carrying a
//! `details` object with the offending `field` and a stable `code`, so clients
//! can tell validation failures apart from server errors.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpMessage, HttpRequest, web};
use serde_json::json;

use crate::domain::{Error, TraceId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyField,
    MissingHeader,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyField => "empty_field",
            ErrorCode::MissingHeader => "missing_header",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field and header names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {name}"),
    )
}

pub(crate) fn empty_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::EmptyField,
        format!("{name} must not be empty"),
    )
}

pub(crate) fn missing_header_error(header: FieldName) -> Error {
    let name = header.as_str();
    field_error(
        header,
        ErrorCode::MissingHeader,
        format!("missing required header: {name}"),
    )
}

/// Require an optional body field to be present and at least one character
/// long. Whitespace counts as content.

pub(crate) fn require_text(value: Option<String>, field: FieldName) -> Result<String, Error> {
    match value {
        None => Err(missing_field_error(field)),
        Some(text) if text.is_empty() => Err(empty_field_error(field)),
        Some(text) => Ok(text),
    }
}

/// Trace identifier assigned to `req` by the trace middleware, if any.
pub(crate) fn request_trace_id(req: &HttpRequest) -> Option<TraceId> {
    req.extensions().get::<TraceId>().cloned()
}

fn json_payload_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let error = Error::invalid_request("request body is not valid JSON for this endpoint")
        .with_details(json!({
            "field": "body",
            "code": ErrorCode::InvalidBody.as_str(),
            "reason": err.to_string(),
        }));
    match request_trace_id(req) {
        Some(trace_id) => super::error::traced(error, &trace_id).into(),
        None => error.into(),
    }
}

/// JSON extractor configuration reporting malformed bodies as validation
/// errors instead of Actix's plain-text 400 responses.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_payload_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const NAME: FieldName = FieldName::new("name");

    #[rstest]
    #[case(" My Group ")]
    #[case("   ")]
    fn require_text_keeps_value_verbatim(#[case] raw: &str) {
        let value = require_text(Some(raw.to_owned()), NAME).expect("valid text");
        assert_eq!(value, raw);
    }

    #[rstest]
    #[case(None, "missing_field", "missing required field: name")]
    #[case(Some(""), "empty_field", "name must not be empty")]
    fn require_text_rejects_absent_or_empty(
        #[case] value: Option<&str>,
        #[case] code: &str,
        #[case] message: &str,
    ) {
        let error = require_text(value.map(str::to_owned), NAME).expect_err("rejected");
        assert_eq!(error.message(), message);
        assert_eq!(
            error.details(),
            Some(&json!({ "field": "name", "code": code }))
        );
    }

    #[rstest]
    fn missing_header_error_names_the_header() {
        let missing = missing_header_error(FieldName::new("user-id"));
        assert_eq!(missing.message(), "missing required header: user-id");
        assert_eq!(
            missing.details(),
            Some(&json!({ "field": "user-id", "code": "missing_header" }))
        );
    }
}
