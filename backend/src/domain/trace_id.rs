//! Request-scoped trace identifier for correlation across logs and errors.
//!
//! `TraceId` is a domain primitive representing a correlation identifier that
//! follows a request through the system. The HTTP middleware attaches it to
//! each request and handlers receive it as an explicit argument; nothing is
//! looked up from ambient storage.
//!
//! Identifiers supplied by callers are reused verbatim when they are
//! non-empty, at most [`TRACE_ID_MAX_LEN`] characters long, and consist of
//! visible ASCII only. Anything else is replaced by a fresh UUIDv4.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

/// HTTP header carrying the trace identifier on requests and responses.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Maximum accepted length for a caller-supplied trace identifier.
pub const TRACE_ID_MAX_LEN: usize = 128;

/// Validation errors raised when parsing a caller-supplied trace identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceIdValidationError {
    /// The identifier is empty.
    #[error("trace identifier must not be empty")]
    Empty,
    /// The identifier exceeds [`TRACE_ID_MAX_LEN`].
    #[error("trace identifier must be at most {max} characters")]
    TooLong { max: usize },
    /// The identifier contains whitespace, control or non-ASCII characters.
    #[error("trace identifier may only contain visible ASCII characters")]
    InvalidCharacters,
}

/// Per-request trace identifier.
///
/// Cloning is cheap; the underlying string is shared.
///
/// # Examples
/// ```
/// use knowledge_backend::domain::TraceId;
///
/// let trace_id = TraceId::parse("req-42").expect("valid trace id");
/// assert_eq!(trace_id.as_str(), "req-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceId(Arc<str>);

impl TraceId {
    /// Generate a new random trace identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Construct a trace identifier from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(Arc::from(uuid.to_string()))
    }

    /// Validate a caller-supplied identifier.
    pub fn parse(raw: &str) -> Result<Self, TraceIdValidationError> {
        if raw.is_empty() {
            return Err(TraceIdValidationError::Empty);
        }
        if raw.len() > TRACE_ID_MAX_LEN {
            return Err(TraceIdValidationError::TooLong {
                max: TRACE_ID_MAX_LEN,
            });
        }
        if !raw.bytes().all(|byte| byte.is_ascii_graphic()) {
            return Err(TraceIdValidationError::InvalidCharacters);
        }
        Ok(Self(Arc::from(raw)))
    }

    /// Reuse `raw` when it is a usable identifier, otherwise generate one.
    #[must_use]
    pub fn from_header_or_generate(raw: Option<&str>) -> Self {
        raw.and_then(|value| Self::parse(value).ok())
            .unwrap_or_else(Self::generate)
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for TraceId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for TraceId {
    type Err = TraceIdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&TraceId> for String {
    fn from(value: &TraceId) -> Self {
        value.as_str().to_owned()
    }
}
