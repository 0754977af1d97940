//! Extractor for the trusted `user-id` owner header.
//!
//! No authentication happens here: the header value is taken verbatim as the
//! owner identity, empty values included. Only a missing header is rejected.
//! Bytes outside ASCII are decoded as ISO-8859-1.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::domain::{Error, Owner};
use crate::inbound::http::error::traced;
use crate::inbound::http::validation::{FieldName, missing_header_error, request_trace_id};

/// Name of the header carrying the caller's identity.
pub const USER_ID_HEADER: &str = "user-id";

const USER_ID: FieldName = FieldName::new(USER_ID_HEADER);

/// Owner identity resolved from the `user-id` header.
///
/// # Examples
/// ```
/// use actix_web::{FromRequest, test};
/// use knowledge_backend::inbound::http::owner::OwnerHeader;
///
/// # actix_web::rt::System::new().block_on(async {
/// let req = test::TestRequest::default()
///     .insert_header(("user-id", "user-123"))
///     .to_http_request();
/// let owner = OwnerHeader::extract(&req).await.expect("header present");
/// assert_eq!(owner.into_inner().as_str(), "user-123");
/// # });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerHeader(Owner);

impl OwnerHeader {
    /// Unwrap the owner.
    pub fn into_inner(self) -> Owner {
        self.0
    }
}

fn owner_from_request(req: &HttpRequest) -> Result<Owner, Error> {
    let value = req
        .headers()
        .get(USER_ID_HEADER)
        .ok_or_else(|| missing_header_error(USER_ID))?;
    let text: String = value.as_bytes().iter().copied().map(char::from).collect();
    Ok(Owner::new(text))
}

impl FromRequest for OwnerHeader {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = owner_from_request(req).map(OwnerHeader).map_err(|error| {
            match request_trace_id(req) {
                Some(trace_id) => traced(error, &trace_id),
                None => error,
            }
        });
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use actix_web::http::header::HeaderValue;
    use actix_web::test::TestRequest;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[actix_web::test]
    async fn extracts_header_verbatim() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, " user-123 "))
            .to_http_request();
        let owner = OwnerHeader::extract(&req).await.expect("owner present");
        assert_eq!(owner.into_inner().as_str(), " user-123 ");
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_header_is_a_validation_error() {
        let req = TestRequest::default().to_http_request();
        let error = OwnerHeader::extract(&req).await.expect_err("rejected");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            error.details(),
            Some(&json!({ "field": "user-id", "code": "missing_header" }))
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[actix_web::test]
    async fn blank_header_is_taken_as_is(#[case] raw: &str) {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, raw))
            .to_http_request();
        let owner = OwnerHeader::extract(&req).await.expect("owner present");
        assert_eq!(owner.into_inner().as_str(), raw);
    }

    #[rstest]
    #[actix_web::test]
    async fn non_ascii_header_is_decoded_as_latin1() {
        let value = HeaderValue::from_bytes(b"caf\xe9").expect("opaque header bytes");
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, value))
            .to_http_request();
        let owner = OwnerHeader::extract(&req).await.expect("owner present");
        assert_eq!(owner.into_inner().as_str(), "caf\u{e9}");
    }
}
