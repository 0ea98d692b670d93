//! Typed response envelope and pagination metadata.
//!
//! The remote API wraps every payload in a top-level `data` field, either a
//! single object or an array, with list endpoints adding a `pagination`
//! object. [`Envelope::decode`] performs that structural mapping explicitly
//! and fails loudly with [`Error::Decode`](crate::Error::Decode) on a shape
//! mismatch, never producing a partially populated struct.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::http::RawResponse;
use crate::util::truncate_for_log;

/// Pagination metadata reported by list endpoints.
///
/// Decoded verbatim from the `pagination` object; the server may omit any
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed).
    pub current_page: Option<u32>,
    /// Number of items per page.
    pub per_page: Option<u32>,
    /// Total number of items across all pages.
    pub total_entries: Option<u64>,
    /// Total number of pages.
    pub total_pages: Option<u32>,
}

/// Wire shape of a decoded response document.
#[derive(Deserialize)]
struct Document<T> {
    data: T,
    pagination: Option<Pagination>,
}

/// A decoded wrapper around a raw HTTP response.
///
/// Exposes the typed payload plus pagination metadata, along with the raw
/// status and headers. `T` is a single resource struct for object endpoints
/// or `Vec<_>` for list endpoints (server order is preserved, never
/// re-sorted).
#[derive(Debug)]
pub struct Envelope<T> {
    /// HTTP status code of the underlying response.
    pub status: u16,
    /// Response headers in server order.
    pub headers: Vec<(String, String)>,
    /// Decoded payload; `None` for endpoints that return no body.
    pub data: Option<T>,
    /// Pagination metadata, present on list endpoints that report it.
    pub pagination: Option<Pagination>,
}

impl Envelope<()> {
    /// Envelope for delete-style endpoints that return an empty body.
    ///
    /// The body is not inspected, so an empty response is never a decode
    /// error.
    pub(crate) fn empty(raw: RawResponse) -> Self {
        Self {
            status: raw.status,
            headers: raw.headers,
            data: None,
            pagination: None,
        }
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode the `{"data": ..., "pagination": ...}` document into `T`.
    ///
    /// Unknown JSON fields are ignored and missing optional fields become
    /// `None`; a type mismatch between a JSON value and the expected field is
    /// a decode failure.
    pub(crate) fn decode(raw: RawResponse) -> Result<Self> {
        let document: Document<T> = serde_json::from_str(&raw.body).map_err(|e| {
            log::error!("JSON decode failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(&raw.body));
            Error::decode(e)
        })?;

        Ok(Self {
            status: raw.status,
            headers: raw.headers,
            data: Some(document.data),
            pagination: document.pagination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Zone;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    // ---- Single object ----

    #[test]
    fn decodes_single_object() {
        let body = r#"{"data":{"id":1,"account_id":1010,"name":"example.com","reverse":false}}"#;
        let envelope = Envelope::<Zone>::decode(raw(200, body)).expect("decode");
        let zone = envelope.data.expect("data");
        assert_eq!(zone.id, 1);
        assert_eq!(zone.account_id, Some(1010));
        assert_eq!(zone.name, "example.com");
        assert_eq!(zone.reverse, Some(false));
        assert!(envelope.pagination.is_none());
    }

    #[test]
    fn absent_optional_fields_decode_to_none() {
        let body = r#"{"data":{"id":1,"name":"example.com"}}"#;
        let envelope = Envelope::<Zone>::decode(raw(200, body)).expect("decode");
        let zone = envelope.data.expect("data");
        assert_eq!(zone.account_id, None);
        assert_eq!(zone.created_at, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = r#"{"data":{"id":1,"name":"example.com","brand_new_field":true}}"#;
        assert!(Envelope::<Zone>::decode(raw(200, body)).is_ok());
    }

    // ---- Lists and pagination ----

    #[test]
    fn decodes_list_in_server_order() {
        let body = r#"{"data":[{"id":2,"name":"b.com"},{"id":1,"name":"a.com"}]}"#;
        let envelope = Envelope::<Vec<Zone>>::decode(raw(200, body)).expect("decode");
        let zones = envelope.data.expect("data");
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].id, 2);
        assert_eq!(zones[1].id, 1);
    }

    #[test]
    fn pagination_decoded_verbatim() {
        let body = r#"{"data":[],"pagination":{"current_page":2,"per_page":30,"total_entries":61,"total_pages":3}}"#;
        let envelope = Envelope::<Vec<Zone>>::decode(raw(200, body)).expect("decode");
        assert_eq!(
            envelope.pagination,
            Some(Pagination {
                current_page: Some(2),
                per_page: Some(30),
                total_entries: Some(61),
                total_pages: Some(3),
            })
        );
    }

    #[test]
    fn partial_pagination_fields_allowed() {
        let body = r#"{"data":[],"pagination":{"total_entries":1}}"#;
        let envelope = Envelope::<Vec<Zone>>::decode(raw(200, body)).expect("decode");
        let pagination = envelope.pagination.expect("pagination");
        assert_eq!(pagination.total_entries, Some(1));
        assert_eq!(pagination.current_page, None);
    }

    // ---- Failures ----

    #[test]
    fn missing_data_field_is_decode_error() {
        let result = Envelope::<Zone>::decode(raw(200, r#"{"zone":{"id":1}}"#));
        assert!(matches!(result, Err(crate::Error::Decode { .. })));
    }

    #[test]
    fn type_mismatch_is_decode_error() {
        let body = r#"{"data":{"id":"not-a-number","name":"example.com"}}"#;
        let result = Envelope::<Zone>::decode(raw(200, body));
        assert!(matches!(result, Err(crate::Error::Decode { .. })));
    }

    // ---- Empty envelopes ----

    #[test]
    fn empty_body_produces_payloadless_envelope() {
        let envelope = Envelope::empty(raw(204, ""));
        assert_eq!(envelope.status, 204);
        assert!(envelope.data.is_none());
        assert!(envelope.pagination.is_none());
    }
}
