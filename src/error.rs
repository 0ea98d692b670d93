//! Error taxonomy keyed by HTTP status code.
//!
//! The remote API reports failures as a JSON body with a `message` field and,
//! for validation failures, an `errors` map of field name to messages. Every
//! non-2xx status maps to exactly one [`Error`] variant; 400 and 404 get
//! dedicated variants because callers routinely distinguish "fix your input"
//! and "that identifier does not exist" from everything else.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Convenience type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body shape returned by the remote API.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<HashMap<String, Vec<String>>>,
}

/// Unified error type for all client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The server rejected the request as invalid (HTTP 400).
    ///
    /// Not retryable; the input must be corrected.
    #[error("bad request: {message}")]
    BadRequest {
        /// Human-readable message from the response body.
        message: String,
        /// Per-field validation messages, field name to messages.
        errors: HashMap<String, Vec<String>>,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("not found: {message}")]
    NotFound {
        /// Human-readable message from the response body.
        message: String,
    },

    /// The server returned a non-2xx status other than 400 or 404.
    ///
    /// Carries the original status code; the caller decides retry policy.
    #[error("HTTP {status}: {message}")]
    Http {
        /// The HTTP status code of the response.
        status: u16,
        /// Human-readable message from the response body.
        message: String,
    },

    /// No response was received at all (DNS failure, connection refused,
    /// timeout, TLS failure). Wraps the underlying transport failure.
    #[error("transport error: {detail}")]
    Transport {
        /// Description of the underlying transport failure.
        detail: String,
    },

    /// The response body did not match the expected struct shape.
    ///
    /// Surfaced loudly instead of producing a partially populated struct.
    #[error("decode error: {detail}")]
    Decode {
        /// Description of the decode failure.
        detail: String,
    },
}

impl Error {
    /// Map a non-2xx status and its body to an error variant.
    ///
    /// A body that is not the expected JSON shape is carried verbatim as the
    /// message, so the caller never loses what the server actually said.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed.message.unwrap_or_else(|| body.to_string());
        match status {
            400 => Self::BadRequest {
                message,
                errors: parsed.errors.unwrap_or_default(),
            },
            404 => Self::NotFound { message },
            _ => Self::Http { status, message },
        }
    }

    pub(crate) fn transport(e: reqwest::Error) -> Self {
        Self::Transport {
            detail: e.to_string(),
        }
    }

    pub(crate) fn decode(detail: impl ToString) -> Self {
        Self::Decode {
            detail: detail.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Status mapping ----

    #[test]
    fn status_400_maps_to_bad_request() {
        let body = r#"{"message":"Validation failed","errors":{"name":["can't be blank"]}}"#;
        let err = Error::from_status(400, body);
        match err {
            Error::BadRequest { message, errors } => {
                assert_eq!(message, "Validation failed");
                assert_eq!(
                    errors.get("name").map(Vec::as_slice),
                    Some(&["can't be blank".to_string()][..])
                );
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn status_400_without_field_errors() {
        let err = Error::from_status(400, r#"{"message":"Bad request"}"#);
        assert!(matches!(
            err,
            Error::BadRequest { ref errors, .. } if errors.is_empty()
        ));
    }

    #[test]
    fn status_404_maps_to_not_found() {
        let err = Error::from_status(404, r#"{"message":"Zone `example.com` not found"}"#);
        assert!(matches!(
            err,
            Error::NotFound { message } if message == "Zone `example.com` not found"
        ));
    }

    #[test]
    fn other_statuses_map_to_http() {
        for status in [401, 403, 422, 500, 503] {
            let err = Error::from_status(status, r#"{"message":"oops"}"#);
            assert!(
                matches!(err, Error::Http { status: s, .. } if s == status),
                "status {status} did not map to Error::Http"
            );
        }
    }

    // ---- Body fallback ----

    #[test]
    fn non_json_body_becomes_message() {
        let err = Error::from_status(503, "Service Unavailable");
        assert!(matches!(
            err,
            Error::Http { status: 503, message } if message == "Service Unavailable"
        ));
    }

    #[test]
    fn json_body_without_message_falls_back_to_raw_text() {
        let err = Error::from_status(404, r#"{"detail":"gone"}"#);
        assert!(matches!(
            err,
            Error::NotFound { message } if message == r#"{"detail":"gone"}"#
        ));
    }

    // ---- Display ----

    #[test]
    fn display_bad_request() {
        let err = Error::from_status(400, r#"{"message":"Validation failed"}"#);
        assert_eq!(err.to_string(), "bad request: Validation failed");
    }

    #[test]
    fn display_http_carries_status() {
        let err = Error::from_status(500, r#"{"message":"Internal Server Error"}"#);
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn display_decode() {
        let err = Error::decode("missing field `data`");
        assert_eq!(err.to_string(), "decode error: missing field `data`");
    }
}
