//! # Wire Envelope
//!
//! Every RPC response is wrapped in the same generic envelope:
//!
//! ```text
//! success: { "ok": true,  "data": <T> }
//! failure: { "ok": false, "error": { "code": "<url-like-id>", "message": "<text>" } }
//! ```
//!
//! The envelope is authoritative: once a body parses as one of these two
//! shapes, the call is decided - the dispatcher never retries it. A body
//! that parses as neither is a protocol error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult, ErrorKind};

/// The error half of the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// URL-shaped error identifier (see [`crate::codes`]).
    pub code: String,

    /// Human-readable description. May be empty; preserved verbatim.
    #[serde(default)]
    pub message: String,
}

/// The generic success/error envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub ok: bool,

    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

// `#[serde(default)]` on `data` would require `T: Default`; this does not.
fn none<T>() -> Option<T> {
    None
}

impl<T> Envelope<T> {
    /// Resolves the envelope into the caller's expected shape or a typed
    /// error. An error body's code decodes through the kind table; the code
    /// and message travel with the error unchanged.
    pub fn into_result(self) -> ApiResult<T> {
        match (self.ok, self.data, self.error) {
            (true, Some(data), _) => Ok(data),
            (false, _, Some(body)) => Err(ApiError::Service {
                kind: ErrorKind::from_code(&body.code),
                code: body.code,
                message: body.message,
            }),
            (true, None, _) => Err(ApiError::Protocol(
                "envelope has ok=true but no data".to_string(),
            )),
            (false, _, None) => Err(ApiError::Protocol(
                "envelope has ok=false but no error".to_string(),
            )),
        }
    }
}

/// Decodes a raw response body into the expected shape.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    let envelope: Envelope<T> = serde_json::from_slice(body)
        .map_err(|err| ApiError::Protocol(format!("malformed envelope: {err}")))?;
    envelope.into_result()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    #[test]
    fn test_success_envelope_yields_data() {
        let value: i64 = decode(br#"{"ok": true, "data": 42}"#).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_error_envelope_decodes_kind_and_preserves_fields() {
        let body = format!(
            r#"{{"ok": false, "error": {{"code": "{}", "message": "order id is blank"}}}}"#,
            codes::INVALID_DATA
        );
        let err = decode::<i64>(body.as_bytes()).unwrap_err();

        match err {
            ApiError::Service { kind, code, message } => {
                assert_eq!(kind, ErrorKind::InvalidData);
                assert_eq!(code, codes::INVALID_DATA);
                assert_eq!(message, "order id is blank");
            }
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_code_surfaces_verbatim() {
        let err = decode::<i64>(
            br#"{"ok": false, "error": {"code": "https://www.vestaorders.com/errors/something_new", "message": "??"}}"#,
        )
        .unwrap_err();

        match err {
            ApiError::Service { kind, code, message } => {
                assert_eq!(kind, ErrorKind::Other);
                assert_eq!(code, "https://www.vestaorders.com/errors/something_new");
                assert_eq!(message, "??");
            }
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_message_defaults_to_empty() {
        let body = format!(r#"{{"ok": false, "error": {{"code": "{}"}}}}"#, codes::INTERNAL);
        let err = decode::<i64>(body.as_bytes()).unwrap_err();
        match err {
            ApiError::Service { message, .. } => assert_eq!(message, ""),
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_bodies_are_protocol_errors() {
        assert!(matches!(
            decode::<i64>(b"not json at all"),
            Err(ApiError::Protocol(_))
        ));
        assert!(matches!(
            decode::<i64>(br#"{"ok": true}"#),
            Err(ApiError::Protocol(_))
        ));
        assert!(matches!(
            decode::<i64>(br#"{"ok": false}"#),
            Err(ApiError::Protocol(_))
        ));
    }
}
