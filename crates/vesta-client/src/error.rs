//! # RPC Error Taxonomy
//!
//! Every failed call surfaces as one [`ApiError`]:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                       ApiError Categories                         │
//! │                                                                   │
//! │  Communication  transport failed after all retries. The request   │
//! │                 may or may not have reached the server - callers  │
//! │                 must NOT blindly resubmit non-idempotent ops.     │
//! │                                                                   │
//! │  Protocol       the response body was not a well-formed           │
//! │                 success/error envelope.                           │
//! │                                                                   │
//! │  Service        a well-formed error envelope. Carries the kind    │
//! │                 (decoded from the wire code), plus the original   │
//! │                 code and message verbatim.                        │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One tagged type instead of an exception subtype per server code: when the
//! server introduces a new code, it decodes as [`ErrorKind::Other`] with the
//! code and message preserved - forward compatible by construction, nothing
//! is ever silently swallowed or collapsed into a default kind.

use thiserror::Error;

use crate::codes;
use crate::transport::TransportError;

// =============================================================================
// Error Kind
// =============================================================================

/// Decoded meaning of a server error code.
///
/// Non-exhaustive: the server adds codes over time. Codes this client
/// version does not recognize decode to [`ErrorKind::Other`]; the original
/// code string stays available on [`ApiError::Service`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Authorization failure. Fatal for this call; fix credentials, do not
    /// retry.
    NoPermission,
    /// Malformed or invalid request. Fatal; fix the input.
    InvalidData,
    /// Unspecified server-side failure. Retryable at a higher level.
    Internal,
    /// Referenced entity absent.
    NotFound,
    /// Server-side, expected to clear. Retryable at a higher level.
    TemporarilyUnavailable,
    /// Concurrent-modification conflict.
    Conflict,
    /// Authentication failed or token expired.
    Authentication,
    /// Secure channel required.
    NotSecure,
    /// API surface retired; the caller must migrate.
    Deprecated,

    // Business kinds - each fatal to the specific operation and actionable
    // by the caller (e.g. show "out of stock" to the end user).
    CannotSubmitOrder,
    AddressNotInRange,
    PaymentRejected,
    PaymentExceedsLimit,
    PaymentMethodUnavailable,
    OutOfStock,
    Unavailable,

    /// A code this client version does not recognize.
    Other,
}

impl ErrorKind {
    /// Decodes a wire error code. Unrecognized codes map to `Other`, never
    /// to some default known kind.
    pub fn from_code(code: &str) -> Self {
        match code {
            codes::NO_PERMISSION => ErrorKind::NoPermission,
            codes::INVALID_DATA => ErrorKind::InvalidData,
            codes::INTERNAL => ErrorKind::Internal,
            codes::NOT_FOUND => ErrorKind::NotFound,
            codes::TEMPORARILY_UNAVAILABLE => ErrorKind::TemporarilyUnavailable,
            codes::CONFLICT => ErrorKind::Conflict,
            codes::AUTHENTICATION => ErrorKind::Authentication,
            codes::NOT_SECURE => ErrorKind::NotSecure,
            codes::DEPRECATED => ErrorKind::Deprecated,
            codes::CANNOT_SUBMIT_ORDER => ErrorKind::CannotSubmitOrder,
            codes::ADDRESS_NOT_IN_RANGE => ErrorKind::AddressNotInRange,
            codes::PAYMENT_REJECTED => ErrorKind::PaymentRejected,
            codes::PAYMENT_EXCEEDS_LIMIT => ErrorKind::PaymentExceedsLimit,
            codes::PAYMENT_METHOD_UNAVAILABLE => ErrorKind::PaymentMethodUnavailable,
            codes::OUT_OF_STOCK => ErrorKind::OutOfStock,
            codes::UNAVAILABLE => ErrorKind::Unavailable,
            _ => ErrorKind::Other,
        }
    }
}

// =============================================================================
// Api Error
// =============================================================================

/// Result type alias for RPC operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// A failed RPC call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failed on every attempt (the configured retry count was
    /// exhausted). Delivery is unknown - the request may have reached the
    /// server - so callers must not blindly resubmit non-idempotent
    /// operations like order submission.
    #[error("communication failed after {attempts} attempt(s)")]
    Communication {
        attempts: u32,

        #[source]
        source: TransportError,
    },

    /// The response body was not a well-formed envelope (or the request
    /// could not be encoded). Indicates a protocol mismatch, not a server
    /// verdict.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The server returned a well-formed error envelope. `code` and
    /// `message` are preserved verbatim.
    #[error("service error {code}: {message}")]
    Service {
        kind: ErrorKind,
        code: String,
        message: String,
    },
}

impl ApiError {
    /// The decoded kind, for `Service` errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ApiError::Service { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns true if a higher layer may reasonably retry the whole call
    /// (with backoff). The dispatcher itself never auto-retries these: a
    /// well-formed envelope is authoritative, and a Communication failure
    /// means delivery is unknown.
    ///
    /// ## Retryable
    /// - Communication (idempotent operations only!)
    /// - Internal, TemporarilyUnavailable
    ///
    /// ## Non-Retryable
    /// - Every other service kind (fix input/credentials or give up)
    /// - Protocol errors (version mismatch, not transient)
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Communication { .. } => true,
            ApiError::Service { kind, .. } => {
                matches!(kind, ErrorKind::Internal | ErrorKind::TemporarilyUnavailable)
            }
            ApiError::Protocol(_) => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
