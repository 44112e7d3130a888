//! # Wire Error Codes
//!
//! The platform identifies failures with URL-shaped code strings. The full
//! set grows over time; unknown codes must still surface to callers with
//! code and message intact (see [`crate::error::ErrorKind::from_code`]).

/// Request was malformed or failed validation.
pub const INVALID_DATA: &str = "https://www.vestaorders.com/errors/invalid_data";

/// Caller lacks permission for the operation.
pub const NO_PERMISSION: &str = "https://www.vestaorders.com/errors/no_permission";

/// Authentication failed or the token expired.
pub const AUTHENTICATION: &str = "https://www.vestaorders.com/errors/authentication";

/// Operation requires a secure channel.
pub const NOT_SECURE: &str = "https://www.vestaorders.com/errors/not_secure";

/// Referenced entity does not exist.
pub const NOT_FOUND: &str = "https://www.vestaorders.com/errors/not_found";

/// Concurrent-modification conflict.
pub const CONFLICT: &str = "https://www.vestaorders.com/errors/conflict";

/// Unspecified server-side failure.
pub const INTERNAL: &str = "https://www.vestaorders.com/errors/internal";

/// Server-side failure expected to clear; retry later with backoff.
pub const TEMPORARILY_UNAVAILABLE: &str =
    "https://www.vestaorders.com/errors/temporarily_unavailable";

/// The API surface was retired; the caller must migrate.
pub const DEPRECATED: &str = "https://www.vestaorders.com/errors/deprecated";

// Business codes

/// Order failed submission-time checks (restaurant closed, minimum not met).
pub const CANNOT_SUBMIT_ORDER: &str = "https://www.vestaorders.com/errors/cannot_submit_order";

/// Requested item or service is not currently offered.
pub const UNAVAILABLE: &str = "https://www.vestaorders.com/errors/unavailable";

/// Delivery address is outside every delivery area.
pub const ADDRESS_NOT_IN_RANGE: &str = "https://www.vestaorders.com/errors/address_not_in_range";

/// Card payment declined.
pub const PAYMENT_REJECTED: &str = "https://www.vestaorders.com/errors/cc_rejected";

/// Payment amount exceeds the method's limit.
pub const PAYMENT_EXCEEDS_LIMIT: &str =
    "https://www.vestaorders.com/errors/payment_exceeds_limit";

/// Selected payment method is not accepted for this order.
pub const PAYMENT_METHOD_UNAVAILABLE: &str =
    "https://www.vestaorders.com/errors/payment_method_unavailable";

/// An ordered item is out of stock.
pub const OUT_OF_STOCK: &str = "https://www.vestaorders.com/errors/out_of_stock";
