//! # Validation Module
//!
//! Input validation for order and reservation construction. Validators run
//! before the builders touch their aggregates, so a rejected input never
//! leaves a half-built value behind.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an order-line count.
///
/// ## Rules
/// - Must be at least 1. Zero is rejected with a typed error, never
///   silently clamped. (Negative counts are unrepresentable: `u32`.)
pub fn validate_count(count: u32) -> ValidationResult<u32> {
    if count == 0 {
        return Err(ValidationError::MustBePositive { field: "count" });
    }
    Ok(count)
}

/// Validates an identifier-ish required string (restaurant id, item id).
pub fn validate_required(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

/// Validates a reservation party size. The platform accepts 1..=100; finer
/// per-restaurant limits are validated server-side.
pub fn validate_party_size(party_size: u32) -> ValidationResult<u32> {
    if party_size == 0 {
        return Err(ValidationError::MustBePositive { field: "party_size" });
    }
    if party_size > 100 {
        return Err(ValidationError::OutOfRange {
            field: "party_size",
            min: 1,
            max: 100,
        });
    }
    Ok(party_size)
}
