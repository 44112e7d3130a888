//! # Error Types
//!
//! Domain error types for vesta-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, slot index, etc.)
//! 3. Errors are enum variants, never String
//! 4. Construction failures are typed and inspectable - nothing panics

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Order-construction errors.
///
/// These surface while assembling an order from a menu snapshot; the RPC
/// layer has its own taxonomy for server-reported failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A referenced menu item id is absent from the indexed snapshot.
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    /// A choice targeted a slot index the item does not have. Slots are
    /// positional: index i addresses the i-th variation of the item.
    #[error("Item {item_id} has {slots} choice slot(s), no slot {index}")]
    NoSuchChoiceSlot {
        item_id: String,
        index: usize,
        slots: usize,
    },

    /// Input validation failure (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors, raised before any aggregate is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value must be a positive integer. Zero is rejected, never clamped.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NoSuchChoiceSlot {
            item_id: "coke".to_string(),
            index: 2,
            slots: 1,
        };
        assert_eq!(err.to_string(), "Item coke has 1 choice slot(s), no slot 2");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive { field: "count" };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
