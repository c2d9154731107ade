//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  InventoryError       - What the strict `try_*` functions return       │
//! │  └── ValidationError  - The argument rule that was violated            │
//! │                                                                         │
//! │  Fail-soft functions swallow both and return a sentinel instead:       │
//! │    discount → None        filter / sort → empty Vec                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Name the offending argument in every message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Inventory Error
// =============================================================================

/// Errors returned by the strict (`try_*`) inventory operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    /// An argument had the wrong shape or was out of range.
    #[error("Invalid argument: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Argument validation errors.
///
/// Each variant carries the name of the argument that failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value is not a number (a JSON non-number, or NaN).
    #[error("{field} must be a number")]
    NotANumber { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value lies outside an inclusive range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value is not an ordered sequence.
    #[error("{field} must be an array")]
    NotASequence { field: String },

    /// No callable predicate was supplied.
    #[error("{field} must be a function")]
    NotCallable { field: String },

    /// Value is not text.
    #[error("{field} must be a string")]
    NotText { field: String },

    /// A record was not a JSON object.
    #[error("record must be an object")]
    InvalidRecord,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with InventoryError.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
