//! # Validation Module
//!
//! Argument checks shared by the discount, filter and sort operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Rust types                                                   │
//! │  ├── &[T], &str, Fn(&T) -> bool                                        │
//! │  └── Shape errors are impossible at compile time                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Range checks (numeric validators below)                      │
//! │  ├── price >= 0                                                        │
//! │  └── 0 <= discount_rate <= 1                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Untyped JSON input (value validators below)                  │
//! │  └── is it a number / an array / a string?                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{validate_discount_rate, validate_price};
//!
//! assert!(validate_price(19.99).is_ok());
//! assert!(validate_discount_rate(1.5).is_err());
//! ```

use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_DISCOUNT_RATE, MIN_DISCOUNT_RATE, MIN_PRICE};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be a number (NaN is rejected)
/// - Must be non-negative (>= 0); positive infinity is accepted
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_price;
///
/// assert!(validate_price(10.99).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<f64> {
    let price = validate_not_nan(price, "price")?;

    if price < MIN_PRICE {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

/// Validates a discount rate expressed as a fraction.
///
/// ## Rules
/// - Must be a number (NaN is rejected)
/// - Must be between 0 and 1 inclusive (0% to 100% off)
pub fn validate_discount_rate(rate: f64) -> ValidationResult<f64> {
    let rate = validate_not_nan(rate, "discount_rate")?;

    if !(MIN_DISCOUNT_RATE..=MAX_DISCOUNT_RATE).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: "discount_rate".to_string(),
            min: MIN_DISCOUNT_RATE,
            max: MAX_DISCOUNT_RATE,
        });
    }

    Ok(rate)
}

/// Rejects NaN. Infinities are numbers and go through the range checks.
fn validate_not_nan(value: f64, field: &str) -> ValidationResult<f64> {
    if value.is_nan() {
        return Err(ValidationError::NotANumber {
            field: field.to_string(),
        });
    }

    Ok(value)
}

// =============================================================================
// JSON Value Validators
// =============================================================================

/// Requires a JSON number and returns it as `f64`.
pub fn validate_number(value: &Value, field: &str) -> ValidationResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| ValidationError::NotANumber {
            field: field.to_string(),
        })
}

/// Requires a JSON array and returns its elements.
pub fn validate_sequence<'a>(value: &'a Value, field: &str) -> ValidationResult<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ValidationError::NotASequence {
            field: field.to_string(),
        })
}

/// Requires a JSON string and returns it.
pub fn validate_text<'a>(value: &'a Value, field: &str) -> ValidationResult<&'a str> {
    value.as_str().ok_or_else(|| ValidationError::NotText {
        field: field.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
