//! # Discount Calculator
//!
//! Computes the discount amount `price * discount_rate`.
//!
//! ## User Workflow
//! ```text
//! Price: 100.00, Rate: 0.1
//!      │
//!      ▼
//! calculate_discount ← THIS MODULE
//!      │
//!      ├── rate outside 0..=1? → None
//!      ├── price negative?     → None
//!      │
//!      ▼
//! Discount: 10.00
//! ```
//!
//! The result is not rounded: `123.45 * 0.25` comes back as roughly
//! `30.8625`. Round at the display layer if currency precision is needed.

use tracing::debug;

use crate::error::InventoryResult;
use crate::types::DiscountRate;
use crate::validation::validate_price;

/// Calculates the discount amount, or `None` if either input is invalid.
///
/// ## Rules
/// - `price` must be a non-negative number
/// - `discount_rate` must be a number between 0 and 1 inclusive
///
/// ## Example
/// ```rust
/// use stockroom_core::calculate_discount;
///
/// assert_eq!(calculate_discount(100.0, 0.1), Some(10.0));
/// assert_eq!(calculate_discount(50.0, 1.0), Some(50.0));
/// assert_eq!(calculate_discount(100.0, 1.5), None);
/// assert_eq!(calculate_discount(-100.0, 0.1), None);
/// ```
pub fn calculate_discount(price: f64, discount_rate: f64) -> Option<f64> {
    match try_calculate_discount(price, discount_rate) {
        Ok(discount) => Some(discount),
        Err(err) => {
            debug!(price = %price, discount_rate = %discount_rate, error = %err, "Rejected discount input");
            None
        }
    }
}

/// Strict form of [`calculate_discount`] that names the violated rule.
///
/// The rate is checked before the price, so when both are bad the error
/// names `discount_rate`.
pub fn try_calculate_discount(price: f64, discount_rate: f64) -> InventoryResult<f64> {
    let rate = DiscountRate::new(discount_rate)?;
    let price = validate_price(price)?;
    Ok(price * rate.fraction())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InventoryError, ValidationError};

    #[test]
    fn test_ten_percent_of_hundred() {
        assert_eq!(calculate_discount(100.0, 0.1), Some(10.0));
    }

    #[test]
    fn test_decimal_price_and_rate_not_rounded() {
        let discount = calculate_discount(123.45, 0.25).unwrap();
        assert!((discount - 30.8625).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_rates_and_prices() {
        assert_eq!(calculate_discount(50.0, 0.0), Some(0.0));
        assert_eq!(calculate_discount(50.0, 1.0), Some(50.0));
        assert_eq!(calculate_discount(0.0, 0.5), Some(0.0));
    }

    #[test]
    fn test_invalid_inputs_return_none() {
        assert_eq!(calculate_discount(100.0, -0.1), None);
        assert_eq!(calculate_discount(100.0, 1.001), None);
        assert_eq!(calculate_discount(-100.0, 0.1), None);
        assert_eq!(calculate_discount(f64::NAN, 0.1), None);
        assert_eq!(calculate_discount(100.0, f64::NAN), None);
    }

    #[test]
    fn test_infinite_price_multiplies_like_any_number() {
        assert_eq!(calculate_discount(f64::INFINITY, 0.5), Some(f64::INFINITY));
        assert_eq!(calculate_discount(f64::INFINITY, 1.0), Some(f64::INFINITY));
        assert!(calculate_discount(f64::INFINITY, 0.0).is_some_and(f64::is_nan));
        assert_eq!(calculate_discount(f64::NEG_INFINITY, 0.5), None);
    }

    #[test]
    fn test_strict_form_names_the_rule() {
        assert_eq!(
            try_calculate_discount(-100.0, 0.1),
            Err(InventoryError::Validation(ValidationError::Negative {
                field: "price".to_string()
            }))
        );

        let err = try_calculate_discount(100.0, 2.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: discount_rate must be between 0 and 1"
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: valid inputs give exactly price * rate.
            #[test]
            fn valid_inputs_multiply(price in 0.0f64..1e9, rate in 0.0f64..=1.0) {
                prop_assert_eq!(calculate_discount(price, rate), Some(price * rate));
            }

            /// Property: a discount never exceeds the price.
            #[test]
            fn discount_never_exceeds_price(price in 0.0f64..1e9, rate in 0.0f64..=1.0) {
                let discount = calculate_discount(price, rate).unwrap();
                prop_assert!(discount >= 0.0);
                prop_assert!(discount <= price);
            }

            /// Property: negative prices are always rejected.
            #[test]
            fn negative_price_rejected(price in -1e9f64..-1e-9, rate in 0.0f64..=1.0) {
                prop_assert_eq!(calculate_discount(price, rate), None);
            }

            /// Property: rates above 1 are always rejected.
            #[test]
            fn rate_above_one_rejected(price in 0.0f64..1e9, rate in 1.000_001f64..100.0) {
                prop_assert_eq!(calculate_discount(price, rate), None);
            }
        }
    }
}
