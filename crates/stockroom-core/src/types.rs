//! # Domain Types
//!
//! Typed counterparts of the open-ended [`Record`](crate::record::Record).
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    Product      │   │  DiscountRate   │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  id             │   │  fraction (f64) │                              │
//! │  │  name           │   │  0.25 = 25% off │                              │
//! │  │  price          │   │  always 0..=1   │                              │
//! │  │  stock          │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationResult;
use crate::record::{FieldValue, Fields};
use crate::validation::{validate_discount_rate, validate_price};

// =============================================================================
// Discount Rate
// =============================================================================

/// A discount rate as a fraction of the price.
///
/// ## Why a Fraction?
/// The discount amount is simply `price * rate`, so 0.1 = 10% off and
/// 1.0 = the whole price. Construction goes through validation, so a
/// `DiscountRate` is always within 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(try_from = "f64")]
#[ts(export)]
pub struct DiscountRate(f64);

impl DiscountRate {
    /// Creates a discount rate, rejecting NaN and anything outside 0..=1.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::types::DiscountRate;
    ///
    /// assert!(DiscountRate::new(0.25).is_ok());
    /// assert!(DiscountRate::new(1.5).is_err());
    /// ```
    pub fn new(fraction: f64) -> ValidationResult<Self> {
        validate_discount_rate(fraction).map(DiscountRate)
    }

    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0.0)
    }

    /// Returns the rate as a fraction (0.25 for 25%).
    #[inline]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 * 100.0
    }

    /// Discount amount for a price.
    ///
    /// Plain floating-point multiplication, no rounding. Callers that need
    /// currency precision must round the result themselves.
    pub fn apply(&self, price: f64) -> ValidationResult<f64> {
        Ok(validate_price(price)? * self.0)
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

impl TryFrom<f64> for DiscountRate {
    type Error = crate::error::ValidationError;

    fn try_from(fraction: f64) -> ValidationResult<Self> {
        DiscountRate::new(fraction)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product with the fields the inventory screens work with.
///
/// Callers without a fixed schema use [`Record`](crate::record::Record)
/// instead; both can be filtered and sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalogue identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Unit price in major currency units.
    pub price: f64,

    /// Units on hand.
    pub stock: i64,
}

impl Product {
    /// Checks if the product is out of stock.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= 0
    }
}

impl Fields for Product {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Number(self.id as f64)),
            "name" => Some(FieldValue::Text(Cow::Borrowed(&self.name))),
            "price" => Some(FieldValue::Number(self.price)),
            "stock" => Some(FieldValue::Number(self.stock as f64)),
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
