//! # stockroom-core: Pure Inventory Utilities
//!
//! Three side-effect-free operations over in-memory product records:
//! a discount calculator, a predicate filter and a sort-by-field.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      stockroom-core (THIS CRATE)                        │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────────────┐   │
//! │   │ discount  │  │  filter   │  │   sort    │  │     dynamic       │   │
//! │   │ price*rate│  │ predicate │  │ by field  │  │ untyped JSON args │   │
//! │   └─────┬─────┘  └─────┬─────┘  └─────┬─────┘  └─────────┬─────────┘   │
//! │         │              │              │                  │             │
//! │   ┌─────▼──────────────▼──────────────▼──────────────────▼─────────┐   │
//! │   │   validation  •  record (Fields)  •  types  •  error            │   │
//! │   └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`discount`] - Discount amount with range checks
//! - [`filter`] - Predicate filter preserving order
//! - [`sort`] - Stable sorted copy by a named field
//! - [`dynamic`] - The same operations over untyped `serde_json::Value` input
//! - [`record`] - Open-ended records and by-name field access
//! - [`types`] - `Product` and `DiscountRate`
//! - [`validation`] - Argument checks
//! - [`error`] - Validation error types
//!
//! ## Failure Policy
//!
//! Invalid input never panics and never raises. The discount calculator
//! returns `None`; filter and sort return an empty `Vec`. Callers that need
//! to tell "invalid" from "empty" use the `try_*` functions, which return
//! [`InventoryResult`].
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{calculate_discount, filter_products, sort_inventory};
//! use stockroom_core::types::Product;
//!
//! let products = vec![
//!     Product { id: 1, name: "Laptop".into(), price: 1200.0, stock: 5 },
//!     Product { id: 2, name: "Mouse".into(), price: 25.0, stock: 50 },
//!     Product { id: 3, name: "Monitor".into(), price: 300.0, stock: 0 },
//! ];
//!
//! assert_eq!(calculate_discount(100.0, 0.1), Some(10.0));
//!
//! let in_stock = filter_products(&products, |p| p.stock > 0);
//! assert_eq!(in_stock.len(), 2);
//!
//! let by_price = sort_inventory(&products, "price");
//! assert_eq!(by_price[0].name, "Mouse");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod dynamic;
pub mod error;
pub mod filter;
pub mod record;
pub mod sort;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use discount::{calculate_discount, try_calculate_discount};
pub use error::{InventoryError, InventoryResult, ValidationError};
pub use filter::filter_products;
pub use record::{FieldValue, Fields, Record};
pub use sort::{compare_fields, sort_inventory};
pub use types::{DiscountRate, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest accepted discount rate (no discount).
pub const MIN_DISCOUNT_RATE: f64 = 0.0;

/// Largest accepted discount rate (the whole price).
pub const MAX_DISCOUNT_RATE: f64 = 1.0;

/// Smallest accepted price. Zero is allowed for free items.
pub const MIN_PRICE: f64 = 0.0;
