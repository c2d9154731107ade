//! # Dynamic Boundary
//!
//! The three operations for callers whose arguments arrive untyped, as
//! `serde_json::Value`s (a scripting bridge, a JSON request body, ...).
//!
//! Here the argument *shapes* can be wrong at runtime, so they are checked
//! before the typed operations run:
//!
//! | Operation | Shape checks | Sentinel |
//! |---|---|---|
//! | [`calculate_discount_value`] | both arguments are numbers | `None` |
//! | [`filter_products_value`] | products is an array, predicate present | empty `Vec` |
//! | [`sort_inventory_value`] | inventory is an array, key is a string | empty `Vec` |
//!
//! The fail-soft functions cannot tell "bad input" from "nothing matched":
//! both give an empty `Vec`. The `try_*` variants keep the two apart.

use serde_json::Value;
use tracing::debug;

use crate::discount::try_calculate_discount;
use crate::error::{InventoryResult, ValidationError};
use crate::filter::filter_products;
use crate::sort::sort_inventory;
use crate::validation::{validate_number, validate_sequence, validate_text};

// =============================================================================
// Truthiness
// =============================================================================

/// JavaScript truthiness of a JSON value.
///
/// `null`, `false`, `0` and `""` are falsy; everything else, including
/// empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// =============================================================================
// Discount
// =============================================================================

/// [`calculate_discount`](crate::calculate_discount) over JSON arguments.
///
/// ## Example
/// ```rust
/// use stockroom_core::dynamic::calculate_discount_value;
/// use serde_json::json;
///
/// assert_eq!(calculate_discount_value(&json!(100), &json!(0.1)), Some(10.0));
/// assert_eq!(calculate_discount_value(&json!("100"), &json!(0.1)), None);
/// ```
pub fn calculate_discount_value(price: &Value, discount_rate: &Value) -> Option<f64> {
    match try_calculate_discount_value(price, discount_rate) {
        Ok(discount) => Some(discount),
        Err(err) => {
            debug!(%price, %discount_rate, error = %err, "Rejected discount input");
            None
        }
    }
}

pub fn try_calculate_discount_value(price: &Value, discount_rate: &Value) -> InventoryResult<f64> {
    let price = validate_number(price, "price")?;
    let discount_rate = validate_number(discount_rate, "discount_rate")?;
    try_calculate_discount(price, discount_rate)
}

// =============================================================================
// Filter
// =============================================================================

/// [`filter_products`] over a JSON array.
///
/// `predicate` returns a JSON verdict that is judged by [`is_truthy`].
/// `None` stands for a predicate argument that was not callable.
pub fn filter_products_value<F>(products: &Value, predicate: Option<F>) -> Vec<Value>
where
    F: Fn(&Value) -> Value,
{
    try_filter_products_value(products, predicate).unwrap_or_else(|err| {
        debug!(error = %err, "Rejected filter input");
        Vec::new()
    })
}

pub fn try_filter_products_value<F>(
    products: &Value,
    predicate: Option<F>,
) -> InventoryResult<Vec<Value>>
where
    F: Fn(&Value) -> Value,
{
    let products = validate_sequence(products, "products")?;
    let predicate = predicate.ok_or_else(|| ValidationError::NotCallable {
        field: "predicate".to_string(),
    })?;

    Ok(filter_products(products, |product| is_truthy(&predicate(product))))
}

// =============================================================================
// Sort
// =============================================================================

/// [`sort_inventory`] over a JSON array and a JSON key.
///
/// ## Example
/// ```rust
/// use stockroom_core::dynamic::sort_inventory_value;
/// use serde_json::json;
///
/// let inventory = json!([{"value": 2}, {"value": 1}]);
///
/// assert_eq!(
///     sort_inventory_value(&inventory, &json!("value")),
///     vec![json!({"value": 1}), json!({"value": 2})]
/// );
/// assert!(sort_inventory_value(&inventory, &json!(123)).is_empty());
/// ```
pub fn sort_inventory_value(inventory: &Value, key: &Value) -> Vec<Value> {
    try_sort_inventory_value(inventory, key).unwrap_or_else(|err| {
        debug!(error = %err, "Rejected sort input");
        Vec::new()
    })
}

pub fn try_sort_inventory_value(inventory: &Value, key: &Value) -> InventoryResult<Vec<Value>> {
    let inventory = validate_sequence(inventory, "inventory")?;
    let key = validate_text(key, "key")?;
    Ok(sort_inventory(inventory, key))
}

// =============================================================================
// Unit Tests
// =============================================================================
