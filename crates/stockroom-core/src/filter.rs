//! # Product Filter
//!
//! Keeps the records a caller-supplied predicate accepts.

use tracing::debug;

/// Returns the products for which `predicate` is true, in their original order.
///
/// The input slice is left untouched; matching records are cloned into a
/// new `Vec`. An empty result means "nothing matched".
///
/// ## Example
/// ```rust
/// use stockroom_core::filter_products;
/// use stockroom_core::types::Product;
///
/// let products = vec![
///     Product { id: 1, name: "Laptop".into(), price: 1200.0, stock: 5 },
///     Product { id: 2, name: "Mouse".into(), price: 25.0, stock: 50 },
/// ];
///
/// let expensive = filter_products(&products, |p| p.price > 100.0);
/// assert_eq!(expensive.len(), 1);
/// assert_eq!(expensive[0].name, "Laptop");
/// ```
pub fn filter_products<T, P>(products: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    let matches: Vec<T> = products
        .iter()
        .filter(|product| predicate(*product))
        .cloned()
        .collect();

    debug!(total = products.len(), matched = matches.len(), "Filtered products");
    matches
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FieldValue, Fields, Record};
    use crate::types::Product;
    use serde_json::json;

    fn catalogue() -> Vec<Product> {
        vec![
            Product { id: 1, name: "Laptop".into(), price: 1200.0, stock: 5 },
            Product { id: 2, name: "Mouse".into(), price: 25.0, stock: 50 },
            Product { id: 3, name: "Monitor".into(), price: 300.0, stock: 0 },
            Product { id: 4, name: "Keyboard".into(), price: 75.0, stock: 20 },
        ]
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_items_over_hundred() {
        let result = filter_products(&catalogue(), |p| p.price > 100.0);
        assert_eq!(names(&result), vec!["Laptop", "Monitor"]);
    }

    #[test]
    fn test_stock_greater_than_ten() {
        let result = filter_products(&catalogue(), |p| p.stock > 10);
        assert_eq!(names(&result), vec!["Mouse", "Keyboard"]);
    }

    #[test]
    fn test_no_matches_is_empty() {
        let result = filter_products(&catalogue(), |p| p.price > 5000.0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<Product> = Vec::new();
        assert!(filter_products(&empty, |p| p.price > 10.0).is_empty());
    }

    #[test]
    fn test_out_of_stock_items() {
        let result = filter_products(&catalogue(), Product::is_out_of_stock);
        assert_eq!(names(&result), vec!["Monitor"]);
    }

    #[test]
    fn test_source_is_not_modified() {
        let products = catalogue();
        let _ = filter_products(&products, |p| p.stock > 10);
        assert_eq!(products, catalogue());
    }

    #[test]
    fn test_open_ended_records() {
        let records: Vec<Record> = vec![
            Record::try_from(json!({"name": "Laptop", "featured": true})).unwrap(),
            Record::try_from(json!({"name": "Mouse"})).unwrap(),
        ];

        let featured = filter_products(&records, |r| {
            r.field("featured") == Some(FieldValue::Bool(true))
        });
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].get("name"), Some(&json!("Laptop")));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the result is exactly the order-preserving subsequence
            /// of elements that satisfy the predicate.
            #[test]
            fn result_is_matching_subsequence(
                values in prop::collection::vec(-1000i64..1000, 0..64),
                threshold in -1000i64..1000,
            ) {
                let result = filter_products(&values, |v| *v > threshold);
                let expected: Vec<i64> = values.iter().copied().filter(|v| *v > threshold).collect();
                prop_assert_eq!(result, expected);
            }

            /// Property: an always-true predicate returns a copy of the input.
            #[test]
            fn accept_all_is_identity(values in prop::collection::vec(any::<i32>(), 0..64)) {
                prop_assert_eq!(filter_products(&values, |_| true), values);
            }
        }
    }
}
