//! # Inventory Sorter
//!
//! Returns a sorted copy of an inventory, ordered by one named field.
//!
//! ## Comparison Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compare_fields(a, b)                                                   │
//! │                                                                         │
//! │  a < b  → Less        a > b  → Greater        otherwise → Equal         │
//! │                                                                         │
//! │  "<" follows JavaScript relational comparison:                          │
//! │    text  vs text   → UTF-16 code unit order ("Apple" < "Banana")        │
//! │    anything else   → both sides as numbers                              │
//! │                        null → 0, true → 1, false → 0                    │
//! │                        " 42 " → 42, "abc" → NaN                         │
//! │    arrays, objects → their string form first                            │
//! │                        [1, 2] → "1,2", {..} → "[object Object]"         │
//! │    NaN, missing field → never less, never greater                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mixed field types can make the comparison inconsistent (not a total
//! order), which `slice::sort_by` is allowed to panic on. Sorting therefore
//! goes through a small stable merge sort that accepts any comparator.
//! Equal keys, including a key no record has, keep their original order.

use std::borrow::Cow;
use std::cmp::Ordering;

use tracing::debug;

use serde_json::Value;

use crate::record::{FieldValue, Fields};

/// Runs at or below this length are insertion-sorted.
const INSERTION_SORT_THRESHOLD: usize = 16;

/// Returns a new `Vec` with the inventory ordered ascending by `key`.
///
/// The input slice and its records are not modified. Records lacking the
/// field compare equal to everything, so sorting by a field nobody has
/// returns a copy in the original order.
///
/// ## Example
/// ```rust
/// use stockroom_core::sort_inventory;
/// use stockroom_core::record::Record;
/// use serde_json::json;
///
/// let inventory: Vec<Record> = vec![
///     Record::new().with_field("name", "Cherry").with_field("value", 30),
///     Record::new().with_field("name", "Apple").with_field("value", 10),
///     Record::new().with_field("name", "Banana").with_field("value", 20),
/// ];
///
/// let sorted = sort_inventory(&inventory, "value");
/// let names: Vec<_> = sorted.iter().map(|r| r.get("name").unwrap()).collect();
/// assert_eq!(names, [&json!("Apple"), &json!("Banana"), &json!("Cherry")]);
/// ```
pub fn sort_inventory<T>(inventory: &[T], key: &str) -> Vec<T>
where
    T: Fields + Clone,
{
    let keys: Vec<Option<FieldValue<'_>>> =
        inventory.iter().map(|record| record.field(key)).collect();

    let mut order: Vec<usize> = (0..inventory.len()).collect();
    stable_sort_by(&mut order, |&a, &b| {
        compare_fields(keys[a].as_ref(), keys[b].as_ref())
    });

    let sorted: Vec<T> = order.into_iter().map(|i| inventory[i].clone()).collect();

    debug!(count = sorted.len(), key, "Sorted inventory");
    sorted
}

/// Three-way comparison of two field values.
///
/// `None` stands for a missing field.
pub fn compare_fields(a: Option<&FieldValue<'_>>, b: Option<&FieldValue<'_>>) -> Ordering {
    if less_than(a, b) {
        Ordering::Less
    } else if less_than(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

fn less_than(a: Option<&FieldValue<'_>>, b: Option<&FieldValue<'_>>) -> bool {
    let (a, b) = (a.map(to_primitive), b.map(to_primitive));

    if let (Some(FieldValue::Text(a)), Some(FieldValue::Text(b))) = (&a, &b) {
        return a.encode_utf16().lt(b.encode_utf16());
    }

    match (a.as_ref().and_then(to_number), b.as_ref().and_then(to_number)) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

/// Arrays and objects become text; everything else is already primitive.
fn to_primitive<'a>(value: &FieldValue<'a>) -> FieldValue<'a> {
    match value {
        FieldValue::Composite(composite) => FieldValue::Text(Cow::Owned(to_js_string(composite))),
        other => other.clone(),
    }
}

/// JavaScript `String(value)`; arrays join their elements with commas.
fn to_js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.as_f64().map_or_else(|| n.to_string(), number_to_js_string),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                item => to_js_string(item),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_to_js_string(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{n:e}");
        return if text.contains("e-") {
            text
        } else {
            text.replacen('e', "e+", 1)
        };
    }

    n.to_string()
}

/// Numeric value of a field, `None` when it has none (NaN).
fn to_number(value: &FieldValue<'_>) -> Option<f64> {
    let number = match value {
        FieldValue::Null => 0.0,
        FieldValue::Bool(b) => f64::from(u8::from(*b)),
        FieldValue::Number(n) => *n,
        FieldValue::Text(text) => return parse_numeric_text(text),
        FieldValue::Composite(composite) => return parse_numeric_text(&to_js_string(composite)),
    };

    (!number.is_nan()).then_some(number)
}

/// Parses text the way JavaScript's `Number("...")` does.
fn parse_numeric_text(text: &str) -> Option<f64> {
    let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    if text.is_empty() {
        return Some(0.0);
    }

    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u128::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    // `f64::from_str` also takes "inf" and "NaN"; JavaScript does not.
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }

    text.parse::<f64>().ok()
}

// =============================================================================
// Stable Merge Sort
// =============================================================================

fn stable_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut scratch = items.to_vec();
    merge_sort(items, &mut scratch, &mut compare);
}

fn merge_sort<T, F>(items: &mut [T], scratch: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len <= INSERTION_SORT_THRESHOLD {
        insertion_sort(items, compare);
        return;
    }

    let mid = len / 2;
    {
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        merge_sort(&mut items[..mid], left_scratch, compare);
        merge_sort(&mut items[mid..], right_scratch, compare);
    }

    scratch.copy_from_slice(items);
    let (left, right) = scratch.split_at(mid);
    let (mut i, mut j) = (0, 0);

    // Ties go to the left run.
    for slot in items.iter_mut() {
        let take_right =
            i == left.len() || (j < right.len() && compare(&right[j], &left[i]) == Ordering::Less);
        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}

fn insertion_sort<T, F>(items: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j], &items[j - 1]) == Ordering::Less {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
