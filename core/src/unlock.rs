//! Teaser/unlock transform — the paywall gating boundary.
//!
//! RULE: the caller's pack is never mutated. The transform works on an
//! explicit structural deep copy so the same source pack can serve both
//! the paid and unpaid render of one request.
//!
//! The transform only computes the `locked` flag; stripping locked
//! content is the renderer's decision, not ours.

use serde_json::Value;

/// Inject `locked` flags into a deep copy of `pack`.
///
/// `locked` is true exactly when the caller is unpaid and the item sits
/// at index `unlock_per_category` or beyond within its category.
/// Structure the transform does not recognize passes through unchanged:
/// no `categories` array returns the copy as-is, a category without an
/// `items` array is skipped, and non-object items are left alone.
pub fn apply_unlock(pack: &Value, unlock_per_category: usize, is_paid: bool) -> Value {
    let mut out = pack.clone();
    let categories = match out.get_mut("categories").and_then(Value::as_array_mut) {
        Some(c) => c,
        None => return out,
    };
    for category in categories {
        let items = match category.get_mut("items").and_then(Value::as_array_mut) {
            Some(i) => i,
            None => continue,
        };
        for (idx, item) in items.iter_mut().enumerate() {
            if let Some(obj) = item.as_object_mut() {
                let locked = !(is_paid || idx < unlock_per_category);
                obj.insert("locked".to_string(), Value::Bool(locked));
            }
        }
    }
    out
}
