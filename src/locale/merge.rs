//! Recursive merge of translation maps.

use serde_json::{Map, Value};

/// Merge `overlay` onto a copy of `base`.
///
/// - keys only in `base` keep the base value
/// - keys in both take the overlay value, unless both sides are objects,
///   in which case they merge recursively
/// - arrays on both sides merge by index; base elements past the end of
///   the overlay array are kept
/// - keys only in `overlay` are appended after the base keys
pub fn deep_merge(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    merge_into(&mut merged, overlay);
    merged
}

fn merge_into(target: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, value) in overlay {
        match target.get_mut(key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

fn merge_value(target: &mut Value, overlay: &Value) {
    match (target, overlay) {
        (Value::Object(existing), Value::Object(nested)) => merge_into(existing, nested),
        (Value::Array(existing), Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                match existing.get_mut(i) {
                    Some(slot) => merge_value(slot, item),
                    None => existing.push(item.clone()),
                }
            }
        }
        (target, overlay) => *target = overlay.clone(),
    }
}
