//! Property maps: dotted-key normalization and deep merge
//!
//! A [`PropertyMap`] is the structured payload of a log event. Callers may
//! spell nested fields either as nested objects or as dotted keys
//! (`"pet.name"`); [`normalize`] converts the latter into the former, and
//! [`deep_merge`] combines layered maps with deterministic precedence.

use serde_json::Value;

/// Ordered mapping from field name to JSON value.
///
/// Backed by `serde_json::Map` with the `preserve_order` feature enabled,
/// so iteration follows insertion order. Dotted-key precedence during
/// normalization is defined by that order.
pub type PropertyMap = serde_json::Map<String, Value>;

/// Convert dotted keys into nested objects.
///
/// Each top-level key containing `'.'` is split into segments and rebuilt
/// as a singly-nested object; the contributions of all keys are folded
/// together with [`deep_merge`] in insertion order, so a later key wins
/// when two keys describe the same leaf. Two dotted keys sharing a prefix
/// build nested siblings and both survive.
///
/// Only top-level keys are split; nested values pass through untouched.
/// A map without any dotted key is returned unchanged.
///
/// # Examples
///
/// ```
/// use ecs_logger_core::core::properties::{normalize, PropertyMap};
/// use serde_json::json;
///
/// let mut flat = PropertyMap::new();
/// flat.insert("pet.name".to_string(), json!("Barker"));
/// flat.insert("pet.species".to_string(), json!("dog"));
///
/// let nested = normalize(&flat);
/// assert_eq!(nested["pet"]["name"], json!("Barker"));
/// assert_eq!(nested["pet"]["species"], json!("dog"));
/// ```
pub fn normalize(map: &PropertyMap) -> PropertyMap {
    if !map.keys().any(|key| key.contains('.')) {
        return map.clone();
    }

    map.iter().fold(PropertyMap::new(), |nested, (key, value)| {
        deep_merge(&nested, &build_nested_object(key, value))
    })
}

/// Merge `overrides` onto `base`, recursing into object-valued keys.
///
/// A key present in only one input is copied as-is. When a key holds an
/// object in both inputs the objects are merged recursively; any other
/// collision is resolved in favor of `overrides`, discarding the base
/// value entirely.
///
/// Pure: neither input is mutated and the result is a new map, so a
/// scoped context can be merged on every emission without corruption.
pub fn deep_merge(base: &PropertyMap, overrides: &PropertyMap) -> PropertyMap {
    let mut merged = base.clone();
    for (key, value) in overrides {
        match (merged.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                let combined = deep_merge(existing, incoming);
                *existing = combined;
            }
            _ => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

/// Rebuild one dotted key as a singly-nested object,
/// `"a.b.c" -> {a: {b: {c: value}}}`.
fn build_nested_object(key: &str, value: &Value) -> PropertyMap {
    let mut object = PropertyMap::new();
    match key.split_once('.') {
        Some((head, rest)) => {
            object.insert(
                head.to_string(),
                Value::Object(build_nested_object(rest, value)),
            );
        }
        None => {
            object.insert(key.to_string(), value.clone());
        }
    }
    object
}
