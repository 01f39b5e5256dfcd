//! Recursive override merge of two [`Value`] trees.
//!
//! Rules, applied at every level:
//!
//! - **Mapping + Mapping**: key union. Keys present on both sides merge
//!   recursively; keys present on one side are kept as-is.
//! - **Sequence + Sequence**: positional merge. Index `i` of the result is the
//!   deep merge of both elements when both are mappings, otherwise the
//!   override's element. The longer side supplies the tail.
//! - **Anything else**: the override replaces the base outright.
//!
//! Both trees are taken by value. Subtrees that do not change are moved into
//! the result rather than copied, and the caller can never observe a
//! half-merged input.

use crate::types::{Mapping, Value};

/// Merge `overlay` on top of `base`.
///
/// Never fails: mismatched shapes resolve in favour of `overlay`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use ymerge_core::{merge, Value};
///
/// let base = Value::from(json!({"a": 1, "b": {"x": 1}}));
/// let overlay = Value::from(json!({"b": {"y": 2}, "c": 3}));
/// assert_eq!(
///     merge(base, overlay),
///     Value::from(json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3}))
/// );
/// ```
pub fn merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base), Value::Mapping(overlay)) => {
            Value::Mapping(merge_mappings(base, overlay))
        }
        (Value::Sequence(base), Value::Sequence(overlay)) => {
            Value::Sequence(merge_sequences(base, overlay))
        }
        (_, overlay) => overlay,
    }
}

/// Fold `documents` left to right with [`merge`], seeded by the first one.
///
/// Returns `None` when there is nothing to fold. The order is significant:
/// merge is neither commutative nor associative.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use ymerge_core::{merge_all, Value};
///
/// let docs = [
///     json!({"server": {"port": 80, "flags": ["a", "b"]}}),
///     json!({"server": {"port": 443}}),
///     json!({"server": {"flags": ["x"]}}),
/// ];
/// let merged = merge_all(docs.into_iter().map(Value::from)).unwrap();
/// assert_eq!(
///     merged,
///     Value::from(json!({"server": {"port": 443, "flags": ["x", "b"]}}))
/// );
/// ```
pub fn merge_all<I>(documents: I) -> Option<Value>
where
    I: IntoIterator<Item = Value>,
{
    documents.into_iter().reduce(merge)
}

/// Key union of two mappings. Base keys keep their position; keys only in
/// `overlay` are appended in overlay order.
fn merge_mappings(mut base: Mapping, overlay: Mapping) -> Mapping {
    for (key, value) in overlay {
        match base.get_mut(&key) {
            Some(slot) => {
                let prior = std::mem::take(slot);
                *slot = merge(prior, value);
            }
            None => {
                base.insert(key, value);
            }
        }
    }
    base
}

/// Index-aligned merge. Only mapping pairs are merged element-wise; nested
/// sequences and scalars at the same index are replaced by the override.
fn merge_sequences(mut base: Vec<Value>, overlay: Vec<Value>) -> Vec<Value> {
    if base.is_empty() {
        return overlay;
    }
    if overlay.is_empty() {
        return base;
    }

    let mut overlay = overlay.into_iter();
    // `zip` polls `base` first, so no overlay element is lost once base runs out.
    for (slot, value) in base.iter_mut().zip(overlay.by_ref()) {
        *slot = match (std::mem::take(slot), value) {
            (Value::Mapping(prior), Value::Mapping(value)) => {
                Value::Mapping(merge_mappings(prior, value))
            }
            (_, value) => value,
        };
    }
    base.extend(overlay);
    base
}
