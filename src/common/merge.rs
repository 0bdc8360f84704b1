//! Last-writer-wins merge helpers
//!
//! Used when folding fragments of desired state into each other. Only `dst`
//! is ever mutated.

use std::collections::HashMap;
use std::hash::Hash;

/// Copy every entry of `src` into `dst`, overwriting existing keys.
///
/// `dst` is allocated if it is `None` and `src` has entries. Keys missing
/// from `src` are left alone.
pub fn merge_map<K, V>(src: &HashMap<K, V>, dst: &mut Option<HashMap<K, V>>)
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    if src.is_empty() {
        return;
    }
    let dst = dst.get_or_insert_with(HashMap::new);
    for (k, v) in src {
        dst.insert(k.clone(), v.clone());
    }
}

/// Merge `src` into `dst` element by element.
///
/// `matches(src_item, dst_item)` decides whether two elements describe the
/// same entry. The first matching `dst` element is replaced in place,
/// otherwise the item is appended.
pub fn merge_list<E, F>(src: &[E], dst: &mut Vec<E>, matches: F)
where
    E: Clone,
    F: Fn(&E, &E) -> bool,
{
    for item in src {
        match dst.iter().position(|existing| matches(item, existing)) {
            Some(index) => dst[index] = item.clone(),
            None => dst.push(item.clone()),
        }
    }
}

/// [`merge_list`] with equality on an extracted key.
pub fn merge_list_by_key<E, K, F>(src: &[E], dst: &mut Vec<E>, key: F)
where
    E: Clone,
    K: PartialEq,
    F: Fn(&E) -> K,
{
    merge_list(src, dst, |a, b| key(a) == key(b));
}
