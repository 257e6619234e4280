//! Generic top-K selection

use std::cmp::Ordering;

/// Keep the first `k` elements of `items` under `order`, sorted by `order`
///
/// Returns `min(k, items.len())` elements. Partitions with
/// `select_nth_unstable_by` before sorting so only the kept prefix is sorted.
///
/// # Examples
/// ```
/// use tag_cloud::selection::top_k;
///
/// let largest = top_k(vec![4, 9, 1, 7, 3], 2, |a: &i32, b: &i32| b.cmp(a));
/// assert_eq!(largest, vec![9, 7]);
/// ```
#[must_use]
pub fn top_k<T, F>(mut items: Vec<T>, k: usize, mut order: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if k == 0 {
        return Vec::new();
    }
    if k < items.len() {
        items.select_nth_unstable_by(k, &mut order);
        items.truncate(k);
    }
    items.sort_unstable_by(order);
    items
}
