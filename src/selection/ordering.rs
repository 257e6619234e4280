//! Orderings over word counts
//!
//! Plain functions so they can be handed to [`top_k`](fn@super::top_k) or
//! `sort_by` directly.

use crate::core::WordCount;
use std::cmp::Ordering;

/// Higher counts first; equal counts fall back to ascending key order
#[must_use]
pub fn by_count_desc(a: &WordCount, b: &WordCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Ascending key order
#[must_use]
pub fn by_key(a: &WordCount, b: &WordCount) -> Ordering {
    a.word.cmp(&b.word)
}
