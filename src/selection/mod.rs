//! Word selection
//!
//! Picks the most frequent words from a [`WordCounts`](crate::core::WordCounts)
//! and arranges them for rendering.

pub mod ordering;
mod tables;
mod top_k;

pub use ordering::{by_count_desc, by_key};
pub use tables::{RenderTable, TopWords};
pub use top_k::top_k;
