//! Tag Cloud Generator
//!
//! Counts the words of a text, keeps the most frequent ones and renders them
//! as a static HTML tag cloud with font sizes scaled to frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use tag_cloud::core::{SeparatorSet, WordCounts};
//! use tag_cloud::render::{HtmlOptions, render_html};
//! use tag_cloud::selection::{RenderTable, TopWords};
//!
//! let mut counts = WordCounts::new();
//! counts.add_line("the cat sat on the mat. the cat ran.", &SeparatorSet::default());
//!
//! let table = RenderTable::from_top(TopWords::select(counts, 3));
//! let html = render_html(&table, "cats.txt", &HtmlOptions::default());
//! assert!(html.contains("<title>Top 3 words in cats.txt</title>"));
//! ```

// Separators, tokenizer and word counting
pub mod core;

// Top-K selection and ordering
pub mod selection;

// Font scaling and HTML output
pub mod render;

// Command implementations
pub mod commands;

// Error type
pub mod error;

// Terminal output formatting
pub mod output;

pub use error::TagCloudError;
