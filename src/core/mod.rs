//! Core text types for tag clouds
//!
//! Separator sets, the line tokenizer and the word frequency accumulator.
//! Everything here is pure apart from reading from a caller-supplied `BufRead`.

mod separators;
mod tokenizer;
mod word_count;

pub use separators::{DEFAULT_SEPARATORS, SeparatorSet};
pub use tokenizer::{Token, Tokens, next_word_or_separator, words};
pub use word_count::{WordCount, WordCounts};
