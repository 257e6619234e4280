//! Word count preview command
//!
//! Counts an input file and reports its most frequent words without writing
//! any HTML.

use super::input::count_file;
use crate::core::SeparatorSet;
use crate::error::TagCloudError;
use crate::selection::TopWords;
use std::io;
use std::path::PathBuf;

/// Configuration for a count preview
#[derive(Debug, Clone)]
pub struct CountConfig {
    pub input: PathBuf,
    pub count: usize,
    pub separators: SeparatorSet,
    pub show_progress: bool,
}

impl CountConfig {
    #[must_use]
    pub fn new(input: impl Into<PathBuf>, count: usize) -> Self {
        Self {
            input: input.into(),
            count,
            separators: SeparatorSet::default(),
            show_progress: false,
        }
    }
}

/// Most frequent words of an input, highest count first
#[derive(Debug)]
pub struct CountResult {
    pub source_name: String,
    pub distinct_words: usize,
    pub total_words: usize,
    pub top: TopWords,
    pub read_error: Option<io::Error>,
}

/// Count an input file and select its top words
///
/// # Errors
/// Returns `TagCloudError::OpenInput` if the input cannot be opened.
pub fn count_top(config: &CountConfig) -> Result<CountResult, TagCloudError> {
    let counted = count_file(&config.input, &config.separators, config.show_progress)?;
    let distinct_words = counted.counts.len();
    let total_words = counted.counts.total();

    Ok(CountResult {
        source_name: config.input.display().to_string(),
        distinct_words,
        total_words,
        top: TopWords::select(counted.counts, config.count),
        read_error: counted.read_error,
    })
}
