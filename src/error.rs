//! Error type for tag cloud generation

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while building a tag cloud
#[derive(Debug)]
pub enum TagCloudError {
    /// The input file could not be opened
    OpenInput { path: PathBuf, source: io::Error },
    /// The output file could not be created
    CreateOutput { path: PathBuf, source: io::Error },
    /// Writing the output failed part way through
    Write { path: PathBuf, source: io::Error },
    /// The requested word count is not an integer
    InvalidWordCount(String),
    /// The requested word count is negative
    NegativeWordCount(i64),
    /// The font range has `min > max`
    InvalidFontRange { min: u32, max: u32 },
    /// Standard input could not be read while prompting
    Prompt(io::Error),
}

impl fmt::Display for TagCloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenInput { path, source } => {
                write!(f, "Error opening the input file {}: {source}", path.display())
            }
            Self::CreateOutput { path, source } => {
                write!(f, "Error opening the output file {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Error writing {}: {source}", path.display())
            }
            Self::InvalidWordCount(text) => {
                write!(f, "Number of words must be a whole number, got '{text}'")
            }
            Self::NegativeWordCount(n) => {
                write!(f, "Number of words cannot be negative, got {n}")
            }
            Self::InvalidFontRange { min, max } => {
                write!(f, "Minimum font size {min} is larger than maximum {max}")
            }
            Self::Prompt(source) => write!(f, "Error reading standard input: {source}"),
        }
    }
}

impl std::error::Error for TagCloudError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OpenInput { source, .. }
            | Self::CreateOutput { source, .. }
            | Self::Write { source, .. }
            | Self::Prompt(source) => Some(source),
            _ => None,
        }
    }
}

/// Parse a requested word count
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// Returns `NegativeWordCount` for negative integers and `InvalidWordCount`
/// for anything that is not an integer.
///
/// # Examples
/// ```
/// use tag_cloud::error::{TagCloudError, parse_word_count};
///
/// assert_eq!(parse_word_count(" 25 ").unwrap(), 25);
/// assert!(matches!(parse_word_count("-3"), Err(TagCloudError::NegativeWordCount(-3))));
/// assert!(matches!(parse_word_count("lots"), Err(TagCloudError::InvalidWordCount(_))));
/// ```
pub fn parse_word_count(text: &str) -> Result<usize, TagCloudError> {
    let trimmed = text.trim();
    if let Ok(n) = trimmed.parse::<usize>() {
        return Ok(n);
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n < 0 => Err(TagCloudError::NegativeWordCount(n)),
        _ => Err(TagCloudError::InvalidWordCount(trimmed.to_string())),
    }
}
