//! Opening and counting input files

use crate::core::{SeparatorSet, WordCounts};
use crate::error::TagCloudError;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Word counts read from an input, plus the error that cut reading short
#[derive(Debug, Default)]
pub struct CountedInput {
    pub counts: WordCounts,
    /// Set when reading stopped early; `counts` holds what was read before it
    pub read_error: Option<io::Error>,
}

/// Count words from any reader, keeping partial counts on failure
pub fn count_reader<R: Read>(reader: R, separators: &SeparatorSet) -> CountedInput {
    let mut counts = WordCounts::new();
    let read_error = counts
        .extend_from_reader(BufReader::new(reader), separators)
        .err();
    CountedInput { counts, read_error }
}

/// Open an input file for reading
///
/// # Errors
/// Returns `TagCloudError::OpenInput` if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<File, TagCloudError> {
    File::open(path).map_err(|source| TagCloudError::OpenInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Create (or truncate) an output file
///
/// # Errors
/// Returns `TagCloudError::CreateOutput` if the file cannot be created.
pub fn create_output(path: &Path) -> Result<File, TagCloudError> {
    File::create(path).map_err(|source| TagCloudError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Count the words of a file, optionally showing a byte progress bar
///
/// # Errors
/// Returns `TagCloudError::OpenInput` if the file cannot be opened. Read
/// failures after opening are reported through [`CountedInput::read_error`].
pub fn count_file(
    path: &Path,
    separators: &SeparatorSet,
    show_progress: bool,
) -> Result<CountedInput, TagCloudError> {
    let file = open_input(path)?;

    let pb = if show_progress {
        let len = file.metadata().map(|m| m.len()).unwrap_or(0);
        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let counted = count_reader(pb.wrap_read(file), separators);
    pb.finish_and_clear();
    Ok(counted)
}
