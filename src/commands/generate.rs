//! Tag cloud generation command
//!
//! Reads an input text, selects the most frequent words and writes the HTML
//! tag cloud.

use super::input::{CountedInput, count_file, count_reader, create_output};
use crate::core::SeparatorSet;
use crate::error::TagCloudError;
use crate::render::{HtmlOptions, write_html};
use crate::selection::{RenderTable, TopWords};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

/// Configuration for generating a tag cloud file
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of words to show
    pub count: usize,
    pub separators: SeparatorSet,
    pub html: HtmlOptions,
    pub show_progress: bool,
}

impl GenerateConfig {
    #[must_use]
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, count: usize) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            count,
            separators: SeparatorSet::default(),
            html: HtmlOptions::default(),
            show_progress: false,
        }
    }

    /// Name shown in the document title
    #[must_use]
    pub fn source_name(&self) -> String {
        self.input.display().to_string()
    }
}

/// Outcome of building a tag cloud
#[derive(Debug)]
pub struct CloudSummary {
    pub source_name: String,
    pub distinct_words: usize,
    pub total_words: usize,
    pub table: RenderTable,
    /// Set when the input could only be partly read
    pub read_error: Option<io::Error>,
}

impl CloudSummary {
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.read_error.is_some()
    }
}

/// Select and render already-counted input
///
/// # Errors
/// Returns any error from the writer.
pub fn render_counted<W: Write>(
    counted: CountedInput,
    out: &mut W,
    source_name: &str,
    count: usize,
    options: &HtmlOptions,
) -> io::Result<CloudSummary> {
    let CountedInput { counts, read_error } = counted;
    let distinct_words = counts.len();
    let total_words = counts.total();

    let table = RenderTable::from_top(TopWords::select(counts, count));
    write_html(out, &table, source_name, options)?;
    out.flush()?;

    Ok(CloudSummary {
        source_name: source_name.to_string(),
        distinct_words,
        total_words,
        table,
        read_error,
    })
}

/// Run the whole pipeline over in-memory streams
///
/// Read failures stop counting and are kept in the summary; the cloud is
/// still rendered from the words read so far.
///
/// # Errors
/// Returns any error from the writer.
///
/// # Examples
/// ```
/// use tag_cloud::commands::build_cloud;
/// use tag_cloud::core::SeparatorSet;
/// use tag_cloud::render::HtmlOptions;
///
/// let mut html = Vec::new();
/// let summary = build_cloud(
///     "to be or not to be".as_bytes(),
///     &mut html,
///     "hamlet.txt",
///     2,
///     &SeparatorSet::default(),
///     &HtmlOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(summary.table.len(), 2);
/// assert!(String::from_utf8(html).unwrap().contains("Top 2 words in hamlet.txt"));
/// ```
pub fn build_cloud<R: Read, W: Write>(
    reader: R,
    out: &mut W,
    source_name: &str,
    count: usize,
    separators: &SeparatorSet,
    options: &HtmlOptions,
) -> io::Result<CloudSummary> {
    let counted = count_reader(reader, separators);
    render_counted(counted, out, source_name, count, options)
}

/// Generate a tag cloud file from `config`
///
/// The input is opened before the output is created, so a missing input never
/// truncates an existing output file.
///
/// # Errors
///
/// Returns an error if:
/// - The input file cannot be opened
/// - The output file cannot be created
/// - Writing the output fails
pub fn generate(config: &GenerateConfig) -> Result<CloudSummary, TagCloudError> {
    let counted = count_file(&config.input, &config.separators, config.show_progress)?;

    let file = create_output(&config.output)?;
    let mut out = BufWriter::new(file);

    render_counted(
        counted,
        &mut out,
        &config.source_name(),
        config.count,
        &config.html,
    )
    .map_err(|source| TagCloudError::Write {
        path: config.output.clone(),
        source,
    })
}
