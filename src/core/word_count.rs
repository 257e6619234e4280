//! Word frequency accumulator
//!
//! Counts lowercase words across an input stream.

use super::SeparatorSet;
use super::tokenizer::words;
use rustc_hash::FxHashMap;
use std::io::{self, BufRead};

/// A distinct word and the number of times it occurred
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    #[must_use]
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Mapping from lowercase word to occurrence count
///
/// Entries are created on first sight with a count of one and only ever
/// incremented afterwards.
#[derive(Debug, Clone, Default)]
pub struct WordCounts {
    counts: FxHashMap<String, usize>,
    total: usize,
}

impl WordCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a word, lowercasing it first
    pub fn add_word(&mut self, word: &str) {
        *self.counts.entry(word.to_lowercase()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Record every word token of a line
    ///
    /// # Examples
    /// ```
    /// use tag_cloud::core::{SeparatorSet, WordCounts};
    ///
    /// let mut counts = WordCounts::new();
    /// counts.add_line("The cat saw the dog.", &SeparatorSet::default());
    /// assert_eq!(counts.get("the"), 2);
    /// assert_eq!(counts.total(), 5);
    /// ```
    pub fn add_line(&mut self, line: &str, separators: &SeparatorSet) {
        for word in words(line, separators) {
            self.add_word(word);
        }
    }

    /// Count every line of a reader into this accumulator
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`, and invalid UTF-8 is replaced
    /// rather than rejected. On a read error counting stops; whatever was
    /// counted before the failure stays in `self`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the reader fails mid-stream.
    pub fn extend_from_reader<R: BufRead>(
        &mut self,
        mut reader: R,
        separators: &SeparatorSet,
    ) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }
            let text = String::from_utf8_lossy(&buf);
            for line in text.trim_end_matches('\n').split('\r') {
                self.add_line(line, separators);
            }
        }
    }

    /// Count an entire reader into a fresh accumulator
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the reader fails mid-stream.
    pub fn from_reader<R: BufRead>(reader: R, separators: &SeparatorSet) -> io::Result<Self> {
        let mut counts = Self::new();
        counts.extend_from_reader(reader, separators)?;
        Ok(counts)
    }

    /// Occurrences of a word (case-insensitive), zero if never seen
    #[must_use]
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of word tokens counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Iterate over `(word, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Consume the accumulator into its entries, in arbitrary order
    #[must_use]
    pub fn into_entries(self) -> Vec<WordCount> {
        self.counts
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    const SAMPLE: &str = "the cat sat on the mat. the cat ran.";

    fn count(text: &str) -> WordCounts {
        WordCounts::from_reader(Cursor::new(text), &SeparatorSet::default()).unwrap()
    }

    #[test]
    fn counts_sample_sentence() {
        let counts = count(SAMPLE);
        assert_eq!(counts.get("the"), 3);
        assert_eq!(counts.get("cat"), 2);
        for word in ["sat", "on", "mat", "ran"] {
            assert_eq!(counts.get(word), 1, "{word}");
        }
        assert_eq!(counts.len(), 6);
    }

    #[test]
    fn words_are_lowercased() {
        let counts = count("Apple APPLE apple aPPle");
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("apple"), 4);
        assert_eq!(counts.get("APPLE"), 4);
    }

    #[test]
    fn total_matches_word_tokens() {
        let separators = SeparatorSet::default();
        let text = "One fish, two fish;\nred fish -- blue fish!\n\n(the end)";
        let counts = count(text);

        let tokens: usize = text.lines().map(|line| words(line, &separators).count()).sum();
        assert_eq!(counts.total(), tokens);
        assert_eq!(counts.iter().map(|(_, c)| c).sum::<usize>(), tokens);
    }

    #[test]
    fn first_line_is_counted() {
        let counts = count("alpha\nbeta\n");
        assert_eq!(counts.get("alpha"), 1);
        assert_eq!(counts.get("beta"), 1);
    }

    #[test]
    fn words_do_not_join_across_lines() {
        let counts = count("foo\nbar");
        assert_eq!(counts.get("foobar"), 0);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn crlf_endings_are_stripped() {
        let counts = count("dog\r\ndog\r\n");
        assert_eq!(counts.get("dog"), 2);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn lone_carriage_returns_end_lines() {
        let counts = count("alpha\rbeta\ralpha\r\ngamma");
        assert_eq!(counts.get("alpha"), 2);
        assert_eq!(counts.get("beta"), 1);
        assert_eq!(counts.get("gamma"), 1);
        assert_eq!(counts.len(), 3);
        assert!(counts.iter().all(|(word, _)| !word.contains('\r')));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"good \xff bad\n";
        let counts = WordCounts::from_reader(bytes, &SeparatorSet::default()).unwrap();
        assert_eq!(counts.get("good"), 1);
        assert_eq!(counts.get("bad"), 1);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn empty_input() {
        let counts = count("");
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn custom_separators_change_words() {
        let separators = SeparatorSet::new(" ");
        let counts = WordCounts::from_reader(Cursor::new("end. end"), &separators).unwrap();
        assert_eq!(counts.get("end."), 1);
        assert_eq!(counts.get("end"), 1);
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("disk on fire"));
            }
            self.served = true;
            let chunk = b"kept words\n";
            buf[..chunk.len()].copy_from_slice(chunk);
            Ok(chunk.len())
        }
    }

    #[test]
    fn read_error_keeps_partial_counts() {
        let mut counts = WordCounts::new();
        let reader = io::BufReader::new(FailingReader { served: false });

        let result = counts.extend_from_reader(reader, &SeparatorSet::default());

        assert!(result.is_err());
        assert_eq!(counts.get("kept"), 1);
        assert_eq!(counts.get("words"), 1);
    }

    #[test]
    fn into_entries_preserves_counts() {
        let mut entries = count(SAMPLE).into_entries();
        entries.sort_by(|a, b| a.word.cmp(&b.word));
        assert_eq!(entries[0], WordCount::new("cat", 2));
        assert_eq!(entries.len(), 6);
    }
}
