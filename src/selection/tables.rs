//! Selected word tables
//!
//! [`TopWords`] holds the most frequent words in count order; [`RenderTable`]
//! holds the same entries in key order together with the count range used for
//! font scaling.

use super::ordering::{by_count_desc, by_key};
use super::top_k::top_k;
use crate::core::{WordCount, WordCounts};

/// The `n` most frequent words, highest count first
///
/// Every count here is at least as large as every count left out, and ties are
/// resolved toward the lexicographically smaller word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopWords {
    entries: Vec<WordCount>,
}

impl TopWords {
    /// Select the `n` most frequent words
    ///
    /// # Examples
    /// ```
    /// use tag_cloud::core::{SeparatorSet, WordCounts};
    /// use tag_cloud::selection::TopWords;
    ///
    /// let mut counts = WordCounts::new();
    /// counts.add_line("b a b c b a", &SeparatorSet::default());
    ///
    /// let top = TopWords::select(counts, 2);
    /// let words: Vec<&str> = top.entries().iter().map(|e| e.word.as_str()).collect();
    /// assert_eq!(words, vec!["b", "a"]);
    /// ```
    #[must_use]
    pub fn select(counts: WordCounts, n: usize) -> Self {
        Self {
            entries: top_k(counts.into_entries(), n, by_count_desc),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest selected count
    #[must_use]
    pub fn max_count(&self) -> Option<usize> {
        self.entries.first().map(|entry| entry.count)
    }

    /// Smallest selected count
    #[must_use]
    pub fn min_count(&self) -> Option<usize> {
        self.entries.last().map(|entry| entry.count)
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<WordCount> {
        self.entries
    }
}

/// Selected words in ascending key order, ready for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderTable {
    entries: Vec<WordCount>,
    max_count: Option<usize>,
    min_count: Option<usize>,
}

impl RenderTable {
    /// Re-order a selection alphabetically, remembering its count range
    #[must_use]
    pub fn from_top(top: TopWords) -> Self {
        let max_count = top.max_count();
        let min_count = top.min_count();

        let mut entries = top.into_entries();
        entries.sort_unstable_by(by_key);

        Self {
            entries,
            max_count,
            min_count,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest count in the table, `None` when empty
    #[must_use]
    pub const fn max_count(&self) -> Option<usize> {
        self.max_count
    }

    /// Smallest count in the table, `None` when empty
    #[must_use]
    pub const fn min_count(&self) -> Option<usize> {
        self.min_count
    }
}

impl From<TopWords> for RenderTable {
    fn from(top: TopWords) -> Self {
        Self::from_top(top)
    }
}
