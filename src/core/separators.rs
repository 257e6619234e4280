//! Separator characters
//!
//! The fixed set of characters that delimit words and never appear inside one.

use rustc_hash::FxHashSet;

/// Characters treated as separators when no custom set is given
///
/// Space, tab, and common punctuation.
pub const DEFAULT_SEPARATORS: &str = " \t,.-:;/\"!?_@#$%&*[]()";

/// A set of separator characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: FxHashSet<char>,
}

impl SeparatorSet {
    /// Build a separator set from the characters of a string
    ///
    /// Duplicate characters are ignored.
    ///
    /// # Examples
    /// ```
    /// use tag_cloud::core::SeparatorSet;
    ///
    /// let separators = SeparatorSet::new(" ,");
    /// assert!(separators.contains(','));
    /// assert!(!separators.contains('.'));
    /// ```
    #[must_use]
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    /// Check whether a character is a separator
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Check whether a token is made only of separators
    ///
    /// The empty string counts as a separator token.
    #[must_use]
    pub fn is_separator_token(&self, token: &str) -> bool {
        token.chars().all(|ch| self.contains(ch))
    }

    /// Number of distinct separator characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True if the set has no separators at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_contains_whitespace_and_punctuation() {
        let separators = SeparatorSet::default();
        for ch in [' ', '\t', ',', '.', '-', ':', ';', '/', '"', '!', '?'] {
            assert!(separators.contains(ch), "{ch:?} should be a separator");
        }
        for ch in ['_', '@', '#', '$', '%', '&', '*', '[', ']', '(', ')'] {
            assert!(separators.contains(ch), "{ch:?} should be a separator");
        }
    }

    #[test]
    fn default_excludes_letters_digits_and_apostrophe() {
        let separators = SeparatorSet::default();
        assert!(!separators.contains('a'));
        assert!(!separators.contains('Z'));
        assert!(!separators.contains('7'));
        assert!(!separators.contains('\''));
    }

    #[test]
    fn default_len_counts_distinct_chars() {
        assert_eq!(SeparatorSet::default().len(), DEFAULT_SEPARATORS.chars().count());
    }

    #[test]
    fn duplicates_collapse() {
        let separators = SeparatorSet::new("  ,,");
        assert_eq!(separators.len(), 2);
    }

    #[test]
    fn separator_token_detection() {
        let separators = SeparatorSet::default();
        assert!(separators.is_separator_token(""));
        assert!(separators.is_separator_token(" "));
        assert!(separators.is_separator_token(". "));
        assert!(!separators.is_separator_token("cat"));
        assert!(!separators.is_separator_token("a."));
    }

    #[test]
    fn empty_set() {
        let separators = SeparatorSet::new("");
        assert!(separators.is_empty());
        assert!(!separators.contains(' '));
    }
}
