//! Line tokenizer
//!
//! Splits a line into maximal runs of separator and non-separator characters.

use super::SeparatorSet;

/// A single run extracted from a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A run of non-separator characters
    Word(&'a str),
    /// A run of separator characters
    Separator(&'a str),
}

impl<'a> Token<'a> {
    /// The text of the token, borrowed from the line
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match self {
            Self::Word(text) | Self::Separator(text) => *text,
        }
    }

    /// True for word tokens
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Word(_))
    }
}

/// Return the longest run starting at `start` made entirely of separators or
/// entirely of non-separators
///
/// `start` is a byte offset on a char boundary. The result is non-empty
/// whenever `start < line.len()`; at or past the end of the line (or off a char
/// boundary) the empty string is returned.
///
/// # Examples
/// ```
/// use tag_cloud::core::{SeparatorSet, next_word_or_separator};
///
/// let separators = SeparatorSet::default();
/// assert_eq!(next_word_or_separator("the cat", 0, &separators), "the");
/// assert_eq!(next_word_or_separator("the cat", 3, &separators), " ");
/// assert_eq!(next_word_or_separator("mat. the", 3, &separators), ". ");
/// ```
#[must_use]
pub fn next_word_or_separator<'a>(line: &'a str, start: usize, separators: &SeparatorSet) -> &'a str {
    let Some(rest) = line.get(start..) else {
        return "";
    };
    let Some(first) = rest.chars().next() else {
        return "";
    };

    let in_separator_run = separators.contains(first);
    let end = rest
        .char_indices()
        .find(|&(_, ch)| separators.contains(ch) != in_separator_run)
        .map_or(rest.len(), |(idx, _)| idx);

    &rest[..end]
}

/// Iterator over the tokens of a line
///
/// Concatenating every yielded token reproduces the line exactly.
pub struct Tokens<'a, 's> {
    line: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a, 's> Tokens<'a, 's> {
    /// Start tokenizing a line from its first character
    #[must_use]
    pub const fn new(line: &'a str, separators: &'s SeparatorSet) -> Self {
        Self {
            line,
            position: 0,
            separators,
        }
    }
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = next_word_or_separator(self.line, self.position, self.separators);
        if text.is_empty() {
            return None;
        }
        self.position += text.len();

        if self.separators.is_separator_token(text) {
            Some(Token::Separator(text))
        } else {
            Some(Token::Word(text))
        }
    }
}

/// Iterate over the word tokens of a line, skipping separator runs
pub fn words<'a>(line: &'a str, separators: &SeparatorSet) -> impl Iterator<Item = &'a str> {
    Tokens::new(line, separators)
        .filter(Token::is_word)
        .map(|token| token.text())
}
