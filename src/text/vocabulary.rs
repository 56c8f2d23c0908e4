//! Sorted vocabulary of distinct corpus tokens.
//!
//! The vocabulary fixes the column order of the term-document matrix, so it
//! must be built before any document is counted.

use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct tokens of a tokenized corpus in ascending lexicographic order.
///
/// Ordering is by Unicode code point (byte order of the UTF-8 encoding),
/// which is what `str`'s `Ord` provides. Entries are unique.
///
/// # Examples
///
/// ```
/// use contar::text::vocabulary::Vocabulary;
///
/// let tokenized = vec![
///     vec!["fgt".to_string(), "asd".to_string()],
///     vec!["asd".to_string()],
///     vec![],
/// ];
/// let vocab = Vocabulary::build(&tokenized);
/// assert_eq!(vocab.as_slice(), ["asd", "fgt"]);
/// assert_eq!(vocab.index_of("fgt"), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Collect the union of all tokens in `tokenized` and sort it.
    ///
    /// Documents without tokens contribute nothing; a corpus made only of
    /// such documents yields an empty vocabulary.
    #[must_use]
    pub fn build<S: AsRef<str>>(tokenized: &[Vec<S>]) -> Self {
        let unique: BTreeSet<&str> = tokenized
            .iter()
            .flatten()
            .map(|token| token.as_ref())
            .collect();

        Self {
            terms: unique.into_iter().map(str::to_string).collect(),
        }
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no token was seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Tokens in column order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    /// Iterate over tokens in column order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }

    /// Token at column `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// Column of `token`, if present.
    #[must_use]
    pub fn index_of(&self, token: &str) -> Option<usize> {
        // Sorted and unique, so a binary search is exact.
        self.terms
            .binary_search_by(|term| term.as_str().cmp(token))
            .ok()
    }

    /// Whether `token` is part of the vocabulary.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.index_of(token).is_some()
    }

    /// Consume the vocabulary, returning its tokens in column order.
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.terms
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[String]> for Vocabulary {
    fn as_ref(&self) -> &[String] {
        &self.terms
    }
}

#[cfg(test)]
#[path = "vocabulary_tests.rs"]
mod tests;
