//! Punctuation-stripping word tokenizer.
//!
//! Documents are split on whitespace after every character of
//! [`PUNCTUATION`] has been replaced by a space. Tokens keep their case and
//! any character outside that set, so `"6-7"` and `"don"` survive intact
//! while `"don't"` becomes `["don", "t"]`.

use super::Tokenizer;

/// Characters removed from documents before splitting on whitespace.
pub const PUNCTUATION: [char; 10] = ['!', ',', '.', '?', '(', ')', ';', ':', '\'', '"'];

/// Tokenizer that treats [`PUNCTUATION`] like whitespace.
///
/// No case folding or Unicode normalization is applied; tokens compare by
/// exact string equality.
///
/// # Examples
///
/// ```
/// use contar::text::{Tokenizer, tokenize::PunctuationTokenizer};
///
/// let tokenizer = PunctuationTokenizer::new();
///
/// let tokens = tokenizer.tokenize("asd, fgt opu!");
/// assert_eq!(tokens, vec!["asd", "fgt", "opu"]);
///
/// // Hyphens are not punctuation here
/// let tokens = tokenizer.tokenize(" 6-7 ");
/// assert_eq!(tokens, vec!["6-7"]);
///
/// // Nothing but punctuation and whitespace
/// assert!(tokenizer.tokenize(" ,.  ").is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PunctuationTokenizer;

impl PunctuationTokenizer {
    /// Create a new punctuation tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Whether `c` is stripped from documents.
    ///
    /// ```
    /// use contar::text::tokenize::PunctuationTokenizer;
    ///
    /// assert!(PunctuationTokenizer::is_punctuation('\''));
    /// assert!(!PunctuationTokenizer::is_punctuation('-'));
    /// ```
    #[must_use]
    pub fn is_punctuation(c: char) -> bool {
        PUNCTUATION.contains(&c)
    }

    /// Whether `c` separates tokens.
    ///
    /// The ASCII information separators U+001C..=U+001F count as whitespace
    /// alongside Unicode `White_Space`.
    fn is_separator(c: char) -> bool {
        c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c) || Self::is_punctuation(c)
    }
}

impl Tokenizer for PunctuationTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        // Splitting on punctuation directly is equivalent to replacing it
        // with spaces first; empty fragments come from separator runs.
        text.split(Self::is_separator)
            .filter(|fragment| !fragment.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

/// Tokenize every document of `corpus`, preserving document order.
///
/// # Examples
///
/// ```
/// use contar::text::tokenize::{tokenize_corpus, PunctuationTokenizer};
///
/// let tokenized = tokenize_corpus(&PunctuationTokenizer::new(), &["a b.", "", "c"]);
/// assert_eq!(tokenized, vec![vec!["a", "b"], vec![], vec!["c"]]);
/// ```
pub fn tokenize_corpus<T, S>(tokenizer: &T, corpus: &[S]) -> Vec<Vec<String>>
where
    T: Tokenizer + ?Sized,
    S: AsRef<str>,
{
    corpus
        .iter()
        .map(|doc| tokenizer.tokenize(doc.as_ref()))
        .collect()
}
