//! Text vectorization: tokenization, vocabulary and term-document counting.
//!
//! The pipeline runs in three steps, each usable on its own:
//!
//! 1. [`tokenize`] splits documents into word tokens.
//! 2. [`vocabulary`] collects the sorted set of distinct tokens.
//! 3. [`matrix`] counts each vocabulary token per document.
//!
//! [`vectorize::CountVectorizer`] composes the three and keeps the result.
//!
//! # Examples
//!
//! ```
//! use contar::text::{Tokenizer, tokenize::PunctuationTokenizer};
//!
//! let tokens = PunctuationTokenizer::new().tokenize("Hello, world!");
//! assert_eq!(tokens, vec!["Hello", "world"]);
//! ```

pub mod matrix;
pub mod tokenize;
pub mod vectorize;
pub mod vocabulary;

/// Splits a single document into word tokens.
///
/// Implementations must be pure: the same text always yields the same
/// tokens, in occurrence order.
pub trait Tokenizer {
    /// Tokenize `text` into an ordered list of tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;
}
