//! Contar: bag-of-words count vectorization in pure Rust.
//!
//! Contar turns a corpus of documents into a term-document matrix: each
//! document is stripped of punctuation and split on whitespace, the distinct
//! tokens of the whole corpus are sorted into a vocabulary, and every
//! document becomes a row of per-token counts in vocabulary order.
//!
//! # Quick Start
//!
//! ```
//! use contar::prelude::*;
//!
//! let corpus = ["asd, fgt opu!", "asdf", " 6-7 ", " ,.  "];
//!
//! let mut vectorizer = CountVectorizer::new();
//! let matrix = vectorizer.fit_transform(&corpus).unwrap();
//!
//! assert_eq!(vectorizer.get_feature_names(), ["6-7", "asd", "asdf", "fgt", "opu"]);
//! assert_eq!(matrix.shape(), (4, 5));
//! assert_eq!(matrix.row(3), Some(&[0, 0, 0, 0, 0][..]));
//! ```
//!
//! # Modules
//!
//! - [`text`]: Tokenization, vocabulary, matrix construction and the vectorizer
//! - [`error`]: Error type and `Result` alias
//! - [`prelude`]: One-line imports
//!
//! # Logging
//!
//! Fitting emits [`tracing`] events at `debug` and `trace` level; install a
//! subscriber in the host application to see them.

pub mod error;
pub mod prelude;
pub mod text;

pub use error::{ContarError, Result};
pub use text::matrix::TermDocumentMatrix;
pub use text::vectorize::CountVectorizer;
pub use text::vocabulary::Vocabulary;
