//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use contar::prelude::*;
//! ```

pub use crate::error::{ContarError, Result};
pub use crate::text::matrix::TermDocumentMatrix;
pub use crate::text::tokenize::{tokenize_corpus, PunctuationTokenizer, PUNCTUATION};
pub use crate::text::vectorize::{CountVectorizer, FitResult};
pub use crate::text::vocabulary::Vocabulary;
pub use crate::text::Tokenizer;
