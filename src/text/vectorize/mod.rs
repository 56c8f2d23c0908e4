//! Bag-of-words vectorization.
//!
//! [`CountVectorizer`] tokenizes a corpus, learns its sorted vocabulary and
//! counts every vocabulary token per document in a single call.
//!
//! # Examples
//!
//! ```
//! use contar::text::vectorize::CountVectorizer;
//!
//! let corpus = ["asd, fgt opu!", "asdf", " 6-7 "];
//!
//! let mut vectorizer = CountVectorizer::new();
//! let matrix = vectorizer.fit_transform(&corpus).expect("fit_transform should succeed");
//!
//! assert_eq!(
//!     vectorizer.get_feature_names(),
//!     ["6-7", "asd", "asdf", "fgt", "opu"]
//! );
//! assert_eq!(
//!     matrix,
//!     vec![
//!         vec![0, 1, 0, 1, 1],
//!         vec![0, 0, 1, 0, 0],
//!         vec![1, 0, 0, 0, 0],
//!     ]
//! );
//! ```

use crate::error::{ContarError, Result};
use crate::text::matrix::TermDocumentMatrix;
use crate::text::tokenize::{tokenize_corpus, PunctuationTokenizer};
use crate::text::vocabulary::Vocabulary;
use tracing::{debug, trace, warn};

/// Everything learned from one corpus.
///
/// Produced as a unit by [`CountVectorizer::fit_transform`] and replaced as
/// a unit on the next successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitResult {
    /// Copy of the documents the vectorizer was fitted on
    pub input_corpus: Vec<String>,
    /// Tokens of each document, in document order
    pub tokenized_corpus: Vec<Vec<String>>,
    /// Sorted distinct tokens; the matrix column order
    pub vocabulary: Vocabulary,
    /// Token counts per document
    pub matrix: TermDocumentMatrix,
}

impl FitResult {
    fn compute<S: AsRef<str>>(tokenizer: &PunctuationTokenizer, corpus: &[S]) -> Self {
        let input_corpus: Vec<String> = corpus
            .iter()
            .map(|doc| doc.as_ref().to_string())
            .collect();
        let tokenized_corpus = tokenize_corpus(tokenizer, &input_corpus);
        let vocabulary = Vocabulary::build(&tokenized_corpus);
        let matrix = TermDocumentMatrix::build(&tokenized_corpus, &vocabulary);

        Self {
            input_corpus,
            tokenized_corpus,
            vocabulary,
            matrix,
        }
    }
}

/// Count vectorizer that converts text to a term-document count matrix.
///
/// Each [`fit_transform`](Self::fit_transform) call is a full fit on its own
/// input: previous state is discarded, never extended. There is no separate
/// `transform` against an earlier vocabulary.
///
/// # Examples
///
/// ```
/// use contar::text::vectorize::CountVectorizer;
///
/// let mut vectorizer = CountVectorizer::new();
///
/// // Nothing learned yet
/// assert!(vectorizer.get_feature_names().is_empty());
///
/// let err = vectorizer.fit_transform::<&str>(&[]).unwrap_err();
/// assert_eq!(err.to_string(), "corpus must not be empty");
/// assert!(!vectorizer.is_fitted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer {
    tokenizer: PunctuationTokenizer,
    fitted: Option<FitResult>,
}

impl CountVectorizer {
    /// Create a new, unfitted `CountVectorizer`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn the vocabulary of `corpus` and return its count matrix.
    ///
    /// # Arguments
    ///
    /// * `corpus` - Documents to vectorize, at least one
    ///
    /// # Returns
    ///
    /// * `Ok(TermDocumentMatrix)` - `corpus.len()` rows by vocabulary-size columns
    /// * `Err(ContarError::InvalidInput)` - If `corpus` is empty
    ///
    /// # Errors
    ///
    /// Fails with "corpus must not be empty" when `corpus` has no documents.
    /// A failed call leaves the previous fit untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::text::vectorize::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new();
    /// let matrix = vectorizer
    ///     .fit_transform(&["asd, fgt opu! asdf", "asdf", " 6-7 fgt, fgt"])
    ///     .expect("fit_transform should succeed");
    ///
    /// assert_eq!(matrix.row(2), Some(&[1, 0, 0, 2, 0][..]));
    /// ```
    pub fn fit_transform<S: AsRef<str>>(&mut self, corpus: &[S]) -> Result<TermDocumentMatrix> {
        if corpus.is_empty() {
            warn!("rejecting fit on empty corpus");
            return Err(ContarError::empty_corpus());
        }

        debug!(documents = corpus.len(), "fitting count vectorizer");
        let fit = FitResult::compute(&self.tokenizer, corpus);
        trace!(tokenized = ?fit.tokenized_corpus, "tokenized corpus");
        debug!(
            vocabulary_size = fit.vocabulary.len(),
            shape = ?fit.matrix.shape(),
            "built term-document matrix"
        );

        let matrix = fit.matrix.clone();
        self.fitted = Some(fit);
        Ok(matrix)
    }

    /// Vocabulary learned by the most recent successful fit.
    ///
    /// Empty before any successful [`fit_transform`](Self::fit_transform);
    /// use [`is_fitted`](Self::is_fitted) to tell that apart from a corpus
    /// that produced no tokens.
    #[must_use]
    pub fn get_feature_names(&self) -> &[String] {
        match &self.fitted {
            Some(fit) => fit.vocabulary.as_slice(),
            None => &[],
        }
    }

    /// Whether a fit has succeeded.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Full state of the most recent successful fit.
    #[must_use]
    pub fn fit_result(&self) -> Option<&FitResult> {
        self.fitted.as_ref()
    }

    /// Documents of the most recent successful fit.
    #[must_use]
    pub fn input_corpus(&self) -> Option<&[String]> {
        self.fitted.as_ref().map(|fit| fit.input_corpus.as_slice())
    }

    /// Tokens of each document of the most recent successful fit.
    #[must_use]
    pub fn tokenized_corpus(&self) -> Option<&[Vec<String>]> {
        self.fitted
            .as_ref()
            .map(|fit| fit.tokenized_corpus.as_slice())
    }

    /// Vocabulary of the most recent successful fit.
    #[must_use]
    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.fitted.as_ref().map(|fit| &fit.vocabulary)
    }

    /// Matrix of the most recent successful fit.
    #[must_use]
    pub fn matrix(&self) -> Option<&TermDocumentMatrix> {
        self.fitted.as_ref().map(|fit| &fit.matrix)
    }
}
