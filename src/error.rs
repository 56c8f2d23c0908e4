//! Error types for Contar operations.
//!
//! Tokenization, vocabulary construction and counting cannot fail; the only
//! failure a caller sees is rejected input at the vectorizer boundary.

use thiserror::Error;

/// Main error type for Contar operations.
///
/// # Examples
///
/// ```
/// use contar::error::ContarError;
///
/// let err = ContarError::empty_corpus();
/// assert_eq!(err.to_string(), "corpus must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContarError {
    /// Input rejected before any state was touched.
    #[error("{message}")]
    InvalidInput {
        /// Human-readable reason
        message: String,
    },
}

impl ContarError {
    /// Error raised when a fit is attempted on a corpus with no documents.
    #[must_use]
    pub fn empty_corpus() -> Self {
        Self::empty_input("corpus")
    }

    /// Create an empty input error for an arbitrary context.
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::InvalidInput {
            message: format!("{context} must not be empty"),
        }
    }

    /// The message carried by this error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput { message } => message,
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for ContarError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ContarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corpus_display() {
        let err = ContarError::empty_corpus();
        assert_eq!(err.to_string(), "corpus must not be empty");
        assert_eq!(err.message(), "corpus must not be empty");
    }

    #[test]
    fn test_empty_corpus_is_invalid_input() {
        assert!(matches!(
            ContarError::empty_corpus(),
            ContarError::InvalidInput { .. }
        ));
    }

    #[test]
    fn test_empty_input_helper() {
        let err = ContarError::empty_input("document list");
        assert_eq!(err.to_string(), "document list must not be empty");
    }

    #[test]
    fn test_empty_input_matches_empty_corpus() {
        assert_eq!(ContarError::empty_input("corpus"), ContarError::empty_corpus());
    }

    #[test]
    fn test_error_eq_str() {
        let err = ContarError::empty_corpus();
        assert!(err == "corpus must not be empty");
    }

    #[test]
    fn test_error_source_is_none() {
        use std::error::Error;
        assert!(ContarError::empty_corpus().source().is_none());
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<ContarError>();
    }
}
