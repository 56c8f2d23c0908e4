//! Term-document count matrix.

use super::vocabulary::Vocabulary;
use serde::Serialize;

/// Per-document token counts, one row per document and one column per
/// vocabulary entry.
///
/// Every row has exactly as many entries as the vocabulary it was built
/// against, including rows for documents with no tokens.
///
/// # Examples
///
/// ```
/// use contar::text::matrix::TermDocumentMatrix;
/// use contar::text::vocabulary::Vocabulary;
///
/// let tokenized = vec![vec!["b", "a", "b"], vec![]];
/// let vocab = Vocabulary::build(&tokenized);
/// let matrix = TermDocumentMatrix::build(&tokenized, &vocab);
///
/// assert_eq!(matrix, vec![vec![1, 2], vec![0, 0]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TermDocumentMatrix {
    rows: Vec<Vec<usize>>,
}

impl TermDocumentMatrix {
    /// Count each vocabulary token in each document of `tokenized`.
    ///
    /// Tokens missing from `vocabulary` are not counted. Row order follows
    /// `tokenized`, column order follows `vocabulary`.
    #[must_use]
    pub fn build<S: AsRef<str>>(tokenized: &[Vec<S>], vocabulary: &Vocabulary) -> Self {
        let n_cols = vocabulary.len();
        let rows = tokenized
            .iter()
            .map(|doc| {
                let mut row = vec![0; n_cols];
                for token in doc {
                    if let Some(col) = vocabulary.index_of(token.as_ref()) {
                        row[col] += 1;
                    }
                }
                row
            })
            .collect();

        Self { rows }
    }

    /// Number of documents.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of vocabulary columns.
    ///
    /// Zero when there are no rows, since the width is carried by the rows.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// `(n_rows, n_cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    /// Counts for document `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[usize]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Count of column `col` in document `row`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        self.rows.get(row)?.get(col).copied()
    }

    /// All rows in document order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Iterate over rows in document order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Total token count of each document.
    #[must_use]
    pub fn row_sums(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.iter().sum()).collect()
    }

    /// Consume the matrix, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<usize>> {
        self.rows
    }
}

impl PartialEq<Vec<Vec<usize>>> for TermDocumentMatrix {
    fn eq(&self, other: &Vec<Vec<usize>>) -> bool {
        self.rows == *other
    }
}

impl From<TermDocumentMatrix> for Vec<Vec<usize>> {
    fn from(matrix: TermDocumentMatrix) -> Self {
        matrix.rows
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
