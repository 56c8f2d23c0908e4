use super::*;

fn build(raw: &[&[&str]]) -> (Vocabulary, TermDocumentMatrix) {
    let tokenized: Vec<Vec<&str>> = raw.iter().map(|doc| doc.to_vec()).collect();
    let vocab = Vocabulary::build(&tokenized);
    let matrix = TermDocumentMatrix::build(&tokenized, &vocab);
    (vocab, matrix)
}

#[test]
fn test_build_counts_in_vocabulary_order() {
    let (vocab, matrix) = build(&[&["asd", "fgt", "opu"], &["asdf"], &["6-7"]]);
    assert_eq!(vocab.as_slice(), ["6-7", "asd", "asdf", "fgt", "opu"]);
    assert_eq!(
        matrix,
        vec![
            vec![0, 1, 0, 1, 1],
            vec![0, 0, 1, 0, 0],
            vec![1, 0, 0, 0, 0],
        ]
    );
}

#[test]
fn test_build_counts_repeats() {
    let (_, matrix) = build(&[&["fgt", "6-7", "fgt"]]);
    assert_eq!(matrix, vec![vec![1, 2]]);
}

#[test]
fn test_build_empty_document_row_is_zeroed() {
    let (vocab, matrix) = build(&[&["a"], &[]]);
    assert_eq!(matrix.row(1), Some(&[0][..]));
    assert_eq!(matrix.n_cols(), vocab.len());
}

#[test]
fn test_build_all_documents_empty() {
    let (vocab, matrix) = build(&[&[], &[], &[]]);
    assert!(vocab.is_empty());
    assert_eq!(matrix.n_rows(), 3);
    assert!(matrix.iter_rows().all(<[usize]>::is_empty));
    assert_eq!(matrix.shape(), (3, 0));
}

#[test]
fn test_build_ignores_tokens_outside_vocabulary() {
    let vocab = Vocabulary::build(&[vec!["a", "b"]]);
    let matrix = TermDocumentMatrix::build(&[vec!["a", "z", "z", "b", "a"]], &vocab);
    assert_eq!(matrix, vec![vec![2, 1]]);
}

#[test]
fn test_accessors() {
    let (_, matrix) = build(&[&["x", "y", "y"], &["y"]]);
    assert_eq!(matrix.shape(), (2, 2));
    assert_eq!(matrix.get(0, 1), Some(2));
    assert_eq!(matrix.get(1, 0), Some(0));
    assert_eq!(matrix.get(2, 0), None);
    assert_eq!(matrix.get(0, 5), None);
    assert_eq!(matrix.row(5), None);
    assert_eq!(matrix.rows().len(), 2);
}

#[test]
fn test_row_sums_match_token_counts() {
    let raw: &[&[&str]] = &[&["a", "b", "a"], &[], &["c"]];
    let (_, matrix) = build(raw);
    let expected: Vec<usize> = raw.iter().map(|doc| doc.len()).collect();
    assert_eq!(matrix.row_sums(), expected);
}

#[test]
fn test_into_rows() {
    let (_, matrix) = build(&[&["a"]]);
    let rows: Vec<Vec<usize>> = matrix.clone().into();
    assert_eq!(rows, matrix.into_rows());
}

#[test]
fn test_default_is_empty() {
    assert_eq!(TermDocumentMatrix::default().shape(), (0, 0));
}

#[test]
fn test_serializes_as_nested_arrays() {
    let (_, matrix) = build(&[&["b", "a", "b"], &[]]);
    let json = serde_json::to_string(&matrix).expect("serialize should succeed");
    assert_eq!(json, "[[1,2],[0,0]]");
}
