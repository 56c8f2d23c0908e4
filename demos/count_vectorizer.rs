//! Count vectorizer walk-through.
//!
//! Fits a small corpus, shows how an empty corpus is rejected, and what the
//! feature names look like before any fit.
//!
//! Run with: `RUST_LOG=contar=debug cargo run --example count_vectorizer`

use contar::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Normal corpus ===");
    let corpus = ["asd, fgt opu!", "asdf", " 6-7 "];
    let mut vectorizer = CountVectorizer::new();
    match vectorizer.fit_transform(&corpus) {
        Ok(matrix) => {
            println!("Matrix     {:?}", matrix.rows());
            println!("Vocabulary {:?}", vectorizer.get_feature_names());
        }
        Err(e) => println!("Error: {e}"),
    }

    println!("\n=== Empty corpus ===");
    let empty: [&str; 0] = [];
    match vectorizer.fit_transform(&empty) {
        Ok(matrix) => println!("Matrix     {:?}", matrix.rows()),
        Err(e) => println!("Error: {e}"),
    }
    // The earlier fit is still in place
    println!("Vocabulary {:?}", vectorizer.get_feature_names());

    println!("\n=== Feature names before fitting ===");
    let mut vectorizer = CountVectorizer::new();
    println!("Vocabulary {:?}", vectorizer.get_feature_names());
    if let Ok(matrix) = vectorizer.fit_transform(&corpus) {
        println!("Matrix     {:?}", matrix.rows());
    }
    println!("Vocabulary {:?}", vectorizer.get_feature_names());

    println!("\n=== JSON ===");
    if let Some(fit) = vectorizer.fit_result() {
        let summary = serde_json::json!({
            "vocabulary": fit.vocabulary,
            "matrix": fit.matrix,
        });
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{text}"),
            Err(e) => println!("Error: {e}"),
        }
    }
}
