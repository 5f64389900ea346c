//! Text analysis pipeline shared by indexing and querying.
//!
//! Analysis turns raw text into a stream of normalized tokens. The same
//! pipeline is applied to documents at index-build time and to queries at
//! rank time, so a query term can only match a document term if both were
//! normalized identically.
//!
//! # Pipeline
//!
//! 1. [`tokenizer::WordTokenizer`] - extracts maximal runs of word characters
//! 2. [`token_filter::LowercaseFilter`] - lowercases every token
//!
//! # Examples
//!
//! ```
//! use faqrank::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let terms = analyzer.terms("How do I reset my Password?!").unwrap();
//!
//! assert_eq!(terms, vec!["how", "do", "i", "reset", "my", "password"]);
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
