//! # faqrank
//!
//! A BM25 relevance-ranking engine for FAQ retrieval.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Deterministic BM25 scoring with configurable `k1`/`b` parameters
//! - Unicode-aware tokenization shared by indexing and querying
//! - Wholesale index rebuilds with atomic snapshot swaps, safe under
//!   concurrent readers
//! - Pluggable corpus providers (JSONL files, in-memory collections)
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use faqrank::corpus::{FaqDocument, StaticCorpus};
//! use faqrank::retrieval::retriever::Bm25Retriever;
//!
//! let corpus = StaticCorpus::new(vec![
//!     FaqDocument::new("1", "reset password", "use forgot password link"),
//!     FaqDocument::new("2", "billing cycle", "monthly invoice"),
//! ]);
//!
//! let retriever = Bm25Retriever::with_defaults(Arc::new(corpus)).unwrap();
//! let results = retriever.rank("password reset", Some(2)).unwrap();
//!
//! assert_eq!(results[0].document.id, "1");
//! assert!(results[0].score > 0.0);
//! ```

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod retrieval;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
