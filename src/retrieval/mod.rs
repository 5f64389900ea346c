//! BM25 retrieval: statistical index, scorer, and top-K ranking.
//!
//! The retrieval core is split into three layers:
//!
//! - [`index::FaqIndex`] - immutable corpus statistics built wholesale from a
//!   snapshot
//! - [`scorer::Bm25Scorer`] - per-document BM25 scoring against an index
//! - [`retriever::Bm25Retriever`] - build/rank orchestration with atomic
//!   index swaps

pub mod index;
pub mod retriever;
pub mod scorer;

pub use index::FaqIndex;
pub use retriever::{Bm25Retriever, ScoredFaq};
pub use scorer::Bm25Scorer;
