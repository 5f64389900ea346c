//! Corpus documents and providers.
//!
//! The ranking engine consumes snapshots of FAQ documents supplied by a
//! [`CorpusProvider`]. Providers own document data and may be queried again to
//! refresh the index; the engine never mutates document content.
//!
//! # Examples
//!
//! ```
//! use faqrank::corpus::{CorpusProvider, FaqDocument, StaticCorpus};
//!
//! let corpus = StaticCorpus::new(vec![FaqDocument::new(
//!     "1",
//!     "reset password",
//!     "use forgot password link",
//! )]);
//!
//! let documents = corpus.load().unwrap();
//! assert_eq!(documents.len(), 1);
//! assert_eq!(documents[0].id, "1");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod loader;

pub use loader::JsonlCorpus;

/// A single FAQ entry: a question and its canonical answer.
///
/// Identity is `id`; the corpus provider is responsible for supplying a
/// consistent set. Documents are read-only from the ranking engine's
/// perspective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqDocument {
    /// Stable identifier of the entry.
    pub id: String,

    /// The question text.
    pub question: String,

    /// The answer text.
    pub answer: String,
}

impl FaqDocument {
    /// Create a new FAQ document.
    pub fn new<S: Into<String>>(id: S, question: S, answer: S) -> Self {
        FaqDocument {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// The text that gets indexed for this document: question and answer
    /// joined by a single space.
    pub fn indexed_text(&self) -> String {
        format!("{} {}", self.question, self.answer)
    }
}

/// Trait for corpus providers that supply document snapshots on demand.
///
/// `load` returns a point-in-time snapshot; callers that need freshness must
/// load again and rebuild explicitly.
pub trait CorpusProvider: Send + Sync {
    /// Load a snapshot of all documents.
    fn load(&self) -> Result<Vec<FaqDocument>>;
}

/// An in-memory corpus provider backed by a fixed document list.
///
/// Useful for tests and for callers that manage corpus loading themselves.
#[derive(Clone, Debug, Default)]
pub struct StaticCorpus {
    documents: Vec<FaqDocument>,
}

impl StaticCorpus {
    /// Create a new static corpus from the given documents.
    pub fn new(documents: Vec<FaqDocument>) -> Self {
        StaticCorpus { documents }
    }
}

impl CorpusProvider for StaticCorpus {
    fn load(&self) -> Result<Vec<FaqDocument>> {
        Ok(self.documents.clone())
    }
}
