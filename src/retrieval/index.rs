//! Statistical index over a corpus snapshot.
//!
//! The index holds everything BM25 scoring needs: the documents themselves,
//! per-document term statistics, corpus-wide document frequencies, and the
//! average document length. It is built wholesale from one snapshot and never
//! patched incrementally, so its statistics are always consistent as a unit.
//!
//! # Examples
//!
//! ```
//! use faqrank::analysis::analyzer::StandardAnalyzer;
//! use faqrank::corpus::FaqDocument;
//! use faqrank::retrieval::index::FaqIndex;
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let index = FaqIndex::build(
//!     vec![FaqDocument::new("1", "reset password", "use forgot password link")],
//!     &analyzer,
//! )
//! .unwrap();
//!
//! assert_eq!(index.len(), 1);
//! assert_eq!(index.doc_freq("password"), 1);
//! assert_eq!(index.avg_doc_len(), 6.0);
//! ```

use ahash::AHashMap;
use tracing::info;

use crate::analysis::analyzer::Analyzer;
use crate::corpus::FaqDocument;
use crate::error::Result;

/// Term statistics for a single document.
///
/// Term frequencies are precomputed at build time as a fixed map keyed by
/// token, rather than recounted on every score call.
#[derive(Clone, Debug, Default)]
pub struct DocStats {
    /// Number of tokens in the document.
    pub length: usize,

    /// Term frequency: token -> occurrence count within the document.
    pub term_freq: AHashMap<String, u32>,
}

impl DocStats {
    fn from_terms(terms: Vec<String>) -> Self {
        let length = terms.len();
        let mut term_freq = AHashMap::new();
        for term in terms {
            *term_freq.entry(term).or_insert(0) += 1;
        }
        DocStats { length, term_freq }
    }
}

/// An immutable statistical index over one corpus snapshot.
///
/// Positions are internal document indices: `documents()[i]` and `stats(i)`
/// describe the same document.
#[derive(Clone, Debug)]
pub struct FaqIndex {
    documents: Vec<FaqDocument>,
    doc_stats: Vec<DocStats>,
    doc_freq: AHashMap<String, u32>,
    avg_doc_len: f64,
}

impl FaqIndex {
    /// Build an index from a corpus snapshot.
    ///
    /// Each document's question and answer are analyzed as one text. Document
    /// frequency counts each document at most once per token, regardless of
    /// repeated occurrences. The average document length is `0.0` for an
    /// empty corpus.
    pub fn build(documents: Vec<FaqDocument>, analyzer: &dyn Analyzer) -> Result<FaqIndex> {
        let mut doc_stats = Vec::with_capacity(documents.len());
        let mut doc_freq: AHashMap<String, u32> = AHashMap::new();
        let mut total_len: usize = 0;

        for document in &documents {
            let stats = DocStats::from_terms(analyzer.terms(&document.indexed_text())?);
            total_len += stats.length;
            for term in stats.term_freq.keys() {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
            doc_stats.push(stats);
        }

        let avg_doc_len = if documents.is_empty() {
            0.0
        } else {
            total_len as f64 / documents.len() as f64
        };

        info!(
            doc_count = documents.len(),
            vocabulary = doc_freq.len(),
            avg_doc_len,
            "FAQ index built"
        );

        Ok(FaqIndex {
            documents,
            doc_stats,
            doc_freq,
            avg_doc_len,
        })
    }

    /// Number of documents in the index.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the index contains no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The indexed documents, in snapshot order.
    pub fn documents(&self) -> &[FaqDocument] {
        &self.documents
    }

    /// Term statistics for the document at internal index `i`.
    pub fn stats(&self, i: usize) -> &DocStats {
        &self.doc_stats[i]
    }

    /// Number of documents containing `term` at least once.
    pub fn doc_freq(&self, term: &str) -> u32 {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms across the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.doc_freq.len()
    }

    /// Average document length in tokens (`0.0` for an empty corpus).
    pub fn avg_doc_len(&self) -> f64 {
        self.avg_doc_len
    }
}
