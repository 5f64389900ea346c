//! Top-K BM25 retrieval over a corpus provider.
//!
//! [`Bm25Retriever`] owns the index lifecycle: it builds an index lazily from
//! its corpus provider on first use, rebuilds on explicit request, and ranks
//! queries against the current index snapshot. Rebuilds swap in a fully built
//! index atomically, so concurrent readers always observe either the old or
//! the new index, never a mix.
//!
//! # Examples
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
//! let results = retriever.rank("how do I reset my password", Some(1)).unwrap();
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].document.id, "1");
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::config::RetrieverConfig;
use crate::corpus::{CorpusProvider, FaqDocument};
use crate::error::Result;
use crate::retrieval::index::FaqIndex;
use crate::retrieval::scorer::Bm25Scorer;

/// A single ranked result: a document and its BM25 score.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredFaq {
    /// The matched FAQ document.
    pub document: FaqDocument,

    /// The BM25 relevance score. Higher means more relevant; `0.0` when no
    /// query term matches the document.
    pub score: f64,
}

/// BM25 retriever orchestrating index builds and ranking queries.
///
/// The retriever starts uninitialized and transitions to built on the first
/// rank call or on an explicit build; it never refreshes implicitly after
/// that. Staleness is the caller's responsibility: call [`Bm25Retriever::build`]
/// to pick up corpus changes.
pub struct Bm25Retriever {
    provider: Arc<dyn CorpusProvider>,
    analyzer: StandardAnalyzer,
    config: RetrieverConfig,
    index: RwLock<Option<Arc<FaqIndex>>>,
}

impl Bm25Retriever {
    /// Create a new retriever over the given corpus provider.
    ///
    /// The configuration is validated up front; invalid `k1`/`b` values are
    /// rejected here rather than producing bad scores later.
    pub fn new(provider: Arc<dyn CorpusProvider>, config: RetrieverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Bm25Retriever {
            provider,
            analyzer: StandardAnalyzer::new()?,
            config,
            index: RwLock::new(None),
        })
    }

    /// Create a new retriever with the default configuration.
    pub fn with_defaults(provider: Arc<dyn CorpusProvider>) -> Result<Self> {
        Self::new(provider, RetrieverConfig::default())
    }

    /// Get the retriever configuration.
    pub fn config(&self) -> &RetrieverConfig {
        &self.config
    }

    /// Check whether an index has been built.
    pub fn is_built(&self) -> bool {
        self.index.read().is_some()
    }

    /// (Re)build the index from a fresh corpus snapshot.
    ///
    /// Loads the provider's current documents and replaces any prior index.
    /// The new index is built before the swap; readers never see partial
    /// state.
    pub fn build(&self) -> Result<()> {
        let documents = self.provider.load()?;
        self.build_from(documents)
    }

    /// (Re)build the index from a caller-supplied snapshot.
    pub fn build_from(&self, documents: Vec<FaqDocument>) -> Result<()> {
        let built = Arc::new(FaqIndex::build(documents, &self.analyzer)?);
        *self.index.write() = Some(built);
        Ok(())
    }

    /// Rank the corpus against `query` and return the top `top_k` results.
    ///
    /// Builds the index from the provider if none exists yet; an existing
    /// index is never refreshed implicitly, even if the underlying corpus
    /// changed. Results are sorted by score descending; documents with equal
    /// scores keep their corpus insertion order. The result length is
    /// `min(top_k, corpus size)`.
    ///
    /// `top_k` defaults to the configured `default_top_k`. A `top_k` of zero
    /// returns an empty result set.
    pub fn rank(&self, query: &str, top_k: Option<usize>) -> Result<Vec<ScoredFaq>> {
        let index = self.snapshot()?;
        let k = top_k.unwrap_or(self.config.default_top_k);
        if k == 0 {
            return Ok(Vec::new());
        }

        let query_terms = self.analyzer.terms(query)?;
        debug!(
            query_terms = query_terms.len(),
            top_k = k,
            doc_count = index.len(),
            "ranking query"
        );

        let scorer = Bm25Scorer::new(&index, self.config.k1, self.config.b);
        let mut scored: Vec<(usize, f64)> = (0..index.len())
            .map(|i| (i, scorer.score(&query_terms, i)))
            .collect();

        // Stable sort keeps corpus insertion order among equal scores.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(k);

        Ok(scored
            .into_iter()
            .map(|(i, score)| ScoredFaq {
                document: index.documents()[i].clone(),
                score,
            })
            .collect())
    }

    /// Get the current index, building it from the provider if absent.
    fn snapshot(&self) -> Result<Arc<FaqIndex>> {
        {
            let guard = self.index.read();
            if let Some(index) = guard.as_ref() {
                return Ok(Arc::clone(index));
            }
        }

        let documents = self.provider.load()?;
        let built = Arc::new(FaqIndex::build(documents, &self.analyzer)?);

        // Another thread may have finished a build while we were loading;
        // keep whichever index is installed first.
        let mut slot = self.index.write();
        Ok(Arc::clone(slot.get_or_insert(built)))
    }
}

impl std::fmt::Debug for Bm25Retriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bm25Retriever")
            .field("config", &self.config)
            .field("built", &self.is_built())
            .finish()
    }
}
