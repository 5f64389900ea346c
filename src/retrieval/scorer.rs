//! BM25 scoring against a built index.
//!
//! Implements the standard BM25 ranking function:
//!
//! ```text
//! idf(q)  = ln(1 + (N - df(q) + 0.5) / (df(q) + 0.5))
//! score   = sum over distinct query terms of
//!           idf(q) * tf(q, d) * (k1 + 1) / (tf(q, d) + k1 * (1 - b + b * dl / avgdl))
//! ```
//!
//! Scoring is total: an empty query, unknown terms, or an empty corpus all
//! yield `0.0` rather than an error.

use ahash::AHashSet;

use crate::retrieval::index::FaqIndex;

/// A BM25 scorer borrowing an index and scoring parameters.
///
/// # Examples
///
/// ```
/// use faqrank::analysis::analyzer::StandardAnalyzer;
/// use faqrank::corpus::FaqDocument;
/// use faqrank::retrieval::index::FaqIndex;
/// use faqrank::retrieval::scorer::Bm25Scorer;
///
/// let analyzer = StandardAnalyzer::new().unwrap();
/// let index = FaqIndex::build(
///     vec![FaqDocument::new("1", "reset password", "use forgot password link")],
///     &analyzer,
/// )
/// .unwrap();
///
/// let scorer = Bm25Scorer::new(&index, 1.5, 0.75);
/// let score = scorer.score(&["password".to_string()], 0);
/// assert!(score > 0.0);
/// ```
#[derive(Debug)]
pub struct Bm25Scorer<'a> {
    index: &'a FaqIndex,
    k1: f64,
    b: f64,
}

impl<'a> Bm25Scorer<'a> {
    /// Create a new scorer over `index` with the given parameters.
    pub fn new(index: &'a FaqIndex, k1: f64, b: f64) -> Self {
        Bm25Scorer { index, k1, b }
    }

    /// Get the k1 parameter.
    pub fn k1(&self) -> f64 {
        self.k1
    }

    /// Get the b parameter.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Score the document at internal index `doc` against the query terms.
    ///
    /// Each distinct query term contributes once; terms with zero document
    /// frequency are skipped (their contribution is provably zero). The
    /// result is a finite, non-negative number, `0.0` when nothing matches.
    pub fn score(&self, query_terms: &[String], doc: usize) -> f64 {
        let stats = self.index.stats(doc);
        let dl = stats.length as f64;

        // Empty-corpus and empty-document guards
        let n = self.index.len().max(1) as f64;
        let avgdl = if self.index.avg_doc_len() == 0.0 {
            1.0
        } else {
            self.index.avg_doc_len()
        };

        let mut seen: AHashSet<&str> = AHashSet::with_capacity(query_terms.len());
        let mut score = 0.0;

        for term in query_terms {
            if !seen.insert(term.as_str()) {
                continue;
            }

            let df = self.index.doc_freq(term);
            if df == 0 {
                continue;
            }

            let df = f64::from(df);
            let idf = (1.0 + (n - df + 0.5) / (df + 0.5)).ln();

            let tf = f64::from(stats.term_freq.get(term).copied().unwrap_or(0));
            let mut denom = tf + self.k1 * (1.0 - self.b + self.b * dl / avgdl);
            if denom == 0.0 {
                denom = 1.0;
            }

            score += idf * tf * (self.k1 + 1.0) / denom;
        }

        score
    }
}
