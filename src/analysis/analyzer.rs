//! Analyzer implementations combining tokenizers and filters.
//!
//! An analyzer runs the full analysis pipeline on a piece of text. The
//! [`StandardAnalyzer`] is the single tokenization authority in faqrank: the
//! index builder and the query path both go through it, which keeps index
//! terms and query terms comparable.
//!
//! # Examples
//!
//! ```
//! use faqrank::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Reset my Password!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "reset");
//! assert_eq!(tokens[2].text, "password");
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, TokenFilter};
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::error::Result;

/// Trait for analyzers that run the full text analysis pipeline.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Analyze the given text and collect the token texts.
    ///
    /// Convenience for callers that only need term strings, such as the index
    /// builder and the scorer.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}

/// The standard analyzer: word tokenization followed by lowercasing.
///
/// Empty or separator-only input yields an empty stream; analysis never fails
/// on input content.
pub struct StandardAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn TokenFilter>>,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer.
    pub fn new() -> Result<Self> {
        Ok(StandardAnalyzer {
            tokenizer: Arc::new(WordTokenizer::new()?),
            filters: vec![Arc::new(LowercaseFilter::new())],
        })
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut stream = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            stream = filter.filter(stream)?;
        }
        Ok(stream)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
