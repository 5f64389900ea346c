//! Configuration for the BM25 retriever.
//!
//! # Examples
//!
//! ```
//! use faqrank::config::RetrieverConfig;
//!
//! let config = RetrieverConfig::default();
//! assert_eq!(config.k1, 1.5);
//! assert_eq!(config.b, 0.75);
//! assert_eq!(config.default_top_k, 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{FaqRankError, Result};

/// Configuration for BM25 scoring and result selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrieverConfig {
    /// K1 parameter for BM25 (term frequency saturation).
    pub k1: f64,

    /// B parameter for BM25 (document length normalization), in `[0, 1]`.
    pub b: f64,

    /// Number of results returned when a rank call does not specify one.
    pub default_top_k: usize,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        RetrieverConfig {
            k1: 1.5,
            b: 0.75,
            default_top_k: 5,
        }
    }
}

impl RetrieverConfig {
    /// Validate the configuration.
    ///
    /// `k1` must be non-negative and finite; `b` must lie in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !self.k1.is_finite() || self.k1 < 0.0 {
            return Err(FaqRankError::invalid_config(format!(
                "k1 must be a non-negative finite number, got {}",
                self.k1
            )));
        }
        if !self.b.is_finite() || !(0.0..=1.0).contains(&self.b) {
            return Err(FaqRankError::invalid_config(format!(
                "b must be in [0, 1], got {}",
                self.b
            )));
        }
        Ok(())
    }
}
