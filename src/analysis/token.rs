//! Token types for text analysis.
//!
//! # Examples
//!
//! ```
//! use faqrank::analysis::token::Token;
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! ```

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// Tokens keep their position in the original token stream so that ordering
/// is preserved through the pipeline; duplicates are retained.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}

/// A stream of tokens produced by a tokenizer or filter.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("search", 3);
        assert_eq!(token.text, "search");
        assert_eq!(token.position, 3);
    }

    #[test]
    fn test_token_equality() {
        assert_eq!(Token::new("a", 0), Token::new("a", 0));
        assert_ne!(Token::new("a", 0), Token::new("a", 1));
        assert_ne!(Token::new("a", 0), Token::new("b", 0));
    }
}
