//! Tokenizers: free text to normalized terms.
//!
//! [`TermTokenizer`] implements the engine's normalization policy
//! (lowercase, split on every non-alphanumeric character, drop empty
//! tokens). [`WhitespaceTokenizer`] is for input that is already
//! normalized.

use std::fmt;

/// Splits text into tokens.
///
/// Implementations are total: any input yields a (possibly empty)
/// token list. The `Send + Sync` bounds let a configured engine be
/// shared across threads.
pub trait Tokenizer: fmt::Debug + Send + Sync {
    /// Split `text` into tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Lowercases and splits on every non-alphanumeric character.
///
/// Runs of separators produce nothing, so delimited label text like
/// `"Action|Sci-Fi"` comes out as clean terms. Tokens keep digits:
/// `"1984"` survives as a term.
///
/// # Examples
///
/// ```
/// use sugerir::text::{TermTokenizer, Tokenizer};
///
/// let tokenizer = TermTokenizer::new();
/// assert_eq!(tokenizer.tokenize("Action|Sci-Fi"), vec!["action", "sci", "fi"]);
/// assert_eq!(tokenizer.tokenize("  ... "), Vec::<String>::new());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TermTokenizer;

impl TermTokenizer {
    /// Create a new term tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for TermTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Splits on whitespace and keeps tokens as-is.
///
/// For callers whose label field is already normalized; no lowercasing
/// and no punctuation handling happens here.
///
/// # Examples
///
/// ```
/// use sugerir::text::{Tokenizer, WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
/// assert_eq!(tokenizer.tokenize("action sci-fi"), vec!["action", "sci-fi"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
