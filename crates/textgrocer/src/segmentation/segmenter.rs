//! # Text Segmenter

use crate::{
    errors::GrocerResult,
    segmentation::{RegexPattern, RegexWrapper},
};

/// Default token pattern.
///
/// * each Han ideograph is its own token;
/// * runs of other letters, marks, digits, and `_` are one token;
/// * any other non-space character is a single-character token.
pub const DEFAULT_TOKEN_PATTERN: &str =
    r"\p{Han}|[\p{L}\p{M}\p{N}_&&[^\p{Han}]]+|[^\s\p{L}\p{M}\p{N}_]";

/// Text to token sequence capability.
///
/// Implementations must be deterministic for a given text.
pub trait Tokenize {
    /// Split `text` into token strings.
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String>;
}

impl<F> Tokenize for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        self(text)
    }
}

/// Regex match segmenter; every match is a token, gaps are dropped.
#[derive(Debug, Clone)]
pub struct RegexSegmenter {
    regex: RegexWrapper,
}

impl RegexSegmenter {
    /// Build a segmenter for `pattern`.
    pub fn new<P: Into<RegexPattern>>(pattern: P) -> GrocerResult<Self> {
        Ok(Self {
            regex: pattern.into().compile()?,
        })
    }

    /// Build a segmenter for [`DEFAULT_TOKEN_PATTERN`].
    pub fn default_pattern() -> GrocerResult<Self> {
        Self::new(RegexPattern::Basic(DEFAULT_TOKEN_PATTERN.to_string()))
    }

    /// The compiled pattern.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }
}

impl Tokenize for RegexSegmenter {
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.regex.find_strings(text)
    }
}
