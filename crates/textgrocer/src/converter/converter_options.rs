//! # Converter Options

use crate::{
    errors::GrocerResult,
    segmentation::{DEFAULT_TOKEN_PATTERN, RegexPattern, RegexSegmenter},
};

/// Options for configuring a [`TextConverter`](crate::TextConverter).
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterOptions {
    /// The default segmenter's token pattern.
    pub token_pattern: RegexPattern,

    /// Lowercase text before tokenizing.
    pub lowercase: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            token_pattern: RegexPattern::Basic(DEFAULT_TOKEN_PATTERN.to_string()),
            lowercase: false,
        }
    }
}

impl ConverterOptions {
    /// Sets the default segmenter's token pattern.
    pub fn with_token_pattern<P: Into<RegexPattern>>(
        mut self,
        token_pattern: P,
    ) -> Self {
        self.token_pattern = token_pattern.into();
        self
    }

    /// Sets whether text is lowercased before tokenizing.
    ///
    /// This applies to caller-supplied tokenizers as well.
    pub fn with_lowercase(
        mut self,
        lowercase: bool,
    ) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Build the default segmenter.
    pub fn build_segmenter(&self) -> GrocerResult<RegexSegmenter> {
        RegexSegmenter::new(self.token_pattern.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::Tokenize;

    #[test]
    fn test_defaults() {
        let options = ConverterOptions::default();
        assert!(!options.lowercase);
        assert_eq!(options.token_pattern.as_str(), DEFAULT_TOKEN_PATTERN);
    }

    #[test]
    fn test_builders() {
        let options = ConverterOptions::default()
            .with_token_pattern(r"[a-z]+")
            .with_lowercase(true);

        assert!(options.lowercase);
        assert_eq!(options.token_pattern, RegexPattern::Adaptive(r"[a-z]+".to_string()));

        let seg = options.build_segmenter().unwrap();
        assert_eq!(seg.tokenize("ab1cd"), vec!["ab", "cd"]);
    }
}
