//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types.

use core::fmt::Debug;

use crate::errors::GrocerError;

/// Label for regex patterns.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a pattern for the `regex` crate.
    Basic(String),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(String),

    /// This pattern will try the `regex` crate first,
    /// and fallback to `fancy_regex` if it fails.
    Adaptive(String),
}

impl<S: AsRef<str>> From<S> for RegexPattern {
    fn from(pattern: S) -> Self {
        Self::Adaptive(pattern.as_ref().to_string())
    }
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a [`RegexWrapper`].
    ///
    /// ## Returns
    /// The compiled wrapper; or [`GrocerError::Pattern`].
    pub fn compile(&self) -> Result<RegexWrapper, GrocerError> {
        let basic = |pattern: &str| {
            regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(|e| GrocerError::Pattern(e.to_string()))
        };
        let fancy = |pattern: &str| {
            fancy_regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(|e| GrocerError::Pattern(e.to_string()))
        };

        match self {
            Self::Basic(pattern) => basic(pattern),
            Self::Fancy(pattern) => fancy(pattern),
            Self::Adaptive(pattern) => basic(pattern).or_else(|_| fancy(pattern)),
        }
    }
}

/// Wrapper for regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Fancy`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Collect the text of every non-overlapping match in `haystack`.
    ///
    /// A `fancy_regex` runtime error (backtrack limit) ends the scan early;
    /// the matches found before it are kept.
    pub fn find_strings(
        &self,
        haystack: &str,
    ) -> Vec<String> {
        match self {
            Self::Basic(regex) => regex
                .find_iter(haystack)
                .map(|m| m.as_str().to_string())
                .collect(),
            Self::Fancy(regex) => {
                let mut found = Vec::new();
                for m in regex.find_iter(haystack) {
                    match m {
                        Ok(m) => found.push(m.as_str().to_string()),
                        Err(err) => {
                            log::warn!("token scan stopped early: {err}");
                            break;
                        }
                    }
                }
                found
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptive_compile() {
        let basic = RegexPattern::from(r"\w+").compile().unwrap();
        assert!(!basic.is_fancy());
        assert_eq!(basic.as_str(), r"\w+");

        // Look-ahead is not supported by `regex`.
        let fancy = RegexPattern::from(r"\w+(?=!)").compile().unwrap();
        assert!(fancy.is_fancy());
        assert_eq!(fancy.find_strings("hey you!"), vec!["you"]);
    }

    #[test]
    fn test_bad_pattern() {
        let res = RegexPattern::Basic(r"(".to_string()).compile();
        assert!(matches!(res, Err(GrocerError::Pattern(_))));

        let res = RegexPattern::from(r"(").compile();
        assert!(matches!(res, Err(GrocerError::Pattern(_))));
    }

    #[test]
    fn test_find_strings() {
        let re = RegexPattern::Fancy(r"\w+".to_string()).compile().unwrap();
        assert_eq!(re.find_strings("a bb  ccc"), vec!["a", "bb", "ccc"]);
    }
}
