//! # N-gram Keys

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::TokenId;

/// A unigram ``(a,)`` or bigram ``(a, b)`` key over token ids.
///
/// Ordering is tuple ordering: by first token, then unigrams before the
/// bigrams which extend them, then by second token.
/// ``(1,) < (1, 1) < (1, 2) < (2,)``.
///
/// Serialized as a 1- or 2-element list: `[a]` or `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Vec<TokenId>", try_from = "Vec<TokenId>")]
pub struct NGram {
    /// The first token.
    pub first: TokenId,

    /// The second token; `None` for unigrams.
    pub second: Option<TokenId>,
}

impl NGram {
    /// Build a unigram key.
    pub fn unigram(token: TokenId) -> Self {
        Self {
            first: token,
            second: None,
        }
    }

    /// Build a bigram key.
    pub fn bigram(
        first: TokenId,
        second: TokenId,
    ) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }

    /// Is this a unigram?
    pub fn is_unigram(&self) -> bool {
        self.second.is_none()
    }

    /// The number of tokens in the key.
    pub fn order(&self) -> usize {
        if self.is_unigram() { 1 } else { 2 }
    }
}

impl From<NGram> for Vec<TokenId> {
    fn from(ngram: NGram) -> Self {
        match ngram.second {
            None => vec![ngram.first],
            Some(second) => vec![ngram.first, second],
        }
    }
}

impl TryFrom<Vec<TokenId>> for NGram {
    type Error = String;

    fn try_from(tokens: Vec<TokenId>) -> Result<Self, Self::Error> {
        match tokens.as_slice() {
            &[a] => Ok(Self::unigram(a)),
            &[a, b] => Ok(Self::bigram(a, b)),
            _ => Err(format!(
                "n-gram keys have 1 or 2 tokens, found {}",
                tokens.len()
            )),
        }
    }
}

impl fmt::Display for NGram {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.second {
            None => write!(f, "({},)", self.first),
            Some(second) => write!(f, "({}, {})", self.first, second),
        }
    }
}
