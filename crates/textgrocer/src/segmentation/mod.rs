//! # Text Segmentation
//!
//! The converter depends only on the [`Tokenize`] capability, ``text -> tokens``.
//!
//! * [`RegexSegmenter`] - the default; every regex match is a token.
//! * any ``Fn(&str) -> Vec<String>`` - a caller-supplied override.
//!
//! Patterns follow the [`RegexPattern`] labeling: written for [`regex`],
//! written for [`fancy_regex`], or adaptive (try basic; then fall-up to fancy).

mod regex_wrapper;
mod segmenter;

#[doc(inline)]
pub use regex_wrapper::{RegexPattern, RegexWrapper};
#[doc(inline)]
pub use segmenter::{DEFAULT_TOKEN_PATTERN, RegexSegmenter, Tokenize};
