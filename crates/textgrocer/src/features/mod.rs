//! # Feature Generation
//!
//! A document's features are the counts of its unigrams and adjacent-pair
//! bigrams, over token ids; keyed by [`NGram`], in one shared id space.

mod feature_generator;
mod ngram;

#[doc(inline)]
pub use feature_generator::{FeatureGenerator, SparseFeatureMap};
#[doc(inline)]
pub use ngram::NGram;
