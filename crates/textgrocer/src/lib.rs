//! # `textgrocer` Text Feature Conversion
//!
//! This crate turns labeled text records into a sparse unigram+bigram count
//! matrix for a linear classifier; and keeps the token, n-gram, and label
//! numbering reproducible, so that the same feature space can be reapplied
//! to unseen text after a snapshot has been saved and reloaded.
//!
//! See:
//! * [`vocab`] for the growing id tables ([`Vocabulary`], [`LabelIndex`]).
//! * [`features`] for unigram/bigram feature generation.
//! * [`segmentation`] for the default tokenizer, and the [`Tokenize`] override seam.
//! * [`converter`] for record and corpus conversion into a [`DesignMatrix`].
//! * [`io`] for snapshot persistence, corpus reading, and LIBSVM export.
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all `HashMap` implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs. Enabled by default.
//!
//! #### feature: ``foldhash``
//!
//! Alternative to ``ahash``. If both are enabled, ``ahash`` wins.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Converting A Corpus
//!
//! ```rust,no_run
//! use textgrocer::TextConverter;
//!
//! fn example() -> textgrocer::GrocerResult<()> {
//!     let mut converter = TextConverter::new()?;
//!
//!     let records = vec![
//!         vec!["pos", "good good"],
//!         vec!["bad-row"],
//!         vec!["neg", "bad"],
//!     ];
//!     let corpus = converter.convert_corpus(&records);
//!     assert_eq!(corpus.matrix.rows(), 2);
//!     assert_eq!(corpus.labels, vec![0, 1]);
//!
//!     converter.save("model-dir")?;
//!
//!     let mut restored = TextConverter::new()?;
//!     restored.load("model-dir")?;
//!     let features = restored.text_to_features("good");
//!     assert_eq!(features.len(), 1);
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod converter;
pub mod errors;
pub mod features;
pub mod io;
pub mod segmentation;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use converter::{ConvertedCorpus, ConversionReport, ConverterOptions, DesignMatrix, TextConverter};
#[doc(inline)]
pub use errors::{GrocerError, GrocerResult};
#[doc(inline)]
pub use features::{FeatureGenerator, NGram, SparseFeatureMap};
#[doc(inline)]
pub use segmentation::{RegexSegmenter, Tokenize};
#[doc(inline)]
pub use types::{FeatureId, LabelId, TokenId};
#[doc(inline)]
pub use vocab::{LabelIndex, Vocabulary};
