//! # Record Conversion
//!
//! [`TextConverter`] owns the growing tables, and drives the pipeline:
//! ``text -> tokens -> token ids -> n-gram counts -> matrix row``.
//!
//! Corpus conversion emits a [`DesignMatrix`] whose columns are then
//! renumbered into canonical [`NGram`](crate::NGram) order.

mod converter_options;
mod design_matrix;
mod text_converter;

#[doc(inline)]
pub use converter_options::ConverterOptions;
#[doc(inline)]
pub use design_matrix::{DesignMatrix, MatrixBuilder};
#[doc(inline)]
pub use text_converter::{ConversionReport, ConvertedCorpus, TextConverter};
