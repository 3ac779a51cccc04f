//! # Input / Output
//!
//! * [`snapshot`] - table persistence as JSON reverse arrays.
//! * [`text_src`] - delimited ``label<delimiter>text`` corpus reading.
//! * [`svmlight`] - LIBSVM / svmlight text export of a design matrix.

pub mod snapshot;
pub mod svmlight;
pub mod text_src;

#[doc(inline)]
pub use snapshot::{CLASS_MAP_RESOURCE, FEAT_GEN_RESOURCE, TEXT_PREP_RESOURCE};
#[doc(inline)]
pub use svmlight::write_svmlight;
#[doc(inline)]
pub use text_src::{DEFAULT_DELIMITER, read_text_src, read_text_src_path};
