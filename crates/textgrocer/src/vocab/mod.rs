//! # Vocabulary
//!
//! This module provides the growing id tables.
//!
//! All tables share the [`IdTable`] policy: ids are dense, assigned in strict
//! first-occurrence order, never pruned, and replaced wholesale on load.
//!
//! * [`Vocabulary`] - ``{ String -> TokenId }``, with a reserved placeholder id `0`.
//! * [`LabelIndex`] - ``{ String -> LabelId }``, zero-based, with a `-1` sentinel
//!   for reverse lookups.
//!
//! The n-gram table lives with its generator, in [`crate::features`].

mod id_table;
mod label_index;
mod vocabulary;

#[doc(inline)]
pub use id_table::IdTable;
#[doc(inline)]
pub use label_index::{LabelIndex, NOT_IN_TRAINING, NOT_IN_TRAINING_ID};
#[doc(inline)]
pub use vocabulary::Vocabulary;
