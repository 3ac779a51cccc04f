//! # Error Types

use std::path::PathBuf;

/// Errors from textgrocer operations.
#[derive(Debug, thiserror::Error)]
pub enum GrocerError {
    /// A class id was outside the label table.
    #[error("class id ({id}) should be less than the number of classes ({num_classes})")]
    UnknownClassId {
        /// The offending class id.
        id: i64,

        /// The label table size at lookup time.
        num_classes: usize,
    },

    /// A snapshot resource does not exist.
    #[error("missing snapshot resource: {}", path.display())]
    MissingResource {
        /// The path which was expected to hold the resource.
        path: PathBuf,
    },

    /// A snapshot resource does not describe a valid id table.
    #[error("corrupt snapshot resource {resource:?}: {reason}")]
    CorruptResource {
        /// The resource name.
        resource: String,

        /// What was wrong with it.
        reason: String,
    },

    /// A token pattern failed to compile.
    #[error("invalid token pattern: {0}")]
    Pattern(String),

    /// Serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for textgrocer operations.
pub type GrocerResult<T> = core::result::Result<T, GrocerError>;
