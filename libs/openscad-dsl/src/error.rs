//! # Persistence Errors
//!
//! Building and printing a model cannot fail. Writing the printed model to
//! storage can, and every such failure surfaces as a [`PersistenceError`]
//! naming the step that failed and carrying the underlying I/O error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while storing a printed model.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The output file could not be created or truncated.
    #[error("failed to open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was opened but writing its contents failed.
    #[error("failed to write to file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PersistenceError {
    /// Path of the file the failed operation targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            PersistenceError::Open { path, .. } | PersistenceError::Write { path, .. } => path,
        }
    }
}

/// Result type alias for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

// =============================================================================
// TESTS
// =============================================================================
