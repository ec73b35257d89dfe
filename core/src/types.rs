use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::chunking::AllocationError;
use crate::cipher::CipherDispatchError;
use crate::writer::WriteError;

/// Unified pipeline error covering I/O, allocation, cipher dispatch, and
/// positioned-write failures.
///
/// - Ergonomic `From<T>` impls enable `?` across the pipeline.
/// - I/O and write variants carry the failing path and operation so a failed
///   run names its file instead of surfacing a bare OS error.
/// - A run surfaces exactly one of these; there is no partial-success mode.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// File open/read failure, with the operation and path that failed.
    #[error("I/O error while {} {}: {source}", op, path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    /// Memory exhaustion or invalid geometry while building the chunk set.
    #[error("allocation error: {0}")]
    Allocation(#[from] AllocationError),

    /// Cipher backend unavailable or contract violation. Fatal: a missing or
    /// mis-sized chunk cannot be skipped without corrupting the stream.
    #[error("cipher dispatch error: {0}")]
    CipherDispatch(#[from] CipherDispatchError),

    /// Positioned write incomplete after the retry budget, with the output path.
    #[error("write error on {}: {source}", path.display())]
    Write { path: PathBuf, source: WriteError },

    /// Generic high-level validation with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}

impl PipelineError {
    /// Attach operation and path context to a raw I/O error.
    pub fn io(op: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        PipelineError::Io {
            op,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Attach the output path to a writer error.
    pub fn write(path: impl AsRef<Path>, source: WriteError) -> Self {
        PipelineError::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
