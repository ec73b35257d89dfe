use bytes::Bytes;
use thiserror::Error;

/// A transformed chunk: same index and byte count as its input, payload
/// replaced by the backend's output.
#[derive(Debug, Clone)]
pub struct CipherResult {
    pub index: u64,
    pub data: Bytes,
}

impl CipherResult {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Cipher boundary failure. Fatal in every case: a silently skipped or
/// mis-sized chunk would corrupt the output stream.
#[derive(Debug, Error)]
pub enum CipherDispatchError {
    /// The backend could not be reached or refused the dispatch.
    #[error("cipher backend '{backend}' unavailable: {reason}")]
    Unavailable {
        backend: &'static str,
        reason: String,
    },

    /// The backend returned a result whose length differs from the input
    /// chunk. The byte-count-preserving contract is broken.
    #[error("cipher backend '{backend}' returned {actual} bytes for chunk {index}, expected {expected}")]
    SizeMismatch {
        backend: &'static str,
        index: u64,
        expected: usize,
        actual: usize,
    },

    /// Backend-internal failure with context.
    #[error("cipher failure in backend '{backend}' on chunk {index}: {reason}")]
    Failure {
        backend: &'static str,
        index: u64,
        reason: String,
    },
}
