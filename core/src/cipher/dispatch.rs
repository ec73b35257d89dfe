//! Dispatch glue between the pipeline and a [`ChunkCipher`] backend.
//!
//! Enforces the boundary contract the backends promise: the result carries
//! the input chunk's index and exactly its byte count. A mismatch is fatal —
//! a silent size drift here would shift every higher-offset chunk in the
//! output file.

use crate::chunking::Chunk;
use crate::cipher::keys::KeyMaterial;
use crate::cipher::types::{CipherDispatchError, CipherResult};
use crate::cipher::ChunkCipher;

/// Which way the pipeline is running. Both directions share the same
/// dispatch contract and the same size invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherDirection {
    Encrypt,
    Decrypt,
}

impl CipherDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherDirection::Encrypt => "encrypt",
            CipherDirection::Decrypt => "decrypt",
        }
    }
}

/// Present one chunk to the backend and validate the returned size.
///
/// The chunk moves in and is dropped here; only the transformed payload
/// travels on. Safe to call concurrently for different chunks — the backend
/// sees shared read-only key material and derives per-chunk state from the
/// index alone.
pub fn dispatch_chunk(
    cipher: &dyn ChunkCipher,
    direction: CipherDirection,
    chunk: Chunk,
    keys: &KeyMaterial,
) -> Result<CipherResult, CipherDispatchError> {
    let expected = chunk.len();
    let index = chunk.index;

    let data = match direction {
        CipherDirection::Encrypt => cipher.encrypt_chunk(&chunk.data, keys, index)?,
        CipherDirection::Decrypt => cipher.decrypt_chunk(&chunk.data, keys, index)?,
    };

    if data.len() != expected {
        return Err(CipherDispatchError::SizeMismatch {
            backend: cipher.name(),
            index,
            expected,
            actual: data.len(),
        });
    }

    Ok(CipherResult { index, data })
}
