//! Cipher dispatch boundary.
//!
//! The pipeline never sees cipher internals: it hands a chunk, the shared
//! key material, and the chunk's index across [`ChunkCipher`] and gets an
//! equal-sized transformed chunk back. The index feeds a counter-style
//! per-chunk derivation inside the backend, so no chunk's transform depends
//! on another chunk's output — the property that makes concurrent dispatch
//! (and accelerator offload) valid in the first place.
//!
//! Backends in this crate:
//! - [`KeystreamCipher`] — software reference backend (keyed BLAKE3 XOF
//!   keystream). Accelerator-resident transforms plug in behind the same
//!   trait.
//! - [`NullCipher`] — pass-through, for exercising the pipeline and writer
//!   without a transform in the way.

pub mod dispatch;
pub mod keys;
pub mod keystream;
pub mod types;

pub use dispatch::{dispatch_chunk, CipherDirection};
pub use keys::KeyMaterial;
pub use keystream::KeystreamCipher;
pub use types::{CipherDispatchError, CipherResult};

use bytes::Bytes;

/// A chunk-granular, byte-count-preserving cipher capability.
///
/// Contract:
/// - same input chunk + key material + index ⇒ same output chunk;
/// - output length equals input length (verified again at the dispatch
///   boundary; a mismatch aborts the run);
/// - safe to invoke concurrently for different chunks over shared read-only
///   [`KeyMaterial`].
pub trait ChunkCipher: Send + Sync {
    /// Stable backend name for error reporting.
    fn name(&self) -> &'static str;

    fn encrypt_chunk(
        &self,
        plaintext: &[u8],
        keys: &KeyMaterial,
        chunk_index: u64,
    ) -> Result<Bytes, CipherDispatchError>;

    fn decrypt_chunk(
        &self,
        ciphertext: &[u8],
        keys: &KeyMaterial,
        chunk_index: u64,
    ) -> Result<Bytes, CipherDispatchError>;
}

/// Pass-through backend: output is the input. Keeps the orchestration
/// testable in isolation (output file must equal input file bit for bit).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCipher;

impl ChunkCipher for NullCipher {
    fn name(&self) -> &'static str {
        "null"
    }

    fn encrypt_chunk(
        &self,
        plaintext: &[u8],
        _keys: &KeyMaterial,
        _chunk_index: u64,
    ) -> Result<Bytes, CipherDispatchError> {
        Ok(Bytes::copy_from_slice(plaintext))
    }

    fn decrypt_chunk(
        &self,
        ciphertext: &[u8],
        _keys: &KeyMaterial,
        _chunk_index: u64,
    ) -> Result<Bytes, CipherDispatchError> {
        Ok(Bytes::copy_from_slice(ciphertext))
    }
}
