//! Software reference backend: keyed BLAKE3 XOF keystream.
//!
//! Design:
//! - Per-chunk keystream: `blake3::keyed_hash` in XOF mode over
//!   `IV || chunk_index(LE)`, keyed by the 32-byte run key, XORed over the
//!   chunk payload.
//!
//! Why:
//! - Deterministic, stateless derivation from `(key, iv, chunk_index)` lets
//!   every worker compute its chunk independently, in any order — the same
//!   property counter-mode gives the accelerator backends.
//! - XOR keystreams are involutive: decrypt is the same transform as
//!   encrypt, and the byte count is preserved exactly.
//!
//! Security notes:
//! - Never reuse the same (key, iv) pair across files; the IV must be unique
//!   per run. Unauthenticated: integrity is out of scope at this layer.

use bytes::Bytes;

use crate::cipher::keys::KeyMaterial;
use crate::cipher::types::CipherDispatchError;
use crate::cipher::ChunkCipher;

#[derive(Debug, Default, Clone, Copy)]
pub struct KeystreamCipher;

impl KeystreamCipher {
    pub fn new() -> Self {
        Self
    }

    /// XOR `data` with the chunk's keystream. Same call for both directions.
    fn apply(&self, data: &[u8], keys: &KeyMaterial, chunk_index: u64) -> Bytes {
        let mut hasher = blake3::Hasher::new_keyed(keys.key());
        hasher.update(keys.iv());
        hasher.update(&chunk_index.to_le_bytes());

        let mut out = vec![0u8; data.len()];
        hasher.finalize_xof().fill(&mut out);
        for (o, d) in out.iter_mut().zip(data) {
            *o ^= d;
        }
        Bytes::from(out)
    }
}

impl ChunkCipher for KeystreamCipher {
    fn name(&self) -> &'static str {
        "blake3-keystream"
    }

    fn encrypt_chunk(
        &self,
        plaintext: &[u8],
        keys: &KeyMaterial,
        chunk_index: u64,
    ) -> Result<Bytes, CipherDispatchError> {
        Ok(self.apply(plaintext, keys, chunk_index))
    }

    fn decrypt_chunk(
        &self,
        ciphertext: &[u8],
        keys: &KeyMaterial,
        chunk_index: u64,
    ) -> Result<Bytes, CipherDispatchError> {
        Ok(self.apply(ciphertext, keys, chunk_index))
    }
}
