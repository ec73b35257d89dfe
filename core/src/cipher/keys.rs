//! Key and IV material: fixed-size, read once per run, immutable thereafter.
//!
//! Shared read-only across every chunk dispatch; no thread mutates it during
//! a run. Reads are exact-size: a key or IV file shorter than expected fails
//! with the filename and both lengths rather than zero-padding.

use std::path::Path;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::{IV_LEN, KEY_LEN};
use crate::io;
use crate::types::PipelineError;

/// Fixed-size key and IV buffers for one pipeline run.
#[derive(Clone)]
pub struct KeyMaterial {
    key: [u8; KEY_LEN],
    iv: [u8; IV_LEN],
}

impl KeyMaterial {
    pub fn new(key: [u8; KEY_LEN], iv: [u8; IV_LEN]) -> Self {
        Self { key, iv }
    }

    /// Fresh random key and IV from the OS RNG.
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_LEN];
        let mut iv = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut key);
        OsRng.fill_bytes(&mut iv);
        Self { key, iv }
    }

    /// Load key and IV from their files, enforcing exact sizes.
    pub fn load(key_path: &Path, iv_path: &Path) -> Result<Self, PipelineError> {
        let key_bytes = io::read_exact_len(key_path, KEY_LEN)?;
        let iv_bytes = io::read_exact_len(iv_path, IV_LEN)?;

        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&key_bytes);
        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(&iv_bytes);

        Ok(Self { key, iv })
    }

    /// Persist key and IV to their files (keygen path).
    pub fn save(&self, key_path: &Path, iv_path: &Path) -> Result<(), PipelineError> {
        io::write_file_bytes(key_path, &self.key)?;
        io::write_file_bytes(iv_path, &self.iv)?;
        Ok(())
    }

    pub fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }
}

// Keep key bytes out of debug output.
impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key", &"[redacted]")
            .field("iv", &"[redacted]")
            .finish()
    }
}
