//! Filename sidecar: carries the original extension alongside the
//! ciphertext so a decrypt pass can restore the original name.
//!
//! On-disk convention: the ciphertext keeps the full original filename,
//! extension included, with a literal `.enc` appended —
//! `report.pdf` → `report.pdf.enc`, `Makefile` → `Makefile.enc`. Restoring
//! strips exactly that suffix. Nothing here depends on chunk ordering; it
//! may run before, during, or after chunk processing.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::ENCRYPTED_SUFFIX;
use crate::types::PipelineError;

/// Extension of the final path component, without the dot.
/// `archive.tar.gz` → `gz`; `Makefile` → `None`.
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_string())
}

/// Append `.{ext}` to a path without replacing its existing extension.
pub fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Ciphertext name for `input`: the original name plus the `.enc` suffix.
pub fn encrypted_path(input: &Path) -> PathBuf {
    append_extension(input, ENCRYPTED_SUFFIX)
}

/// Original name for `encrypted`, by stripping the `.enc` suffix.
///
/// A path without the suffix is refused rather than guessed at: restoring a
/// name this layer did not produce would invent provenance.
pub fn restored_path(encrypted: &Path) -> Result<PathBuf, PipelineError> {
    match encrypted.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext == ENCRYPTED_SUFFIX => Ok(encrypted.with_extension("")),
        _ => Err(PipelineError::Validation(format!(
            "{} does not carry the .{} suffix; cannot derive the original filename",
            encrypted.display(),
            ENCRYPTED_SUFFIX
        ))),
    }
}
