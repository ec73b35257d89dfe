//! Normalized file I/O helpers.
//!
//! Every failure carries the operation and the path; callers never see a bare
//! OS error without knowing which file it came from.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::types::PipelineError;

/// Read a whole file into an owned buffer.
pub fn read_file_as_bytes(path: &Path) -> Result<Vec<u8>, PipelineError> {
    std::fs::read(path).map_err(|e| PipelineError::io("reading", path, e))
}

/// Read exactly `expected` bytes from `path`.
///
/// Used for key and IV files: a shorter file is an error, not a zero-padded
/// buffer. Trailing bytes beyond `expected` are ignored.
pub fn read_exact_len(path: &Path, expected: usize) -> Result<Vec<u8>, PipelineError> {
    let mut file = File::open(path).map_err(|e| PipelineError::io("opening", path, e))?;
    let mut buf = vec![0u8; expected];
    file.read_exact(&mut buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            PipelineError::Validation(format!(
                "{} is shorter than the expected {} bytes",
                path.display(),
                expected
            ))
        } else {
            PipelineError::io("reading", path, e)
        }
    })?;
    Ok(buf)
}

/// Single sequential whole-buffer write, creating or truncating `path`.
pub fn write_file_bytes(path: &Path, data: &[u8]) -> Result<(), PipelineError> {
    let mut file = File::create(path).map_err(|e| PipelineError::io("creating", path, e))?;
    file.write_all(data)
        .map_err(|e| PipelineError::io("writing", path, e))?;
    file.flush()
        .map_err(|e| PipelineError::io("flushing", path, e))?;
    Ok(())
}

/// Best-effort removal of a partial output. Failure to clean up must not
/// mask the original pipeline error.
pub fn remove_file_quiet(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            eprintln!("[io] failed to remove partial output {}: {}", path.display(), e);
        }
    }
}
