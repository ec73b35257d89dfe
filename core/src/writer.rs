//! Positioned-write output sink.
//!
//! Final file byte order equals chunk index order even though chunks complete
//! in any order on any thread: every chunk's absolute offset is known up
//! front from the layout table, so each worker writes its chunk directly at
//! that offset. No cross-thread ordering barrier exists anywhere in the
//! write path.
//!
//! Partial writes are legal at the OS level and must not become silent
//! truncation: a short write is retried at the adjusted offset/length under
//! a bounded budget, and exhaustion aborts the whole run.

use std::fs::File;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::constants::WRITE_RETRY_BUDGET;
use crate::types::PipelineError;

/// A device accepting writes at absolute offsets, independent of any cursor.
///
/// `&self` on purpose: positioned writes carry no shared cursor state, so one
/// open file is shared by every writer thread without locking.
pub trait WriteAt {
    fn write_at(&self, buf: &[u8], offset: u64) -> io::Result<usize>;
}

#[cfg(unix)]
impl WriteAt for File {
    fn write_at(&self, buf: &[u8], offset: u64) -> io::Result<usize> {
        std::os::unix::fs::FileExt::write_at(self, buf, offset)
    }
}

#[cfg(windows)]
impl WriteAt for File {
    fn write_at(&self, buf: &[u8], offset: u64) -> io::Result<usize> {
        std::os::windows::fs::FileExt::seek_write(self, buf, offset)
    }
}

/// Positioned-write failure. `Incomplete` is the retry-budget exhaustion the
/// error taxonomy calls out; device errors keep the failing offset.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("device error at offset {offset}: {source}")]
    Device { offset: u64, source: io::Error },

    #[error(
        "incomplete write at offset {offset}: {written} of {requested} bytes after {retries} retries"
    )]
    Incomplete {
        offset: u64,
        written: usize,
        requested: usize,
        retries: usize,
    },
}

/// Write all of `buf` at `offset`, retrying short writes at the adjusted
/// offset/length until complete or the budget runs out.
///
/// Returns the number of retries consumed (telemetry). A write of zero bytes
/// means the device accepts no more data at that offset; that is counted as
/// one retry rather than spun on, so a dead device exhausts the budget
/// instead of hanging the worker. `Interrupted` does not consume budget.
pub fn write_full_at(
    dev: &impl WriteAt,
    buf: &[u8],
    offset: u64,
    retry_budget: usize,
) -> Result<usize, WriteError> {
    let requested = buf.len();
    let mut written = 0usize;
    let mut retries = 0usize;

    while written < requested {
        let pos = offset + written as u64;
        match dev.write_at(&buf[written..], pos) {
            Ok(n) => {
                written += n;
                if written < requested {
                    retries += 1;
                    if retries > retry_budget {
                        return Err(WriteError::Incomplete {
                            offset,
                            written,
                            requested,
                            retries: retries - 1,
                        });
                    }
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(WriteError::Device { offset: pos, source: e }),
        }
    }

    Ok(retries)
}

/// One output file shared by all writer threads.
///
/// The length is fixed up front so concurrent positioned writes never race
/// over extending the file; after all workers join, every byte of
/// `[0, total_len)` has been written exactly once (chunk ranges tile the
/// file by construction of the layout).
pub struct PositionedFile {
    file: File,
}

impl PositionedFile {
    /// Create (or truncate) `path` and fix its length to `total_len`.
    pub fn create(path: &Path, total_len: u64) -> Result<Self, PipelineError> {
        let file = File::create(path).map_err(|e| PipelineError::io("creating", path, e))?;
        file.set_len(total_len)
            .map_err(|e| PipelineError::io("sizing", path, e))?;
        Ok(Self { file })
    }

    /// Write one chunk payload at its absolute offset.
    /// Returns retries consumed.
    pub fn write_chunk(&self, offset: u64, data: &[u8]) -> Result<usize, WriteError> {
        write_full_at(&self.file, data, offset, WRITE_RETRY_BUDGET)
    }

    /// Flush file contents to durable storage.
    pub fn sync(&self) -> io::Result<()> {
        self.file.sync_all()
    }
}
