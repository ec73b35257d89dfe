//! Cipher worker: drains the chunk channel, dispatches each chunk through
//! the cipher boundary, and writes the result at its absolute offset.
//!
//! Workers never coordinate on ordering — the offset comes from the shared
//! read-only layout, so any worker can complete any chunk at any time. The
//! only cross-worker state is the cancel flag: the first fatal error flips
//! it, later messages are drained without work, and the feeder stops
//! issuing.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam::channel::Receiver;

use crate::chunking::{Chunk, ChunkLayout};
use crate::cipher::{dispatch_chunk, ChunkCipher, CipherDirection, KeyMaterial};
use crate::telemetry::TelemetryCounters;
use crate::types::PipelineError;
use crate::writer::PositionedFile;

pub struct CipherWorker<'a> {
    pub id: usize,
    pub direction: CipherDirection,
    pub cipher: &'a dyn ChunkCipher,
    pub keys: &'a KeyMaterial,
    pub layout: &'a ChunkLayout,
    pub out_path: &'a Path,
}

impl<'a> CipherWorker<'a> {
    /// Run loop: consume chunks until the channel closes.
    ///
    /// Returns this worker's counters on success. On failure the cancel flag
    /// is set before returning so the feeder and sibling workers wind down;
    /// the caller aggregates the first error for the whole run.
    pub fn run(
        &self,
        rx: Receiver<Chunk>,
        out: &PositionedFile,
        cancel: &AtomicBool,
    ) -> Result<TelemetryCounters, PipelineError> {
        let mut counters = TelemetryCounters::default();

        while let Ok(chunk) = rx.recv() {
            if cancel.load(Ordering::Relaxed) {
                // Another worker already failed; drain without doing work.
                continue;
            }

            if let Err(e) = self.process(chunk, out, &mut counters) {
                eprintln!("[worker-{}] fatal: {}", self.id, e);
                cancel.store(true, Ordering::Relaxed);
                return Err(e);
            }
        }

        Ok(counters)
    }

    fn process(
        &self,
        chunk: Chunk,
        out: &PositionedFile,
        counters: &mut TelemetryCounters,
    ) -> Result<(), PipelineError> {
        let in_len = chunk.len();
        let offset = self.layout.offset(chunk.index);

        let result = dispatch_chunk(self.cipher, self.direction, chunk, self.keys)?;

        let retries = out
            .write_chunk(offset, &result.data)
            .map_err(|e| PipelineError::write(self.out_path, e))?;

        counters.add_chunk(in_len, result.len(), retries);
        Ok(())
    }
}
