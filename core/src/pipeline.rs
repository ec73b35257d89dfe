//! Pipeline wiring: source file → chunk allocator → cipher workers →
//! positioned-write sink.
//!
//! Chunk *processing* order is unconstrained; chunk *write* order in the
//! final file is fixed by the offset table, independent of scheduling. That
//! decoupling is what lets the worker count vary without changing a single
//! output byte.
//!
//! A run is all-or-nothing: the first fatal error cancels the feeder, lets
//! in-flight work drain, removes the partial output file, and surfaces one
//! aggregated error.

use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::thread;

use crossbeam::channel::bounded;

use crate::chunking::{Chunk, ChunkSet};
use crate::cipher::{dispatch_chunk, ChunkCipher, CipherDirection, KeyMaterial};
use crate::io;
use crate::parallelism::ParallelismProfile;
use crate::telemetry::{TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::PipelineError;
use crate::worker::CipherWorker;
use crate::writer::PositionedFile;

// ============================================================
// Public entry points
// ============================================================

/// Encrypt `src` into `dst`. Output length equals input length.
pub fn run_encrypt_pipeline(
    src: &Path,
    dst: &Path,
    cipher: &dyn ChunkCipher,
    keys: &KeyMaterial,
    chunk_size: usize,
    profile: &ParallelismProfile,
) -> Result<TelemetrySnapshot, PipelineError> {
    run_cipher_pipeline(CipherDirection::Encrypt, src, dst, cipher, keys, chunk_size, profile)
}

/// Decrypt `src` into `dst`. Must be invoked with the same chunk size the
/// encrypt pass used; the stream itself carries no framing.
pub fn run_decrypt_pipeline(
    src: &Path,
    dst: &Path,
    cipher: &dyn ChunkCipher,
    keys: &KeyMaterial,
    chunk_size: usize,
    profile: &ParallelismProfile,
) -> Result<TelemetrySnapshot, PipelineError> {
    run_cipher_pipeline(CipherDirection::Decrypt, src, dst, cipher, keys, chunk_size, profile)
}

// ============================================================
// Shared engine
// ============================================================

fn run_cipher_pipeline(
    direction: CipherDirection,
    src: &Path,
    dst: &Path,
    cipher: &dyn ChunkCipher,
    keys: &KeyMaterial,
    chunk_size: usize,
    profile: &ParallelismProfile,
) -> Result<TelemetrySnapshot, PipelineError> {
    let timer = TelemetryTimer::new();
    eprintln!(
        "[pipeline] {} {} -> {} ({} workers)",
        direction.as_str(),
        src.display(),
        dst.display(),
        profile.worker_count
    );

    let chunk_set = crate::chunking::preprocess_file(src, chunk_size)?;
    let chunks_total = chunk_set.chunk_count() as u64;

    let result = if profile.worker_count <= 1 {
        run_serial(direction, dst, cipher, keys, chunk_set)
    } else {
        run_parallel(direction, dst, cipher, keys, chunk_set, profile)
    };

    match result {
        Ok(counters) => {
            let snapshot =
                TelemetrySnapshot::from(&counters, &timer, chunks_total, profile.worker_count);
            eprintln!(
                "[pipeline] done: {} chunks, {} bytes, {} write retries",
                snapshot.chunks_processed, snapshot.bytes_out, snapshot.write_retries
            );
            Ok(snapshot)
        }
        Err(e) => {
            // No plausible-looking truncated output may survive a failed run.
            eprintln!("[pipeline] aborted, removing partial output: {}", e);
            io::remove_file_quiet(dst);
            Err(e)
        }
    }
}

/// Single-worker path: dispatch and write strictly in index order through
/// one sequential positioned stream. No threads, no channel.
fn run_serial(
    direction: CipherDirection,
    dst: &Path,
    cipher: &dyn ChunkCipher,
    keys: &KeyMaterial,
    chunk_set: ChunkSet,
) -> Result<TelemetryCounters, PipelineError> {
    let (chunks, layout) = chunk_set.into_parts();
    let out = PositionedFile::create(dst, layout.total_len())?;
    let mut counters = TelemetryCounters::default();

    for chunk in chunks {
        let in_len = chunk.len();
        let offset = layout.offset(chunk.index);
        let result = dispatch_chunk(cipher, direction, chunk, keys)?;
        let retries = out
            .write_chunk(offset, &result.data)
            .map_err(|e| PipelineError::write(dst, e))?;
        counters.add_chunk(in_len, result.len(), retries);
    }

    out.sync().map_err(|e| PipelineError::io("syncing", dst, e))?;
    Ok(counters)
}

/// Multi-worker path: bounded channel feed, scoped cipher/writer workers,
/// positioned writes at layout offsets, counters merged at join.
fn run_parallel(
    direction: CipherDirection,
    dst: &Path,
    cipher: &dyn ChunkCipher,
    keys: &KeyMaterial,
    chunk_set: ChunkSet,
    profile: &ParallelismProfile,
) -> Result<TelemetryCounters, PipelineError> {
    let (chunks, layout) = chunk_set.into_parts();
    let out = PositionedFile::create(dst, layout.total_len())?;
    let cancel = AtomicBool::new(false);

    let (chunk_tx, chunk_rx) = bounded::<Chunk>(profile.inflight_chunks);

    let merged = thread::scope(|scope| -> Result<TelemetryCounters, PipelineError> {
        // ---- Workers ----
        let mut handles = Vec::with_capacity(profile.worker_count);
        for id in 0..profile.worker_count {
            let worker = CipherWorker {
                id,
                direction,
                cipher,
                keys,
                layout: &layout,
                out_path: dst,
            };
            let rx = chunk_rx.clone();
            let out = &out;
            let cancel = &cancel;
            handles.push(scope.spawn(move || worker.run(rx, out, cancel)));
        }
        drop(chunk_rx);

        // ---- Feeder (this thread) ----
        // Stops on cancel; a send error means every worker is gone already.
        for chunk in chunks {
            if cancel.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            if chunk_tx.send(chunk).is_err() {
                break;
            }
        }
        drop(chunk_tx); // close the channel so workers finish their drain

        // ---- Join: merge counters, surface the first fatal error ----
        let mut counters = TelemetryCounters::default();
        let mut first_error: Option<PipelineError> = None;
        for handle in handles {
            match handle.join() {
                Ok(Ok(c)) => counters.merge(&c),
                Ok(Err(e)) => {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
                Err(_) => {
                    if first_error.is_none() {
                        first_error =
                            Some(PipelineError::Validation("worker thread panicked".into()));
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(counters),
        }
    })?;

    out.sync().map_err(|e| PipelineError::io("syncing", dst, e))?;
    Ok(merged)
}
