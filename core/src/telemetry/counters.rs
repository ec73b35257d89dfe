//! Mutable counters collected during a pipeline run.
//!
//! Each worker keeps its own instance and the pipeline merges them at join.
//! This avoids:
//! * locks inside workers
//! * atomics
//! * false sharing

use std::ops::AddAssign;

/// Deterministic counters collected while chunks move through the pipeline.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct TelemetryCounters {
    pub chunks_processed: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub write_retries: u64,
}

impl TelemetryCounters {
    /// Record one chunk through dispatch and write.
    ///
    /// - `in_len`: chunk payload length entering the cipher
    /// - `out_len`: payload length written (equal by the size contract)
    /// - `retries`: positioned-write retries consumed for this chunk
    pub fn add_chunk(&mut self, in_len: usize, out_len: usize, retries: usize) {
        self.chunks_processed += 1;
        self.bytes_in += in_len as u64;
        self.bytes_out += out_len as u64;
        self.write_retries += retries as u64;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.chunks_processed += other.chunks_processed;
        self.bytes_in += other.bytes_in;
        self.bytes_out += other.bytes_out;
        self.write_retries += other.write_retries;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
