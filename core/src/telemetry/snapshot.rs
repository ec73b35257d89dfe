use serde::Serialize;

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::TelemetryTimer;

/// Immutable summary of one finished pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetrySnapshot {
    pub chunks_total: u64,
    pub chunks_processed: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub write_retries: u64,
    pub workers: usize,
    pub elapsed_ms: u64,
    pub throughput_mib_s: f64,
}

impl TelemetrySnapshot {
    pub fn from(
        counters: &TelemetryCounters,
        timer: &TelemetryTimer,
        chunks_total: u64,
        workers: usize,
    ) -> Self {
        let elapsed = timer.elapsed();
        let secs = elapsed.as_secs_f64();
        let throughput_mib_s = if secs > 0.0 {
            counters.bytes_in as f64 / (1024.0 * 1024.0) / secs
        } else {
            0.0
        };

        Self {
            chunks_total,
            chunks_processed: counters.chunks_processed,
            bytes_in: counters.bytes_in,
            bytes_out: counters.bytes_out,
            write_retries: counters.write_retries,
            workers,
            elapsed_ms: elapsed.as_millis() as u64,
            throughput_mib_s,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
