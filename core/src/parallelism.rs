//! Worker and in-flight budgets for the pipeline.

/// Parallelism configuration: how many cipher/writer workers run, and how
/// many chunks may sit in the dispatch channel at once (backpressure bound).
#[derive(Debug, Clone)]
pub struct ParallelismProfile {
    pub worker_count: usize,
    pub inflight_chunks: usize,
}

impl ParallelismProfile {
    /// One worker, one chunk in flight. Also selects the plain sequential
    /// write path in the pipeline.
    pub fn single_threaded() -> Self {
        Self {
            worker_count: 1,
            inflight_chunks: 1,
        }
    }

    /// Explicit worker and in-flight counts, clamped to at least one each.
    pub fn fixed(worker_count: usize, inflight_chunks: usize) -> Self {
        Self {
            worker_count: worker_count.max(1),
            inflight_chunks: inflight_chunks.max(1),
        }
    }

    /// Size from the machine: one worker per core minus one, and an in-flight
    /// budget from a fraction of available memory divided by the chunk size,
    /// capped at `hard_cap`.
    pub fn dynamic(chunk_size: usize, mem_fraction: f64, hard_cap: usize) -> Self {
        let cores = num_cpus::get();
        let worker_count = cores.saturating_sub(1).max(1); // leave one core free

        let mut sys = sysinfo::System::new_all();
        sys.refresh_memory();
        let avail_bytes = sys.available_memory();

        // Budget = fraction of available memory
        let budget = (avail_bytes as f64 * mem_fraction) as u64;
        let max_inflight = (budget / chunk_size.max(1) as u64).max(1);

        Self {
            worker_count,
            inflight_chunks: max_inflight.min(hard_cap as u64) as usize,
        }
    }
}

impl Default for ParallelismProfile {
    fn default() -> Self {
        Self::dynamic(crate::constants::DEFAULT_CHUNK_SIZE, 0.25, 64)
    }
}
