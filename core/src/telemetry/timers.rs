use std::time::{Duration, Instant};

/// Wall-clock timer for one pipeline run.
#[derive(Debug, Clone)]
pub struct TelemetryTimer {
    start: Instant,
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}
