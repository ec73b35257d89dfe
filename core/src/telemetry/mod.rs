//! Run telemetry: mutable counters while the pipeline runs, an immutable
//! snapshot when it finishes.

pub mod counters;
pub mod snapshot;
pub mod timers;

pub use counters::TelemetryCounters;
pub use snapshot::TelemetrySnapshot;
pub use timers::TelemetryTimer;
