//! Fixed-size chunk splitting and layout bookkeeping.
//!
//! The allocator turns one contiguous input buffer into `ceil(len / chunk_size)`
//! independently owned chunks plus a layout table (per-chunk sizes and
//! cumulative byte offsets). Downstream stages share the layout read-only;
//! each chunk buffer moves to exactly one consumer.

pub mod allocator;
pub mod types;

pub use allocator::{preprocess_file, ChunkSet};
pub use types::{AllocationError, Chunk, ChunkLayout};
