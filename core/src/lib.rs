//! blockpipe-core
//!
//! Chunked, concurrency-aware file-cipher pipeline: split a file into
//! fixed-size chunks, dispatch each chunk to a pluggable block-cipher
//! backend (potentially thousands of accelerator lanes behind one call), and
//! reassemble the result through positioned writes so the output is
//! bit-exact regardless of scheduling or worker count.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Pipeline stages
pub mod chunking;
pub mod cipher;
pub mod io;
pub mod parallelism;
pub mod pipeline;
pub mod sidecar;
pub mod worker;
pub mod writer;

// Observability
pub mod telemetry;

pub use chunking::{preprocess_file, ChunkSet};
pub use cipher::{ChunkCipher, KeyMaterial, KeystreamCipher};
pub use parallelism::ParallelismProfile;
pub use pipeline::{run_decrypt_pipeline, run_encrypt_pipeline};
pub use types::PipelineError;
