/// Default chunk size when the caller does not request one.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024; // 64 KiB

/// Industry-standard chunk sizes (in bytes).
pub const ALLOWED_CHUNK_SIZES: &[usize] = &[
    16 * 1024,   // 16 KiB
    32 * 1024,   // 32 KiB
    64 * 1024,   // 64 KiB
    128 * 1024,  // 128 KiB
    256 * 1024,  // 256 KiB
    1024 * 1024, // 1 MiB
    2048 * 1024, // 2 MiB
    4096 * 1024, // 4 MiB
];

/// Max chunk size sanity bound (32 MiB).
pub const MAX_CHUNK_SIZE: usize = 32 * 1024 * 1024;

/// Fixed key length (bytes). All cipher backends take 256-bit keys.
pub const KEY_LEN: usize = 32;

/// Fixed IV length (bytes).
pub const IV_LEN: usize = 16;

/// Retries granted to a positioned write before the run is aborted.
/// Each short write consumes one retry; a zero-progress write aborts at once.
pub const WRITE_RETRY_BUDGET: usize = 8;

/// Suffix appended to the full original filename to form the ciphertext name.
/// `report.pdf` encrypts to `report.pdf.enc`; decrypt strips the suffix.
pub const ENCRYPTED_SUFFIX: &str = "enc";
