use crate::constants::{ALLOWED_CHUNK_SIZES, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};

/// Clamp a requested chunk size onto the allowed table.
///
/// `None` takes the default. A request between table entries rounds up to
/// the next allowed size; anything beyond the table rounds to the next power
/// of two, capped at `MAX_CHUNK_SIZE`.
pub fn best_chunk_size(requested: Option<usize>) -> usize {
    let size = match requested {
        None => return DEFAULT_CHUNK_SIZE,
        Some(size) => size,
    };

    if size >= MAX_CHUNK_SIZE {
        return MAX_CHUNK_SIZE;
    }
    if let Some(&allowed) = ALLOWED_CHUNK_SIZES.iter().find(|&&a| size <= a) {
        return allowed;
    }

    // Above the table: next power of two, still under the sanity bound.
    size.next_power_of_two().min(MAX_CHUNK_SIZE)
}
