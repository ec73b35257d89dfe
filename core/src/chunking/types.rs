use bytes::Bytes;
use thiserror::Error;

/// One contiguous, indexed slice of the input, owned by its current holder.
///
/// `index` is the chunk's 0-based position in the original file. Indices are
/// contiguous with no gaps; the payload of chunk `i` starts at
/// `ChunkLayout::offset(i)` in the reassembled output.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub index: u64,
    pub data: Bytes,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Read-only geometry of a chunked buffer: the per-chunk size table and the
/// cumulative byte offsets derived from it.
///
/// Invariants (enforced by the allocator, relied on by every writer thread):
/// - `sizes.len() == offsets.len() == chunk_count`
/// - `sizes[i] == chunk_size` for all `i < chunk_count - 1`
/// - `0 < sizes[last] <= chunk_size` (never rounded up past end of input)
/// - `offsets[i] == sizes[..i].sum()`, so chunk byte ranges tile `[0, total_len)`
///   without gaps or overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkLayout {
    chunk_size: usize,
    total_len: u64,
    sizes: Vec<usize>,
    offsets: Vec<u64>,
}

impl ChunkLayout {
    /// Compute the layout for `total_len` input bytes split at `chunk_size`.
    ///
    /// Zero-length input yields an empty layout (zero chunks); only a zero
    /// `chunk_size` is rejected.
    pub fn for_len(total_len: u64, chunk_size: usize) -> Result<Self, AllocationError> {
        if chunk_size == 0 {
            return Err(AllocationError::ZeroChunkSize);
        }

        let chunk_count = total_len.div_ceil(chunk_size as u64) as usize;
        let mut sizes = Vec::new();
        sizes
            .try_reserve_exact(chunk_count)
            .map_err(|_| AllocationError::TableAlloc { entries: chunk_count })?;
        let mut offsets = Vec::new();
        offsets
            .try_reserve_exact(chunk_count)
            .map_err(|_| AllocationError::TableAlloc { entries: chunk_count })?;

        let mut offset = 0u64;
        for _ in 0..chunk_count {
            let remaining = total_len - offset;
            let size = remaining.min(chunk_size as u64) as usize;
            sizes.push(size);
            offsets.push(offset);
            offset += size as u64;
        }
        debug_assert_eq!(offset, total_len);

        Ok(Self {
            chunk_size,
            total_len,
            sizes,
            offsets,
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Total input length in bytes; equals the sum of the size table.
    pub fn total_len(&self) -> u64 {
        self.total_len
    }

    pub fn chunk_count(&self) -> usize {
        self.sizes.len()
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Size of chunk `index` in bytes.
    pub fn size(&self, index: u64) -> usize {
        self.sizes[index as usize]
    }

    /// Absolute output byte offset of chunk `index`.
    pub fn offset(&self, index: u64) -> u64 {
        self.offsets[index as usize]
    }
}

/// Failure while building a chunk set. Fatal: the run aborts.
#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("chunk size must be non-zero")]
    ZeroChunkSize,

    #[error("failed to allocate {bytes}-byte buffer for chunk {index}")]
    BufferAlloc { index: u64, bytes: usize },

    #[error("failed to allocate chunk table with {entries} entries")]
    TableAlloc { entries: usize },
}
