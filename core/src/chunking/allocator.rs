use std::path::Path;

use bytes::Bytes;

use crate::chunking::types::{AllocationError, Chunk, ChunkLayout};
use crate::io;
use crate::types::PipelineError;

/// The complete ordered chunk collection for one input buffer, together with
/// its layout table.
///
/// Produced once by the allocator, consumed chunk-by-chunk (move-only) by the
/// dispatch stage. The layout stays behind, shared read-only, so writer
/// threads can compute absolute offsets after the chunks themselves are gone.
#[derive(Debug)]
pub struct ChunkSet {
    chunks: Vec<Chunk>,
    layout: ChunkLayout,
}

impl ChunkSet {
    /// Split `data` into `ceil(data.len() / chunk_size)` chunks.
    ///
    /// Each chunk gets its own freshly allocated buffer; the final chunk
    /// carries exactly the remaining bytes and is never padded to
    /// `chunk_size`. Empty input yields an empty set, not an error.
    pub fn split(data: &[u8], chunk_size: usize) -> Result<Self, AllocationError> {
        let layout = ChunkLayout::for_len(data.len() as u64, chunk_size)?;

        let mut chunks = Vec::new();
        chunks
            .try_reserve_exact(layout.chunk_count())
            .map_err(|_| AllocationError::TableAlloc {
                entries: layout.chunk_count(),
            })?;

        for (i, &size) in layout.sizes().iter().enumerate() {
            let start = layout.offset(i as u64) as usize;
            let mut buf = Vec::new();
            buf.try_reserve_exact(size)
                .map_err(|_| AllocationError::BufferAlloc {
                    index: i as u64,
                    bytes: size,
                })?;
            buf.extend_from_slice(&data[start..start + size]);
            chunks.push(Chunk {
                index: i as u64,
                data: Bytes::from(buf),
            });
        }

        Ok(Self { chunks, layout })
    }

    pub fn chunk_count(&self) -> usize {
        self.layout.chunk_count()
    }

    pub fn layout(&self) -> &ChunkLayout {
        &self.layout
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Hand out the chunks for consumption, leaving the layout with the caller.
    pub fn into_parts(self) -> (Vec<Chunk>, ChunkLayout) {
        (self.chunks, self.layout)
    }
}

/// Read `path` and split it at `chunk_size`.
///
/// The file-facing preprocessing entry point: filename and chunk size in,
/// owned chunk set (count, buffers, size table, offsets) out.
pub fn preprocess_file(path: &Path, chunk_size: usize) -> Result<ChunkSet, PipelineError> {
    let data = io::read_file_as_bytes(path)?;
    Ok(ChunkSet::split(&data, chunk_size)?)
}
