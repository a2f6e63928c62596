//! Helper-side chunk accumulation

/// Time-sliced chunk buffer.
///
/// The helper context records in roughly one-second slices instead of
/// one giant buffer: memory stays bounded and a crash mid-recording
/// loses only the data after the last flushed chunk. `finish`
/// concatenates whatever made it in.
#[derive(Debug, Default)]
pub struct ChunkBuffer {
    chunks: Vec<Vec<u8>>,
}

/// Suggested chunk duration for the helper's recorder, in milliseconds.
pub const CHUNK_INTERVAL_MS: u32 = 1000;

impl ChunkBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: Vec<u8>) {
        if !chunk.is_empty() {
            self.chunks.push(chunk);
        }
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn total_bytes(&self) -> usize {
        self.chunks.iter().map(Vec::len).sum()
    }

    /// Concatenate all flushed chunks into one artifact payload.
    pub fn finish(self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.total_bytes());
        for chunk in self.chunks {
            data.extend_from_slice(&chunk);
        }
        data
    }
}
