//! Chunk writer for sending chunks to the output stream

use std::io::{self, Write};

/// Writes chunks to the output stream and counts them
pub struct ChunkWriter<W> {
    writer: W,
    bytes: u64,
    chunks: u64,
}

impl<W> ChunkWriter<W> {
    /// Create a new chunk writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            bytes: 0,
            chunks: 0,
        }
    }

    /// Get a reference to the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the chunk writer and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Total bytes written through this writer
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }

    /// Total chunks written through this writer
    #[must_use]
    pub fn chunks_written(&self) -> u64 {
        self.chunks
    }
}

impl<W: Write> ChunkWriter<W> {
    /// Write one chunk and flush it
    ///
    /// The whole slice is written: a writer that accepts fewer bytes is
    /// called again for the rest, and one that accepts none is an error.
    /// The writer is flushed before returning, so the chunk has reached the
    /// host before the caller issues its next read.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    pub fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.writer.write_all(chunk)?;
        self.writer.flush()?;
        self.bytes += chunk.len() as u64;
        self.chunks += 1;
        Ok(())
    }
}
