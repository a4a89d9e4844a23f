//! Chunk reader for pulling fixed-size chunks from an input

use std::io::{self, Read};

use super::TransferBuffer;

/// Reads an input one buffer-sized chunk at a time
///
/// The buffer is borrowed so the same region can serve every input of a run.
pub struct ChunkReader<'b, R> {
    reader: R,
    buffer: &'b mut TransferBuffer,
}

impl<'b, R> ChunkReader<'b, R> {
    /// Create a new chunk reader over `reader` using `buffer`
    pub fn new(reader: R, buffer: &'b mut TransferBuffer) -> Self {
        Self { reader, buffer }
    }
}

impl<R: Read> ChunkReader<'_, R> {
    /// Read the next chunk
    ///
    /// Issues a single read of up to [`BUFFER_SIZE`](crate::BUFFER_SIZE)
    /// bytes. Returns `Ok(None)` at end of input, otherwise exactly the bytes
    /// that read produced. An interrupted read is reissued.
    ///
    /// # Errors
    ///
    /// Returns the reader's error, or `InvalidData` if the reader claims to
    /// have read more bytes than the buffer holds.
    pub fn read_chunk(&mut self) -> io::Result<Option<&[u8]>> {
        let capacity = self.buffer.capacity();
        let n = loop {
            match self.reader.read(self.buffer.as_mut_slice()) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };

        if n == 0 {
            return Ok(None);
        }
        if n > capacity {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("read reported {n} bytes into a {capacity}-byte buffer"),
            ));
        }
        Ok(Some(self.buffer.filled(n)))
    }
}
