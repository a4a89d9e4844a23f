//! The per-input transfer loop
//!
//! Connects a [`ChunkReader`] to a [`ChunkWriter`] and classifies failures
//! into [`TransferError`]s that name the input being copied.

use std::io::{Read, Write};

use crate::TransferError;
use crate::chunk::{ChunkReader, ChunkWriter};

/// What one call to [`copy_chunks`] moved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferStats {
    /// Bytes written to the output
    pub bytes: u64,
    /// Number of non-empty reads (and therefore writes)
    pub chunks: u64,
}

/// Copy `reader` to `writer` chunk by chunk until end of input
///
/// Each chunk is written and flushed before the next read is issued, so a
/// slow input's bytes reach the output as soon as they are read.
///
/// # Errors
///
/// The first failure ends the copy: a read failure becomes
/// [`TransferError::read`], a write or flush failure becomes
/// [`TransferError::write`], both reported against `path`.
pub fn copy_chunks<R, W>(
    reader: &mut ChunkReader<'_, R>,
    writer: &mut ChunkWriter<W>,
    path: &str,
) -> Result<TransferStats, TransferError>
where
    R: Read,
    W: Write,
{
    let start_bytes = writer.bytes_written();
    let start_chunks = writer.chunks_written();

    loop {
        let chunk = match reader.read_chunk() {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(e) => return Err(TransferError::read(path, e)),
        };
        tracing::trace!(path, len = chunk.len(), "chunk");
        writer
            .write_chunk(chunk)
            .map_err(|e| TransferError::write(path, e))?;
    }

    Ok(TransferStats {
        bytes: writer.bytes_written() - start_bytes,
        chunks: writer.chunks_written() - start_chunks,
    })
}
