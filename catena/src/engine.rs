//! The transfer engine
//!
//! Sequences path operands through open, chunked copy, and close, stopping
//! at the first failure. Output already written for earlier inputs stays
//! written.

use std::io::Write;
use std::path::Path;

use catena_common::TransferError;
use catena_common::chunk::{ChunkReader, ChunkWriter, TransferBuffer};
use catena_common::io::{TransferStats, copy_chunks};

use crate::constants::{ERR_FILE_NOT_GIVEN, MSG_OPENED, MSG_TRANSFERRED};
use crate::input::Input;

/// Copies inputs to one output stream through a single reused buffer
pub struct Engine<W> {
    buffer: TransferBuffer,
    output: ChunkWriter<W>,
}

impl<W: Write> Engine<W> {
    /// Create an engine writing to `output`
    pub fn new(output: W) -> Self {
        Self {
            buffer: TransferBuffer::new(),
            output: ChunkWriter::new(output),
        }
    }

    /// Copy one path operand to the output
    ///
    /// # Errors
    ///
    /// Returns an open, read, write, or close error naming `path`.
    pub fn transfer(&mut self, path: &Path) -> Result<TransferStats, TransferError> {
        let name = path.display().to_string();

        let mut input = Input::open(path).map_err(|e| TransferError::open(name.as_str(), e))?;
        tracing::debug!(path = %name, stdin = input.is_stdin(), "{}", MSG_OPENED);

        let stats = {
            let mut reader = ChunkReader::new(&mut input, &mut self.buffer);
            copy_chunks(&mut reader, &mut self.output, &name)?
        };

        input
            .close()
            .map_err(|e| TransferError::close(name.as_str(), e))?;
        tracing::debug!(
            path = %name,
            bytes = stats.bytes,
            chunks = stats.chunks,
            "{}",
            MSG_TRANSFERRED
        );

        Ok(stats)
    }

    /// Copy every path in order, stopping at the first error
    ///
    /// Returns the totals across all inputs.
    ///
    /// # Errors
    ///
    /// Returns the first error; no later path is opened.
    pub fn run<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<TransferStats, TransferError> {
        let mut total = TransferStats::default();
        for path in paths {
            let stats = self.transfer(path.as_ref())?;
            total.bytes += stats.bytes;
            total.chunks += stats.chunks;
        }
        Ok(total)
    }

    /// Get a reference to the output stream
    pub fn output(&self) -> &W {
        self.output.get_ref()
    }

    /// Consume the engine and return the output stream
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

/// Concatenate `paths` to `output`
///
/// An empty path list is a usage error reported against `program`; no
/// output is written in that case.
///
/// # Errors
///
/// Returns the usage error, or the first transfer error.
pub fn concatenate<W, P>(
    program: &str,
    paths: &[P],
    output: W,
) -> Result<TransferStats, TransferError>
where
    W: Write,
    P: AsRef<Path>,
{
    if paths.is_empty() {
        return Err(TransferError::usage(program, ERR_FILE_NOT_GIVEN));
    }
    Engine::new(output).run(paths)
}
