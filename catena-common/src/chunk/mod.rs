//! Fixed-size chunk transfer
//!
//! A [`ChunkReader`] fills a [`TransferBuffer`] one read at a time and hands
//! back only the bytes that read produced. A [`ChunkWriter`] writes those
//! slices to the output stream and counts what went through.

mod buffer;
mod reader;
mod writer;

pub use buffer::TransferBuffer;
pub use reader::ChunkReader;
pub use writer::ChunkWriter;
