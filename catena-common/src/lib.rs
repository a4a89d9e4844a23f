//! Catena Common Library
//!
//! The chunked transfer loop, its error types, and the constants shared
//! by the `catena` binary.

pub mod chunk;
mod error;
mod error_kind;
pub mod io;

pub use error::TransferError;
pub use error_kind::ErrorKind;

/// Capacity of the transfer buffer in bytes
///
/// Every read requests at most this many bytes, and the same buffer is
/// reused for every chunk of every input.
pub const BUFFER_SIZE: usize = 256;

/// Exit status for every fatal error (usage, open, read, write, close)
pub const EXIT_FATAL: i32 = 1;

/// Path operand that selects standard input instead of a file
pub const STDIN_PATH: &str = "-";
