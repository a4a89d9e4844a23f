//! Machine-readable error kinds for fatal transfer errors
//!
//! Each kind names the step of the transfer that failed. The string form
//! is what debug logging records alongside the failing path.

use std::fmt;

/// The step at which a run was aborted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No input paths were given on the command line
    Usage,

    /// The input could not be opened (missing, permission denied, ...)
    Open,

    /// Reading from an open input failed
    Read,

    /// Writing to the output stream failed
    ///
    /// Also covers a failed flush of a written chunk.
    Write,

    /// Releasing the input handle failed
    ///
    /// Fatal even though every byte of the input was already written.
    Close,
}

impl ErrorKind {
    /// Convert to the string representation used in log records
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usage => "usage",
            Self::Open => "open",
            Self::Read => "read",
            Self::Write => "write",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
