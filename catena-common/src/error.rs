//! Error type for fatal transfer failures

use std::fmt;
use std::io;

use crate::ErrorKind;

/// A fatal error that ends the run
///
/// Renders as the single diagnostic line `<context>: <cause>`, where the
/// context is the program name for usage errors and the offending path
/// otherwise.
#[derive(Debug)]
pub struct TransferError {
    /// Which step failed
    pub kind: ErrorKind,
    /// Program name or input path the error is reported against
    pub context: String,
    cause: Cause,
}

#[derive(Debug)]
enum Cause {
    Message(String),
    Io(io::Error),
}

impl TransferError {
    fn io(kind: ErrorKind, path: impl Into<String>, source: io::Error) -> Self {
        Self {
            kind,
            context: path.into(),
            cause: Cause::Io(source),
        }
    }

    /// Create a "usage" error reported against the invoked program name
    pub fn usage(program: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Usage,
            context: program.into(),
            cause: Cause::Message(message.into()),
        }
    }

    /// Create an "open" error
    pub fn open(path: impl Into<String>, source: io::Error) -> Self {
        Self::io(ErrorKind::Open, path, source)
    }

    /// Create a "read" error
    pub fn read(path: impl Into<String>, source: io::Error) -> Self {
        Self::io(ErrorKind::Read, path, source)
    }

    /// Create a "write" error
    pub fn write(path: impl Into<String>, source: io::Error) -> Self {
        Self::io(ErrorKind::Write, path, source)
    }

    /// Create a "close" error
    pub fn close(path: impl Into<String>, source: io::Error) -> Self {
        Self::io(ErrorKind::Close, path, source)
    }

    /// The underlying I/O error, if any
    pub fn io_error(&self) -> Option<&io::Error> {
        match &self.cause {
            Cause::Io(e) => Some(e),
            Cause::Message(_) => None,
        }
    }
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Cause::Message(message) => write!(f, "{}: {}", self.context, message),
            Cause::Io(source) => write!(f, "{}: {}", self.context, source),
        }
    }
}

impl std::error::Error for TransferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.io_error()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
