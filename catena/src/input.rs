//! Input acquisition and release
//!
//! An [`Input`] is either a file opened read-only or the process's
//! standard input. Standard input is read through a duplicate of its raw
//! handle, so no library buffer holds bytes back. Files are closed
//! explicitly so a failing close is reported instead of being swallowed by
//! `Drop`.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use catena_common::STDIN_PATH;

/// An open source of bytes for one path operand
#[derive(Debug)]
pub enum Input {
    /// A file opened read-only
    File(File),
    /// Standard input, selected by the `-` operand
    Stdin(File),
}

impl Input {
    /// Open `path` for reading
    ///
    /// The operand `-` selects standard input; anything else is opened as a
    /// file.
    ///
    /// # Errors
    ///
    /// Returns the error from opening the file (not found, permission
    /// denied, ...).
    pub fn open(path: &Path) -> io::Result<Self> {
        if path.as_os_str() == STDIN_PATH {
            return duplicate_stdin().map(Self::Stdin);
        }
        File::open(path).map(Self::File)
    }

    /// Whether this input is standard input
    #[must_use]
    pub fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin(_))
    }

    /// Release the input
    ///
    /// For standard input only the duplicate handle is closed, so stdin
    /// stays open for any later `-` operand.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the host when closing the file.
    pub fn close(self) -> io::Result<()> {
        match self {
            Self::File(file) | Self::Stdin(file) => close_file(file),
        }
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File(file) | Self::Stdin(file) => file.read(buf),
        }
    }
}

#[cfg(unix)]
fn duplicate_stdin() -> io::Result<File> {
    use std::os::fd::AsFd;

    Ok(File::from(io::stdin().as_fd().try_clone_to_owned()?))
}

#[cfg(windows)]
fn duplicate_stdin() -> io::Result<File> {
    use std::os::windows::io::AsHandle;

    Ok(File::from(io::stdin().as_handle().try_clone_to_owned()?))
}

#[cfg(unix)]
fn close_file(file: File) -> io::Result<()> {
    use std::os::fd::IntoRawFd;

    let fd = file.into_raw_fd();
    // SAFETY: `fd` came from `into_raw_fd`, so this is its only owner and it
    // is closed exactly once here.
    if unsafe { libc::close(fd) } == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(not(unix))]
fn close_file(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_read_close_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, b"contents").unwrap();

        let mut input = Input::open(&path).unwrap();
        assert!(!input.is_stdin());
        let mut out = Vec::new();
        input.read_to_end(&mut out).unwrap();
        assert_eq!(out, b"contents");
        input.close().unwrap();
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Input::open(&dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_dash_selects_stdin() {
        let input = Input::open(Path::new("-")).unwrap();
        assert!(input.is_stdin());
        input.close().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_close_failure_is_reported() {
        use std::os::fd::FromRawFd;

        // Far above any descriptor the process can have open.
        let fd = i32::MAX;
        // SAFETY: nothing owns `fd`; `close_file` consumes the `File` without
        // dropping it, so no second close happens.
        let file = unsafe { File::from_raw_fd(fd) };
        let err = close_file(file).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::EBADF));

        let err = Input::File(unsafe { File::from_raw_fd(fd) })
            .close()
            .unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::EBADF));
    }

    #[test]
    fn test_dash_prefixed_name_is_a_file() {
        let err = Input::open(Path::new("-missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
