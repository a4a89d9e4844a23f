//! Output stream acquisition

use std::fs::File;
use std::io;

/// An unbuffered handle on standard output
///
/// Duplicates the raw stdout handle instead of going through
/// `io::Stdout`, whose line buffer would hold back a chunk without a
/// newline until the input ends.
///
/// # Errors
///
/// Returns the error from duplicating the handle.
#[cfg(unix)]
pub fn stdout() -> io::Result<File> {
    use std::os::fd::AsFd;

    Ok(File::from(io::stdout().as_fd().try_clone_to_owned()?))
}

/// An unbuffered handle on standard output
///
/// # Errors
///
/// Returns the error from duplicating the handle.
#[cfg(windows)]
pub fn stdout() -> io::Result<File> {
    use std::os::windows::io::AsHandle;

    Ok(File::from(io::stdout().as_handle().try_clone_to_owned()?))
}
