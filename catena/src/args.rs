//! Command-line argument parsing

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::constants::FALLBACK_PROGRAM_NAME;

/// Concatenate files to standard output
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Files to copy, in order ("-" reads standard input)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Enable debug logging on stderr (shows each input as it is copied)
    #[arg(long, default_value = "false")]
    pub debug: bool,
}

/// The name the program was invoked as
///
/// Taken from argv[0] as given, so diagnostics name the program the way the
/// user typed it.
pub fn program_name() -> String {
    program_name_from(std::env::args_os().next())
}

fn program_name_from(argv0: Option<OsString>) -> String {
    match argv0 {
        Some(name) if !name.is_empty() => name.to_string_lossy().into_owned(),
        _ => FALLBACK_PROGRAM_NAME.to_string(),
    }
}
