//! User-facing strings and fallbacks

/// Diagnostic cause when no paths are given
pub const ERR_FILE_NOT_GIVEN: &str = "file not given";

/// Printed under `--debug` when the log subscriber cannot be installed
pub const ERR_LOGGING_INIT: &str = "Failed to install debug logging: ";

/// Program name used when the host supplies no argv[0]
pub const FALLBACK_PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// Debug log message once an input is opened
pub const MSG_OPENED: &str = "opened input";

/// Debug log message once an input is copied and closed
pub const MSG_TRANSFERRED: &str = "transferred input";

/// Debug log message when a run stops on a fatal error
pub const MSG_ABORTED: &str = "aborting run";
