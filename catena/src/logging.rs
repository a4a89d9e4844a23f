//! Debug logging setup

use tracing::Level;

use crate::constants::ERR_LOGGING_INIT;

/// Install the stderr log subscriber when `--debug` is given
///
/// Without `--debug` no subscriber is installed and every `tracing` event is
/// discarded, so the only thing a run ever prints to stderr is its fatal
/// diagnostic.
pub fn init(debug: bool) {
    if !debug {
        return;
    }

    let subscriber = tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("{}{}", ERR_LOGGING_INIT, e);
    }
}
