//! Catena: concatenate files to standard output

use std::process;

use clap::Parser;

use catena::args::{Args, program_name};
use catena::constants::MSG_ABORTED;
use catena::{engine, logging, output};
use catena_common::io::TransferStats;
use catena_common::{EXIT_FATAL, TransferError};

fn main() {
    let args = Args::parse();
    logging::init(args.debug);

    match run(&args) {
        Ok(total) => {
            tracing::debug!(bytes = total.bytes, chunks = total.chunks, "done");
        }
        Err(e) => {
            tracing::debug!(kind = %e.kind, "{}", MSG_ABORTED);
            eprintln!("{}", e);
            process::exit(EXIT_FATAL);
        }
    }
}

fn run(args: &Args) -> Result<TransferStats, TransferError> {
    let program = program_name();
    let stdout = output::stdout().map_err(|e| TransferError::write(program.as_str(), e))?;
    engine::concatenate(&program, args.paths.as_slice(), stdout)
}
