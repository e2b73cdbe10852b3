//! FairAgenda CLI - Local-first trade-fair agenda

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = fairagenda_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
