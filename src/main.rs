//! typeset: fix typography in text from the command line

use std::process::ExitCode;

fn main() -> ExitCode {
    match typeset_cli::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
