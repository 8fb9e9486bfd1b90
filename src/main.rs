//! `gitwit` binary entry point.

use std::process::ExitCode;

use gitwit::ui::output;

fn main() -> ExitCode {
    match gitwit::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
