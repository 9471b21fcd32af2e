use std::process::ExitCode;

use plantdex::cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(cli::exit_code(&e))
        }
    }
}
