use std::process::ExitCode;

use clap::Parser;
use cmmc_drv::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is_reported() {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code())
        },
    }
}
