//! kaskel-monitor - CLI for watching Bank Indonesia Kas Keliling slots
//!
//! Monitors the PINTAR cash-exchange scheduling portal and prints the
//! appointment slots currently offered in a region:
//! - `slots` / `summary` for the current listing
//! - `regions` for the province reference table
//! - `set-region` to persist the watched region

mod cli;
mod core;
mod logging;
mod pintar;
mod settings;

use clap::Parser;
use cli::{exit_codes, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_output) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(exit_codes::UNEXPECTED_FAILURE);
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create runtime: {}", e);
            std::process::exit(exit_codes::UNEXPECTED_FAILURE);
        }
    };

    let exit_code = rt.block_on(async {
        match cli::run(cli).await {
            Ok(()) => exit_codes::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                exit_codes::UNEXPECTED_FAILURE
            }
        }
    });

    std::process::exit(exit_code);
}
