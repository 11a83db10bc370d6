//! bambu-link CLI - generate camera stream URLs from the Bambu Lab cloud.
//!
//! Logs into the vendor cloud, lists the account's printers, fetches the
//! streaming credentials for one of them, and prints a bambu:///tutk URL.

mod cli;
mod commands;
mod error;
mod output;
mod prompt;
mod select;

use std::io::{self, IsTerminal};

use clap::Parser;

use cli::Cli;
use error::{exit_codes, CliError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let result = tokio::select! {
        result = run(cli) => result,
        _ = tokio::signal::ctrl_c() => {
            if io::stdout().is_terminal() {
                eprintln!("\nInterrupted by user.");
            }
            std::process::exit(exit_codes::FAILURE);
        }
    };

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("ERROR: {}: {}", e.tag(), e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    if cli.login {
        return commands::run_login().await;
    }

    if cli.discover {
        return commands::run_discover().await;
    }

    commands::run_generate(cli).await
}
