//! formtest - automated web form testing over WebDriver
//!
//! Fills and submits a registration form for every scenario in a plain-text
//! data file and verifies the page's success message.

use clap::Parser;
use formtest::{cli, commands, common::logging};

use commands::Commands;

#[derive(Parser)]
#[command(name = "formtest", about = "Automated web form testing over WebDriver")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
