//! CLI command definitions
//!
//! Defines the clap commands for the form tester.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run every scenario in the data file against the form page
    Run {
        /// Path to the form page, opened via a file:// URL
        #[arg(default_value = "formulario.html")]
        form: PathBuf,

        /// Path to the scenario data file
        #[arg(default_value = "dados_teste.txt")]
        data: PathBuf,

        /// WebDriver endpoint to connect to (chromedriver, geckodriver, or
        /// a Selenium server)
        #[arg(long, default_value = "http://localhost:4444")]
        webdriver_url: String,

        /// Run the browser headless (Chrome)
        #[arg(long)]
        headless: bool,

        /// Continue with remaining scenarios after one fails instead of
        /// aborting the batch
        #[arg(long)]
        keep_going: bool,
    },

    /// Parse a scenario file and print its records without opening a browser
    Check {
        /// Path to the scenario data file
        #[arg(default_value = "dados_teste.txt")]
        data: PathBuf,
    },
}
