//! CLI command handling
//!
//! Dispatches subcommands to the scenario loader and the runner and formats
//! output.

use colored::Colorize;

use crate::commands::Commands;
use crate::common::{Error, Result};
use crate::driver::{self, WebDriverForm};
use crate::runner::{Pacing, Runner};
use crate::scenario::loader;

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            form,
            data,
            webdriver_url,
            headless,
            keep_going,
        } => {
            println!("{}", "Automated form test run".bold());

            // Session acquisition comes first; a missing driver binary or
            // endpoint aborts before any scenario runs.
            let session = WebDriverForm::connect(&webdriver_url, headless).await?;
            tracing::info!(url = %webdriver_url, "browser session started");
            println!("{} Browser session started", "✓".green());

            let mut runner = Runner::new(Box::new(session), Pacing::default()).keep_going(keep_going);

            // Everything after acquisition funnels through `close` below so
            // the session is released on every path.
            let outcome = async {
                runner.open_form(&form).await?;

                let scenarios = loader::load_scenarios(&data)?;
                println!("{} {} scenario(s) loaded", "✓".green(), scenarios.len());

                runner.run(&scenarios).await
            }
            .await;

            if outcome.is_ok() {
                runner.linger().await;
            }
            let closed = runner.close().await;

            let summary = outcome?;
            closed?;

            summary.print();
            if summary.failed > 0 {
                return Err(Error::ScenariosFailed(summary.failed));
            }
            Ok(())
        }

        Commands::Check { data } => {
            let scenarios = loader::load_scenarios(&data)?;
            println!("{} scenario(s) in {}", scenarios.len(), data.display());

            for (index, scenario) in scenarios.iter().enumerate() {
                println!("\n[{}] {}", index + 1, scenario.label().bold());
                for (key, value) in scenario.iter() {
                    println!("  {} = {}", key, driver::loggable(key, value));
                }
            }
            Ok(())
        }
    }
}
