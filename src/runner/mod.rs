//! Form test orchestration
//!
//! Runs scenarios strictly in sequence against a [`FormDriver`]: fill every
//! required field, submit, then wait for the success indicator. The batch
//! aborts on the first failure unless `keep_going` is set.

use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use tokio::time::sleep;
use url::Url;

use crate::common::{Error, Result};
use crate::driver::{self, FormDriver, SUBMIT_BUTTON_ID, SUCCESS_MESSAGE_ID};
use crate::scenario::Scenario;

/// Fixed pauses around browser interactions.
///
/// The defaults reproduce the observed pacing of the original workflow:
/// settle delays after navigation and submission rather than an explicit
/// readiness poll.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    /// Pause after opening the form page, letting its scripts initialize.
    pub page_settle: Duration,
    /// Pause after clicking submit, before checking for success.
    pub submit_settle: Duration,
    /// Pause between consecutive scenarios.
    pub between_scenarios: Duration,
    /// Longest wait for the success indicator to become visible.
    pub success_timeout: Duration,
    /// Pause before the browser is closed at the end of a successful run.
    pub exit_linger: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            page_settle: Duration::from_secs(2),
            submit_settle: Duration::from_secs(2),
            between_scenarios: Duration::from_secs(2),
            success_timeout: Duration::from_secs(5),
            exit_linger: Duration::from_secs(5),
        }
    }
}

impl Pacing {
    /// All-zero pacing for tests against a fake driver.
    pub fn none() -> Self {
        Self {
            page_settle: Duration::ZERO,
            submit_settle: Duration::ZERO,
            between_scenarios: Duration::ZERO,
            success_timeout: Duration::ZERO,
            exit_linger: Duration::ZERO,
        }
    }
}

/// Tally of a completed run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub executed: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Print the closing tally.
    pub fn print(&self) {
        println!("\n{}", "=".repeat(60));
        if self.failed == 0 {
            println!(
                "{}",
                format!("✓ {} test(s) executed successfully", self.executed)
                    .green()
                    .bold()
            );
        } else {
            println!(
                "{}",
                format!("✗ {} of {} test(s) failed", self.failed, self.executed)
                    .red()
                    .bold()
            );
        }
        println!("{}", "=".repeat(60));
    }
}

/// Drives the form for every scenario, in file order.
///
/// Owns the browser session for the process lifetime; [`Runner::close`]
/// releases it and must be reached on every exit path.
pub struct Runner {
    driver: Box<dyn FormDriver>,
    pacing: Pacing,
    keep_going: bool,
}

impl Runner {
    pub fn new(driver: Box<dyn FormDriver>, pacing: Pacing) -> Self {
        Self {
            driver,
            pacing,
            keep_going: false,
        }
    }

    /// Continue with remaining scenarios after one fails. Off by default:
    /// the first failure aborts the batch.
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Navigate to the form page and let its scripts settle.
    ///
    /// The fixed settle delay reproduces the original pacing; polling for a
    /// known element would be the robust alternative.
    pub async fn open_form(&mut self, page: &Path) -> Result<()> {
        let page = page
            .canonicalize()
            .map_err(|_| Error::BadFormPath(page.to_path_buf()))?;
        let url = Url::from_file_path(&page).map_err(|()| Error::BadFormPath(page.clone()))?;

        self.driver.goto(url.as_str()).await?;
        tracing::info!(%url, "form page opened");
        println!("{} Form page opened", "✓".green());

        sleep(self.pacing.page_settle).await;
        Ok(())
    }

    /// Fill, submit, and verify one scenario, returning the success text.
    ///
    /// Fields are filled in the fixed form order; a missing required key
    /// fails the scenario before anything is submitted.
    pub async fn run_scenario(&mut self, scenario: &Scenario) -> Result<String> {
        println!("{}", "=".repeat(60));
        println!("Scenario: {}", scenario.label().bold());
        println!("{}", "=".repeat(60));

        println!("Filling form...");
        for field in &driver::FIELDS {
            let value = scenario.require(field.id)?;
            self.driver.fill(field.id, value).await?;
            println!(
                "  {} {}: {}",
                "✓".green(),
                field.id,
                driver::loggable(field.id, value)
            );
        }

        println!("Submitting...");
        self.driver.click(SUBMIT_BUTTON_ID).await?;
        sleep(self.pacing.submit_settle).await;

        println!("Verifying...");
        let message = self
            .driver
            .wait_visible(SUCCESS_MESSAGE_ID, self.pacing.success_timeout)
            .await?;
        println!("  {} Success: {}", "✓".green(), message);

        Ok(message)
    }

    /// Run every scenario in order, printing progress per scenario.
    ///
    /// With `keep_going`, a failed scenario is tallied and the run moves on;
    /// otherwise the error propagates and the remaining scenarios are
    /// skipped.
    pub async fn run(&mut self, scenarios: &[Scenario]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, scenario) in scenarios.iter().enumerate() {
            println!("\n[scenario {}/{}]", index + 1, scenarios.len());

            summary.executed += 1;
            match self.run_scenario(scenario).await {
                Ok(_) => summary.passed += 1,
                Err(e) => {
                    summary.failed += 1;
                    if !self.keep_going {
                        return Err(e);
                    }
                    tracing::warn!(error = %e, "scenario failed, continuing");
                    println!("  {} {}", "✗".red(), e);
                }
            }

            sleep(self.pacing.between_scenarios).await;
        }

        Ok(summary)
    }

    /// Pause before shutdown so a visible browser can be inspected.
    pub async fn linger(&self) {
        sleep(self.pacing.exit_linger).await;
    }

    /// Release the browser session. Every exit path must reach this
    /// exactly once.
    pub async fn close(self) -> Result<()> {
        let result = self.driver.close().await;
        tracing::info!("browser session closed");
        result
    }
}
