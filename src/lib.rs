//! formtest - automated functional testing of web forms
//!
//! Drives a browser through a WebDriver endpoint to fill and submit a
//! registration form once per scenario in a plain-text data file, then
//! checks the page's success indicator after each submission.

pub mod cli;
pub mod commands;
pub mod common;
pub mod driver;
pub mod runner;
pub mod scenario;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use scenario::Scenario;
