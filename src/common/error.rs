//! Error types for the form tester
//!
//! No error here is retried or recovered: every kind is fatal for the run.
//! The top level logs the error once and still releases the browser session
//! before exiting.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the form tester
#[derive(Error, Debug)]
pub enum Error {
    // === Scenario file errors ===
    #[error("Failed to read scenario file '{path}': {source}")]
    ScenarioFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Scenario is missing required field '{field}'")]
    MissingField { field: String },

    // === Page errors ===
    #[error("Form page path '{0}' cannot be turned into a file:// URL")]
    BadFormPath(PathBuf),

    #[error("Element '#{id}' not found on the page")]
    ElementNotFound { id: String },

    #[error("Success message did not become visible within {0} seconds")]
    SuccessTimeout(u64),

    // === Browser session errors ===
    #[error("Failed to start browser session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    #[error("WebDriver command failed: {0}")]
    WebDriver(fantoccini::error::CmdError),

    // === Run outcome ===
    #[error("{0} scenario(s) failed")]
    ScenariosFailed(usize),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a missing-field error for a required form field
    pub fn missing_field(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }

    /// Create an element-not-found error for a page element id
    pub fn element_not_found(id: &str) -> Self {
        Self::ElementNotFound { id: id.to_string() }
    }
}

// Not derived with #[from] so that element lookups can map the
// NoSuchElement case to `ElementNotFound` with the id attached first.
impl From<fantoccini::error::CmdError> for Error {
    fn from(e: fantoccini::error::CmdError) -> Self {
        Error::WebDriver(e)
    }
}
