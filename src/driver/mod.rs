//! Browser automation capability and the page contract
//!
//! The runner drives the form through the [`FormDriver`] trait so it can be
//! tested against a scripted fake without a real browser. The WebDriver
//! implementation lives in [`webdriver`].

pub mod webdriver;

use std::time::Duration;

use async_trait::async_trait;

use crate::common::Result;

pub use webdriver::WebDriverForm;

/// Identifier of the submit trigger on the form page.
pub const SUBMIT_BUTTON_ID: &str = "btnEnviar";

/// Identifier of the element that becomes visible with the success text
/// after submission.
pub const SUCCESS_MESSAGE_ID: &str = "mensagemSucesso";

/// Replacement shown instead of sensitive values in any output.
pub const REDACTED: &str = "********";

/// A field the target form requires.
pub struct FormField {
    /// Element id on the page; doubles as the key in the scenario record.
    pub id: &'static str,
    /// Sensitive values are never written to the log stream verbatim.
    pub sensitive: bool,
}

/// The fields the target form exposes, in the fixed order they are filled.
pub const FIELDS: [FormField; 5] = [
    FormField { id: "nome", sensitive: false },
    FormField { id: "email", sensitive: false },
    FormField { id: "telefone", sensitive: false },
    FormField { id: "senha", sensitive: true },
    FormField { id: "confirmarSenha", sensitive: true },
];

/// True if values for this element id must be redacted in output.
pub fn is_sensitive(id: &str) -> bool {
    FIELDS.iter().any(|f| f.sensitive && f.id == id)
}

/// A field value as it may appear in logs and printed progress.
pub fn loggable<'a>(id: &str, value: &'a str) -> &'a str {
    if is_sensitive(id) {
        REDACTED
    } else {
        value
    }
}

/// Browser-automation operations the runner needs.
///
/// Implementations own one browser session. `close` must be called exactly
/// once on every exit path, success or failure.
#[async_trait]
pub trait FormDriver: Send {
    /// Navigate the session to a URL.
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// Clear the element with this id, then type the value into it.
    /// Fails with an element-not-found error if the id is absent.
    async fn fill(&mut self, id: &str, value: &str) -> Result<()>;

    /// Click the element with this id.
    /// Fails with an element-not-found error if the id is absent.
    async fn click(&mut self, id: &str) -> Result<()>;

    /// Wait until the element with this id is present and displayed,
    /// returning its text. Fails with a timeout error once the deadline
    /// passes without visibility.
    async fn wait_visible(&mut self, id: &str, timeout: Duration) -> Result<String>;

    /// Release the browser session.
    async fn close(self: Box<Self>) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_fields_are_sensitive() {
        assert!(is_sensitive("senha"));
        assert!(is_sensitive("confirmarSenha"));
        assert!(!is_sensitive("nome"));
        assert!(!is_sensitive("email"));
    }

    #[test]
    fn loggable_redacts_sensitive_values() {
        assert_eq!(loggable("senha", "hunter2"), REDACTED);
        assert_eq!(loggable("nome", "Ana Silva"), "Ana Silva");
    }

    #[test]
    fn fields_are_in_fill_order() {
        let ids: Vec<&str> = FIELDS.iter().map(|f| f.id).collect();
        assert_eq!(ids, ["nome", "email", "telefone", "senha", "confirmarSenha"]);
    }
}
