//! WebDriver-backed form driver
//!
//! Talks to a WebDriver endpoint (chromedriver, geckodriver, or a Selenium
//! server) through fantoccini.

use std::time::Duration;

use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;

use crate::common::{Error, Result};

use super::FormDriver;

/// How often the visibility wait re-checks the page.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// A form driver over a live WebDriver session.
pub struct WebDriverForm {
    client: Client,
}

impl WebDriverForm {
    /// Connect to a WebDriver endpoint and open a new browser session.
    ///
    /// Failure here is fatal and aborts before any scenario runs.
    pub async fn connect(webdriver_url: &str, headless: bool) -> Result<Self> {
        let mut builder = ClientBuilder::rustls();

        if headless {
            let mut caps = serde_json::map::Map::new();
            caps.insert(
                "goog:chromeOptions".to_string(),
                json!({ "args": ["--headless=new"] }),
            );
            builder.capabilities(caps);
        }

        let client = builder.connect(webdriver_url).await?;
        Ok(Self { client })
    }

    /// Locate a single element by its id attribute.
    async fn find(&mut self, id: &str) -> Result<Element> {
        match self.client.find(Locator::Id(id)).await {
            Ok(element) => Ok(element),
            Err(CmdError::NoSuchElement(_)) => Err(Error::element_not_found(id)),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl FormDriver for WebDriverForm {
    async fn goto(&mut self, url: &str) -> Result<()> {
        self.client.goto(url).await?;
        Ok(())
    }

    async fn fill(&mut self, id: &str, value: &str) -> Result<()> {
        let mut element = self.find(id).await?;
        element.clear().await?;
        element.send_keys(value).await?;
        Ok(())
    }

    async fn click(&mut self, id: &str) -> Result<()> {
        self.find(id).await?.click().await?;
        Ok(())
    }

    async fn wait_visible(&mut self, id: &str, timeout: Duration) -> Result<String> {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            // Presence alone is not enough: the success element sits in the
            // DOM from page load and only becomes displayed after submit.
            if let Ok(mut element) = self.find(id).await {
                if element.is_displayed().await? {
                    return Ok(element.text().await?);
                }
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(Error::SuccessTimeout(timeout.as_secs()));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}
