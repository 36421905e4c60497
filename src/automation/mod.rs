//! WebDriver automation for the online PyGame editor.
//!
//! Drives a browser against the Trinket editor page: open, clear the code
//! area, type the generated source, click Run. The page has no stable
//! API, so every step maps its failure to a classified
//! [`AutomationError`] instead of panicking on a structural change.
//!
//! Session lifetime is caller-driven: the browser stays open until
//! [`EditorSession::close`] is called.

use std::time::Duration;

use fantoccini::{Client, ClientBuilder, Locator};
use tracing::{debug, info};

use crate::error::AutomationError;

/// The online PyGame editor the generated code is pasted into.
pub const EDITOR_URL: &str = "https://trinket.io/features/pygame";

/// Default WebDriver endpoint (chromedriver/geckodriver).
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// CSS selector for the editor's code area.
const CODE_AREA_SELECTOR: &str = "textarea";

/// XPath for the editor's Run control.
const RUN_BUTTON_XPATH: &str = "//*[text()='Run']";

/// Upper bound on waiting for page elements to appear.
const ELEMENT_WAIT: Duration = Duration::from_secs(20);

/// An open editor session in a WebDriver-controlled browser.
pub struct EditorSession {
    client: Client,
}

impl EditorSession {
    /// Connects to a WebDriver endpoint and starts a browser session.
    ///
    /// # Errors
    ///
    /// Returns [`AutomationError::Connect`] when the endpoint is
    /// unreachable or refuses a session.
    pub async fn connect(webdriver_url: &str) -> Result<Self, AutomationError> {
        info!(%webdriver_url, "connecting to webdriver");
        let client = ClientBuilder::native()
            .connect(webdriver_url)
            .await
            .map_err(|e| AutomationError::Connect(e.to_string()))?;
        Ok(Self { client })
    }

    /// Opens the editor page, replaces its code with `code`, and clicks Run.
    ///
    /// # Errors
    ///
    /// Returns a classified [`AutomationError`] for the step that failed:
    /// navigation, a missing page element, or a rejected input.
    pub async fn run_code(&self, code: &str) -> Result<(), AutomationError> {
        self.client
            .goto(EDITOR_URL)
            .await
            .map_err(|e| AutomationError::Navigation {
                url: EDITOR_URL.to_string(),
                reason: e.to_string(),
            })?;

        debug!(selector = CODE_AREA_SELECTOR, "waiting for code area");
        let code_area = self
            .client
            .wait()
            .at_most(ELEMENT_WAIT)
            .for_element(Locator::Css(CODE_AREA_SELECTOR))
            .await
            .map_err(|e| AutomationError::ElementNotFound {
                selector: CODE_AREA_SELECTOR.to_string(),
                reason: e.to_string(),
            })?;

        code_area
            .click()
            .await
            .map_err(|e| AutomationError::Input(e.to_string()))?;
        code_area
            .clear()
            .await
            .map_err(|e| AutomationError::Input(e.to_string()))?;
        code_area
            .send_keys(code)
            .await
            .map_err(|e| AutomationError::Input(e.to_string()))?;

        let run_button = self
            .client
            .wait()
            .at_most(ELEMENT_WAIT)
            .for_element(Locator::XPath(RUN_BUTTON_XPATH))
            .await
            .map_err(|e| AutomationError::ElementNotFound {
                selector: RUN_BUTTON_XPATH.to_string(),
                reason: e.to_string(),
            })?;
        run_button
            .click()
            .await
            .map_err(|e| AutomationError::Input(e.to_string()))?;

        info!("code submitted to editor");
        Ok(())
    }

    /// Ends the browser session.
    ///
    /// # Errors
    ///
    /// Returns [`AutomationError::Session`] when the WebDriver refuses the
    /// close command.
    pub async fn close(self) -> Result<(), AutomationError> {
        self.client
            .close()
            .await
            .map_err(|e| AutomationError::Session(e.to_string()))
    }
}
