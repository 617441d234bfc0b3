use super::config::BrowserConfig;
use super::scraper::ChromeSession;
use super::SessionLauncher;
use headless_chrome::{Browser, LaunchOptions};
use std::ffi::OsStr;

/// Launches headless Chrome sessions from a [`BrowserConfig`]
pub struct ChromeLauncher {
    config: BrowserConfig,
}

impl ChromeLauncher {
    pub fn new(config: BrowserConfig) -> Self {
        Self { config }
    }

    /// Build Chrome launch options from our config
    ///
    /// `args` and `suppressed` are borrowed because `LaunchOptions` only holds
    /// `&OsStr` references.
    fn build_launch_options<'a>(
        config: &BrowserConfig,
        args: &'a [String],
        suppressed: &'a [String],
    ) -> Result<LaunchOptions<'a>, BrowserError> {
        LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some(config.window_size))
            .sandbox(config.sandbox)
            .path(config.chrome_path.clone())
            .args(args.iter().map(OsStr::new).collect())
            .ignore_default_args(suppressed.iter().map(OsStr::new).collect())
            .build()
            .map_err(|e| BrowserError::ConfigurationError(e.to_string()))
    }
}

impl SessionLauncher for ChromeLauncher {
    type Session = ChromeSession;

    fn launch(&self) -> Result<ChromeSession, BrowserError> {
        let args = self.config.launch_args();
        let options =
            Self::build_launch_options(&self.config, &args, &self.config.suppressed_flags)?;

        let browser =
            Browser::new(options).map_err(|e| BrowserError::LaunchError(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| BrowserError::TabCreationError(e.to_string()))?;

        log::debug!("Browser session started");
        Ok(ChromeSession::new(browser, tab))
    }
}

/// Errors that can occur during browser operations
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("Browser launch failed: {0}")]
    LaunchError(String),

    #[error("Browser configuration error: {0}")]
    ConfigurationError(String),

    #[error("Tab creation failed: {0}")]
    TabCreationError(String),

    #[error("Navigation error: {0}")]
    NavigationError(String),

    #[error("Timeout waiting for: {0}")]
    Timeout(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Text extraction error: {0}")]
    TextExtractionError(String),

    #[error("Element has no text: {0}")]
    EmptyContent(String),
}
