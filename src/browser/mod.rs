//! Browser automation layer
//!
//! Provides a scoped headless Chrome session able to load a page, poll for an
//! element and read its rendered text. The fetcher only talks to the
//! [`SessionLauncher`] and [`PageSession`] traits, so the Chrome-backed
//! implementation can be swapped for a scripted one in tests.
//!
//! # Example
//!
//! ```no_run
//! use leetcode_fetcher::browser::{BrowserConfig, ChromeLauncher, PageSession, SessionLauncher};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let launcher = ChromeLauncher::new(BrowserConfig::default());
//! let session = launcher.launch()?;
//!
//! session.navigate("https://example.com")?;
//! session.wait_for_element("h1", Duration::from_secs(10))?;
//! println!("{}", session.element_text("h1")?);
//! // Chrome is terminated when `session` goes out of scope
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod manager;
pub mod scraper;

use std::time::Duration;

pub use config::BrowserConfig;
pub use manager::{BrowserError, ChromeLauncher};
pub use scraper::ChromeSession;

/// A live browser page. Dropping the session terminates the browser.
pub trait PageSession {
    /// Navigate to a URL and wait for the navigation to settle
    fn navigate(&self, url: &str) -> Result<(), BrowserError>;

    /// Poll until an element matching `selector` is present, for at most `timeout`
    fn wait_for_element(&self, selector: &str, timeout: Duration) -> Result<(), BrowserError>;

    /// Rendered text of the first element matching `selector`
    fn element_text(&self, selector: &str) -> Result<String, BrowserError>;
}

/// Starts browser sessions
pub trait SessionLauncher {
    type Session: PageSession;

    fn launch(&self) -> Result<Self::Session, BrowserError>;
}
