//! Fetches the problem description from a single page
//!
//! Launch a browser session, open the page, wait for the description element,
//! read its text. Every failure is logged and reported as a not-found
//! [`FetchResult`]; the session is dropped before [`Fetcher::fetch`] returns.

use crate::browser::{BrowserError, ChromeLauncher, PageSession, SessionLauncher};
use crate::config::FetcherConfig;
use crate::helpers::{preview, problem_name_from_url};
use crate::models::FetchResult;
use log::{error, info};
use std::time::Duration;

/// Element holding the problem statement on LeetCode problem pages.
/// Tied to LeetCode's generated class names; update here when the markup changes.
pub const PROBLEM_DESCRIPTION_SELECTOR: &str = ".elfjS";

/// Seconds to wait for the description element before giving up
pub const ELEMENT_WAIT_TIMEOUT_SECS: u64 = 10;

const PREVIEW_CHARS: usize = 100;

pub struct Fetcher<L = ChromeLauncher> {
    launcher: L,
    selector: String,
    timeout: Duration,
}

impl Fetcher<ChromeLauncher> {
    /// Chrome-backed fetcher built from the config file settings
    pub fn from_config(config: &FetcherConfig) -> Self {
        Self::with_launcher(
            ChromeLauncher::new(config.browser_config()),
            config.selector.clone(),
            config.wait_timeout(),
        )
    }
}

impl<L: SessionLauncher> Fetcher<L> {
    pub fn with_launcher(launcher: L, selector: impl Into<String>, timeout: Duration) -> Self {
        Self {
            launcher,
            selector: selector.into(),
            timeout,
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the description at `url`. Never fails; see [`FetchResult`].
    pub fn fetch(&self, url: &str) -> FetchResult {
        match problem_name_from_url(url) {
            Some(name) => info!("Fetching problem description for '{}' from {}", name, url),
            None => info!("Fetching problem description from {}", url),
        }

        match self.fetch_text(url) {
            Ok(text) => {
                let result = FetchResult::from_text(&text);
                info!("Problem description fetched successfully");
                info!("Description length: {}", result.description().chars().count());
                info!(
                    "First {} characters: {}",
                    PREVIEW_CHARS,
                    preview(result.description(), PREVIEW_CHARS)
                );
                result
            }
            Err(e) => {
                error!("Error: {}", e);
                FetchResult::not_found()
            }
        }
    }

    fn fetch_text(&self, url: &str) -> Result<String, BrowserError> {
        let session = self.launcher.launch()?;

        session.navigate(url)?;
        session.wait_for_element(&self.selector, self.timeout)?;

        let text = session.element_text(&self.selector)?;
        if text.trim().is_empty() {
            return Err(BrowserError::EmptyContent(self.selector.clone()));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Calls {
        launched: usize,
        dropped: usize,
        log: Vec<String>,
    }

    struct FakeSession {
        text: Option<&'static str>,
        calls: Rc<RefCell<Calls>>,
    }

    impl PageSession for FakeSession {
        fn navigate(&self, url: &str) -> Result<(), BrowserError> {
            self.calls.borrow_mut().log.push(format!("navigate {}", url));
            Ok(())
        }

        fn wait_for_element(&self, selector: &str, timeout: Duration) -> Result<(), BrowserError> {
            self.calls
                .borrow_mut()
                .log
                .push(format!("wait {} {}", selector, timeout.as_secs()));
            match self.text {
                Some(_) => Ok(()),
                None => Err(BrowserError::Timeout(selector.to_string())),
            }
        }

        fn element_text(&self, selector: &str) -> Result<String, BrowserError> {
            self.calls.borrow_mut().log.push(format!("text {}", selector));
            Ok(self.text.unwrap_or_default().to_string())
        }
    }

    impl Drop for FakeSession {
        fn drop(&mut self) {
            self.calls.borrow_mut().dropped += 1;
        }
    }

    struct FakeLauncher {
        text: Option<&'static str>,
        calls: Rc<RefCell<Calls>>,
    }

    impl SessionLauncher for FakeLauncher {
        type Session = FakeSession;

        fn launch(&self) -> Result<FakeSession, BrowserError> {
            self.calls.borrow_mut().launched += 1;
            Ok(FakeSession {
                text: self.text,
                calls: Rc::clone(&self.calls),
            })
        }
    }

    fn fetcher(text: Option<&'static str>) -> (Fetcher<FakeLauncher>, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let launcher = FakeLauncher {
            text,
            calls: Rc::clone(&calls),
        };
        (
            Fetcher::with_launcher(launcher, PROBLEM_DESCRIPTION_SELECTOR, Duration::from_secs(10)),
            calls,
        )
    }

    #[test]
    fn test_steps_run_in_order() {
        let (fetcher, calls) = fetcher(Some("text"));
        fetcher.fetch("https://leetcode.com/problems/two-sum/");

        assert_eq!(
            calls.borrow().log,
            vec![
                "navigate https://leetcode.com/problems/two-sum/".to_string(),
                "wait .elfjS 10".to_string(),
                "text .elfjS".to_string(),
            ]
        );
    }

    #[test]
    fn test_text_is_trimmed() {
        let (fetcher, calls) = fetcher(Some("  Given an array of integers nums...\n"));
        let result = fetcher.fetch("https://example.com/problems/two-sum/");

        assert!(result.found());
        assert_eq!(result.description(), "Given an array of integers nums...");
        assert_eq!(calls.borrow().dropped, 1);
    }

    #[test]
    fn test_timeout_skips_text_and_releases_session() {
        let (fetcher, calls) = fetcher(None);
        let result = fetcher.fetch("https://example.com/problems/two-sum/");

        assert_eq!(result, FetchResult::not_found());
        assert!(!calls.borrow().log.iter().any(|l| l.starts_with("text")));
        assert_eq!(calls.borrow().launched, 1);
        assert_eq!(calls.borrow().dropped, 1);
    }

    #[test]
    fn test_blank_element_is_not_found() {
        let (fetcher, calls) = fetcher(Some(" \n "));
        assert_eq!(fetcher.fetch("https://example.com"), FetchResult::not_found());
        assert_eq!(calls.borrow().dropped, 1);
    }

    #[test]
    fn test_from_config_defaults() {
        let fetcher = Fetcher::from_config(&FetcherConfig::default());
        assert_eq!(fetcher.selector(), PROBLEM_DESCRIPTION_SELECTOR);
        assert_eq!(fetcher.timeout(), Duration::from_secs(10));
    }
}
