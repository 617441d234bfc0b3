use super::manager::BrowserError;
use super::PageSession;
use headless_chrome::{Browser, Tab};
use std::sync::Arc;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A Chrome process together with the tab it drives.
///
/// Chrome is killed when the session is dropped.
pub struct ChromeSession {
    tab: Arc<Tab>,
    // Held only so the process lives exactly as long as the session.
    _browser: Browser,
}

impl ChromeSession {
    pub(crate) fn new(browser: Browser, tab: Arc<Tab>) -> Self {
        Self {
            tab,
            _browser: browser,
        }
    }

    /// Get a reference to the underlying tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    fn query(&self, expression: &str) -> Result<Option<serde_json::Value>, BrowserError> {
        self.tab
            .evaluate(expression, false)
            .map(|result| result.value)
            .map_err(|e| BrowserError::TextExtractionError(e.to_string()))
    }
}

/// Sleep before the next poll, capped by the time left; `None` once the deadline has passed
fn next_poll_delay(elapsed: Duration, timeout: Duration) -> Option<Duration> {
    let remaining = timeout.checked_sub(elapsed).filter(|d| !d.is_zero())?;
    Some(remaining.min(POLL_INTERVAL))
}

/// JavaScript string literal for a CSS selector
fn js_selector(selector: &str) -> String {
    serde_json::Value::String(selector.to_string()).to_string()
}

impl PageSession for ChromeSession {
    fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        self.tab.navigate_to(url).map_err(|e| {
            BrowserError::NavigationError(format!("Failed to navigate to {}: {}", url, e))
        })?;

        self.tab.wait_until_navigated().map_err(|e| {
            BrowserError::NavigationError(format!("Navigation timeout for {}: {}", url, e))
        })?;

        Ok(())
    }

    /// Polls every 100ms until the deadline. The deadline is checked between
    /// evaluations, so one evaluation stalled inside headless_chrome can run past it.
    fn wait_for_element(&self, selector: &str, timeout: Duration) -> Result<(), BrowserError> {
        let start = Instant::now();
        let script = format!("document.querySelector({}) !== null", js_selector(selector));

        loop {
            // Evaluation errors while the page is still settling are retried
            if let Ok(Some(value)) = self.query(&script) {
                if value.as_bool() == Some(true) {
                    return Ok(());
                }
            }

            match next_poll_delay(start.elapsed(), timeout) {
                Some(delay) => std::thread::sleep(delay),
                None => {
                    return Err(BrowserError::Timeout(format!(
                        "selector {} after {}s",
                        selector,
                        timeout.as_secs_f64()
                    )))
                }
            }
        }
    }

    fn element_text(&self, selector: &str) -> Result<String, BrowserError> {
        let script = format!(
            "(() => {{ const el = document.querySelector({}); return el ? el.innerText : null; }})()",
            js_selector(selector)
        );

        match self.query(&script)? {
            Some(serde_json::Value::String(text)) => Ok(text),
            _ => Err(BrowserError::ElementNotFound(selector.to_string())),
        }
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        log::debug!("Browser session closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{BrowserConfig, ChromeLauncher, SessionLauncher};

    #[test]
    fn test_js_selector_quoting() {
        assert_eq!(js_selector(".elfjS"), "\".elfjS\"");
        assert_eq!(js_selector("a[title=\"x\"]"), "\"a[title=\\\"x\\\"]\"");
        assert_eq!(js_selector("a[title='x']"), "\"a[title='x']\"");
    }

    #[test]
    fn test_poll_delay_within_deadline() {
        let timeout = Duration::from_secs(10);
        assert_eq!(next_poll_delay(Duration::ZERO, timeout), Some(POLL_INTERVAL));
        assert_eq!(
            next_poll_delay(Duration::from_millis(9_950), timeout),
            Some(Duration::from_millis(50))
        );
    }

    #[test]
    fn test_poll_delay_after_deadline() {
        let timeout = Duration::from_secs(10);
        assert_eq!(next_poll_delay(timeout, timeout), None);
        assert_eq!(next_poll_delay(Duration::from_secs(25), timeout), None);
        assert_eq!(next_poll_delay(Duration::ZERO, Duration::ZERO), None);
    }

    #[test]
    #[ignore] // Requires Chrome to be installed and internet
    fn test_basic_navigation() {
        let session = ChromeLauncher::new(BrowserConfig::default()).launch().unwrap();
        assert!(session.navigate("https://example.com").is_ok());
    }

    #[test]
    #[ignore] // Requires Chrome to be installed and internet
    fn test_element_text() {
        let session = ChromeLauncher::new(BrowserConfig::default()).launch().unwrap();
        session.navigate("https://example.com").unwrap();
        session.wait_for_element("h1", Duration::from_secs(10)).unwrap();

        let text = session.element_text("h1").unwrap();
        assert!(text.contains("Example Domain"));
    }

    #[test]
    #[ignore] // Requires Chrome to be installed and internet
    fn test_wait_for_missing_element_times_out() {
        let session = ChromeLauncher::new(BrowserConfig::default()).launch().unwrap();
        session.navigate("https://example.com").unwrap();

        let result = session.wait_for_element(".does-not-exist", Duration::from_millis(500));
        assert!(matches!(result, Err(BrowserError::Timeout(_))));
    }
}
