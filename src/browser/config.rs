use std::path::PathBuf;

/// User agent presented to the problem pages
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/133.0.0.0 Safari/537.36";

/// Configuration for browser instances
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    pub headless: bool,

    /// Browser window size
    pub window_size: (u32, u32),

    /// Custom user agent
    pub user_agent: Option<String>,

    /// Run Chrome with its sandbox enabled
    pub sandbox: bool,

    /// Explicit Chrome/Chromium binary, otherwise auto-detected
    pub chrome_path: Option<PathBuf>,

    /// Additional Chrome flags
    pub chrome_flags: Vec<String>,

    /// Default switches of the launcher that must not be passed to Chrome
    pub suppressed_flags: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: (1280, 720),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            sandbox: true,
            chrome_path: None,
            chrome_flags: vec!["--disable-blink-features=AutomationControlled".to_string()],
            suppressed_flags: vec!["--enable-automation".to_string()],
        }
    }
}

impl BrowserConfig {
    /// All extra arguments handed to Chrome, user agent included
    pub fn launch_args(&self) -> Vec<String> {
        let mut args = self.chrome_flags.clone();
        if let Some(ua) = &self.user_agent {
            args.push(format!("--user-agent={}", ua));
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BrowserConfig::default();
        assert!(config.headless);
        assert_eq!(config.window_size, (1280, 720));
        assert!(config.user_agent.is_some());
        assert!(config.sandbox);
        assert!(config.chrome_path.is_none());
    }

    #[test]
    fn test_automation_detection_suppressed() {
        let config = BrowserConfig::default();
        assert!(config
            .chrome_flags
            .iter()
            .any(|f| f.contains("AutomationControlled")));
        assert_eq!(config.suppressed_flags, vec!["--enable-automation"]);
    }

    #[test]
    fn test_launch_args_include_user_agent() {
        let config = BrowserConfig::default();
        let args = config.launch_args();
        assert_eq!(args.last().unwrap(), &format!("--user-agent={}", DEFAULT_USER_AGENT));
    }

    #[test]
    fn test_launch_args_without_user_agent() {
        let config = BrowserConfig {
            user_agent: None,
            ..BrowserConfig::default()
        };
        assert!(!config.launch_args().iter().any(|a| a.starts_with("--user-agent")));
    }
}
