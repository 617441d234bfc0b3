//! log4rs setup. Everything goes to stderr; stdout is reserved for the result.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const STDERR_PATTERN: &str = "{m}{n}";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid logging configuration: {0}")]
    Config(String),

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Parse a level name, defaulting to `warn`
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Warn)
}

/// Install the stderr console logger at `level`. No `log4rs.yml` is read.
pub fn init(level: &str) -> Result<(), LoggingError> {
    let config = stderr_config(parse_level(level))?;
    log4rs::init_config(config)
        .map(|_| ())
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

fn stderr_config(level: LevelFilter) -> Result<Config, LoggingError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| LoggingError::Config(e.to_string()))
}
