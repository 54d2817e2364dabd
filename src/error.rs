use thiserror::Error;

use crate::session::TimeLimit;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures outside the session core: terminal, config file and logging setup
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(
        "time limit must be between {min} and {max} seconds in steps of {step}, got {0}",
        min = TimeLimit::MIN_SECS,
        max = TimeLimit::MAX_SECS,
        step = TimeLimit::STEP_SECS
    )]
    InvalidTimeLimit(u64),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install logger: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_time_limit_names_bounds() {
        let err = Error::InvalidTimeLimit(7);
        assert_eq!(
            err.to_string(),
            "time limit must be between 10 and 300 seconds in steps of 5, got 7"
        );
    }

    #[test]
    fn io_error_wraps() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io_err);
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn config_error_wraps_serde() {
        let json_err = serde_json::from_str::<u64>("nope").unwrap_err();
        assert!(Error::from(json_err).to_string().contains("config error"));
    }
}
