//! File logging via tracing.
//!
//! The terminal belongs to the UI, so log lines go to a file through a
//! non-blocking appender. Nothing is installed unless a level is requested
//! on the command line or through `TUITYPE_LOG`.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "TUITYPE_LOG";

const LOG_FILE_NAME: &str = "tuitype.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub level: Option<LogLevel>,
    pub file: Option<PathBuf>,
}

impl LogConfig {
    /// Filter directive to install, env var first
    fn directive(&self, env: Option<String>) -> Option<String> {
        env.filter(|d| !d.trim().is_empty())
            .or_else(|| self.level.map(|l| format!("tuitype={}", l.as_str())))
    }

    pub fn file_path(&self) -> PathBuf {
        self.file
            .clone()
            .or_else(default_log_path)
            .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
    }
}

pub fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tuitype").map(|pd| pd.data_local_dir().join(LOG_FILE_NAME))
}

/// Install the global subscriber. The returned guard flushes the
/// background writer on drop, so hold it for the life of the program.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let Some(directive) = config.directive(std::env::var(LOG_ENV).ok()) else {
        return Ok(None);
    };
    let filter = EnvFilter::try_new(directive)?;

    let (dir, file_name) = split_log_path(&config.file_path());
    fs::create_dir_all(&dir)?;
    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    tracing::info!(path = %dir.display(), "logging started");
    Ok(Some(guard))
}

fn split_log_path(path: &Path) -> (PathBuf, OsString) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(LOG_FILE_NAME));
    (dir, file_name)
}
