//! Logging middleware for the flow's observability sink.
//!
//! Action messages and fast-forward failures are emitted through
//! `tracing`; this module wires the subscriber:
//! - console records go to stderr so stdout stays free for prompts and
//!   item output
//! - an optional persistent log file receives the same records without
//!   ANSI escapes
//! - levels honor `RUST_LOG` or programmatic configuration

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Log level configuration for the logging middleware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    #[default]
    Info,
    /// Warning level
    Warn,
    /// Error level - least verbose
    Error,
    /// Disable logging entirely
    Off,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
            LogLevel::Off => Level::ERROR, // Will be filtered out by directive
        }
    }
}

impl From<u8> for LogLevel {
    /// Convert verbosity count to log level.
    /// 0 = Info, 1 = Debug, 2+ = Trace
    fn from(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Configuration for the logging middleware.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// The log level to use
    pub level: LogLevel,
    /// Whether to include timestamps
    pub with_timestamps: bool,
    /// Whether to include the target (module path)
    pub with_target: bool,
    /// Optional file that receives every record in addition to stderr
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            with_timestamps: true,
            with_target: true,
            log_file: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set whether to include timestamps.
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.with_timestamps = enabled;
        self
    }

    /// Set whether to include the target (module path).
    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    /// Tee records to the given file, appending across runs.
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    /// Create a configuration from verbosity level (0 = info, 1 = debug, 2+ = trace).
    pub fn from_verbosity(verbosity: u8) -> Self {
        Self::default().with_level(LogLevel::from(verbosity))
    }
}

/// Initialize the logging middleware with the given configuration.
///
/// Call once at the start of the application. Console records are
/// written to stderr so stdout stays clean for prompts and item output.
/// Fails when the log file cannot be opened.
pub fn init_logging(config: LoggingConfig) -> io::Result<()> {
    // Check for RUST_LOG environment variable first
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(config.level.as_directive())
    };

    let console = fmt::layer()
        .with_writer(io::stderr)
        .with_target(config.with_target);
    let console = if config.with_timestamps {
        console.boxed()
    } else {
        console.without_time().boxed()
    };

    let file = match &config.log_file {
        Some(path) => {
            let handle = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(config.with_target)
                    .with_writer(Arc::new(handle))
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .init();
    Ok(())
}

/// Initialize logging with default configuration: info level (unless
/// `RUST_LOG` is set), timestamps, target, stderr only.
pub fn init_default_logging() -> io::Result<()> {
    init_logging(LoggingConfig::default())
}
