//! # Logger
//!
//! Installs the global `tracing` subscriber for the cosmology tools.
//!
//! Console output goes to **stderr** so that data written to stdout (exported
//! mappings, JSON documents) stays machine readable. An optional rolling log
//! file can be added, in plain text or JSON lines.
//!
//! `RUST_LOG` is honoured when no explicit filter is configured.
//!
//! ```rust,no_run
//! use cosmo_logger::{FileOutput, LevelFilter, Logger};
//!
//! let _logger = Logger::builder("cosmo")
//!     .level(LevelFilter::DEBUG)
//!     .file(FileOutput::new("logs").json(true))
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use cosmo_domain::config::LoggingConfig;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Rolling log file settings.
#[derive(Debug, Clone)]
pub struct FileOutput {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl FileOutput {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Number of rotated files kept on disk.
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Write JSON lines instead of plain text.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }
}

/// Configures and installs the global subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    level: LevelFilter,
    env_filter: Option<String>,
    console: bool,
    ansi: bool,
    file: Option<FileOutput>,
}

impl LoggerBuilder {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Explicit filter directives (`cosmo_mapping=trace,info`). Replaces `RUST_LOG`.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    #[must_use]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.ansi = enabled;
        self
    }

    #[must_use]
    pub fn file(mut self, output: FileOutput) -> Self {
        self.file = Some(output);
        self
    }

    /// Applies the `[logging]` section of the tool configuration.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name.
    pub fn with_config(mut self, config: &LoggingConfig) -> Result<Self, LoggerError> {
        self.level = config.level.parse().map_err(|_| LoggerError::InvalidConfiguration {
            message: format!("unknown log level '{}'", config.level).into(),
            context: None,
        })?;
        if let Some(filter) = &config.env_filter {
            self.env_filter = Some(filter.clone());
        }
        if let Some(directory) = &config.directory {
            self.file = Some(FileOutput::new(directory).json(config.json));
        }
        Ok(self)
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive while logging: it owns the
    /// background writer of the log file.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, an invalid
    ///   filter, zero retained files or no enabled output.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the log file cannot be created.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.build_filter()?;

        let mut layers = Vec::new();
        if self.console {
            layers.push(layer().compact().with_writer(io::stderr).with_ansi(self.ansi).boxed());
        }

        let guard = match &self.file {
            Some(output) => {
                fs::create_dir_all(&output.directory)
                    .context(format!("creating {}", output.directory.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(output.rotation.clone())
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(output.max_files)
                    .build(&output.directory)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                let boxed = if output.json { file_layer.json().boxed() } else { file_layer.boxed() };
                layers.push(boxed);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(logger = %self.name, level = %self.level, "Logging initialized");

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        let problem = if self.name.trim().is_empty() {
            Some("logger name cannot be empty")
        } else if self.file.as_ref().is_some_and(|f| f.max_files == 0) {
            Some("max_files must be greater than zero")
        } else if !self.console && self.file.is_none() {
            Some("no output enabled, enable the console or a log file")
        } else {
            None
        };
        problem.map_or(Ok(()), |message| {
            Err(LoggerError::InvalidConfiguration { message: message.into(), context: None })
        })
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.env_filter {
            None => Ok(builder.from_env_lossy()),
            Some(directives) => {
                builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("invalid filter '{directives}': {e}").into(),
                    context: None,
                })
            },
        }
    }
}

/// Handle to the installed subscriber. Dropping it flushes the log file.
#[must_use = "Dropping this handle stops the log file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder; `name` prefixes the log file names (`cosmo.2026-01-01.log`).
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            level: LevelFilter::INFO,
            env_filter: None,
            console: true,
            ansi: true,
            file: None,
        }
    }

    /// Whether a log file is being written.
    #[must_use]
    pub const fn writes_file(&self) -> bool {
        self.guard.is_some()
    }
}
