//! Core logging bootstrap.
//!
//! # Responsibility
//! - Start one size-rotated file logger per process.
//! - Capture panics as sanitized, metadata-only log events.
//!
//! # Invariants
//! - Initialization is idempotent for the same level and directory.
//! - Reconfiguration with a different level or directory is rejected.
//! - Initialization never panics.
//! - Events never include record names or search text.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "record_table";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Supported log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parses a level name case-insensitively; `warning` is accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// `debug` for debug builds, `info` for release builds.
    pub fn build_default() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Info
        }
    }
}

/// Logging bootstrap error.
#[derive(Debug)]
pub enum LoggingError {
    UnsupportedLevel(String),
    EmptyDirectory,
    RelativeDirectory(String),
    CreateDirectory { dir: PathBuf, source: std::io::Error },
    Backend(flexi_logger::FlexiLoggerError),
    /// Already running with another level or directory.
    Conflict { active: String, requested: String },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyDirectory => write!(f, "log_dir cannot be empty"),
            Self::RelativeDirectory(dir) => {
                write!(f, "log_dir must be an absolute path, got `{dir}`")
            }
            Self::CreateDirectory { dir, source } => write!(
                f,
                "failed to create log directory `{}`: {source}",
                dir.display()
            ),
            Self::Backend(err) => write!(f, "failed to start logger: {err}"),
            Self::Conflict { active, requested } => write!(
                f,
                "logging already initialized with `{active}`; refusing to switch to `{requested}`"
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDirectory { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

/// Active logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingStatus {
    pub level: LogLevel,
    pub log_dir: PathBuf,
}

struct ActiveLogger {
    status: LoggingStatus,
    _handle: LoggerHandle,
}

/// Starts rolling file logs under `log_dir`.
///
/// # Errors
/// - `UnsupportedLevel` for unknown level names.
/// - `EmptyDirectory` / `RelativeDirectory` for unusable directories.
/// - `Conflict` when already active with another level or directory.
/// - `CreateDirectory` / `Backend` when the logger cannot start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    let requested = LoggingStatus {
        level: LogLevel::parse(level)
            .ok_or_else(|| LoggingError::UnsupportedLevel(level.trim().to_string()))?,
        log_dir: absolute_dir(log_dir)?,
    };

    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(&requested))?;
    if active.status != requested {
        return Err(LoggingError::Conflict {
            active: describe(&active.status),
            requested: describe(&requested),
        });
    }
    Ok(())
}

/// Returns the active configuration, or `None` before `init_logging`.
pub fn logging_status() -> Option<LoggingStatus> {
    ACTIVE_LOGGER.get().map(|active| active.status.clone())
}

fn start_logger(status: &LoggingStatus) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(&status.log_dir).map_err(|source| LoggingError::CreateDirectory {
        dir: status.log_dir.clone(),
        source,
    })?;

    let handle = Logger::try_with_str(status.level.as_str())
        .map_err(LoggingError::Backend)?
        .log_to_file(
            FileSpec::default()
                .directory(status.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(LoggingError::Backend)?;

    install_panic_hook();
    info!(
        "event=core_init module=logging status=ok version={} level={}",
        env!("CARGO_PKG_VERSION"),
        status.level.as_str()
    );

    Ok(ActiveLogger {
        status: status.clone(),
        _handle: handle,
    })
}

fn absolute_dir(log_dir: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(LoggingError::EmptyDirectory);
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(LoggingError::RelativeDirectory(trimmed.to_string()));
    }
    Ok(path.to_path_buf())
}

fn describe(status: &LoggingStatus) -> String {
    format!("{} at {}", status.level.as_str(), status.log_dir.display())
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            single_line(&payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous(panic_info);
    }));
}

/// Flattens newlines and truncates to `max_chars`, appending `...`.
fn single_line(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let mut truncated = flattened.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated
}
