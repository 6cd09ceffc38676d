use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::{ScrubError, ScrubResult};

/// Logging configuration for lorascrub
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: PathBuf,
    pub enable_file_logging: bool,
    pub max_log_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: PathBuf::from("logs"),
            enable_file_logging: true,
            max_log_files: 10,
        }
    }
}

/// Initialize the logging system. The terminal belongs to the TUI, so
/// nothing is ever written to stdout or stderr; records go to a daily
/// rolling file, or nowhere at all when file logging is off. The returned
/// guard flushes buffered records on drop and must stay alive for the
/// lifetime of the program.
pub fn init_logging(config: &LoggingConfig) -> ScrubResult<WorkerGuard> {
    if config.enable_file_logging {
        fs::create_dir_all(&config.log_dir)
            .map_err(|e| ScrubError::file_io(config.log_dir.to_string_lossy(), e))?;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lorascrub={}", config.level)));

    let (writer, guard) = if config.enable_file_logging {
        let file_appender = rolling::daily(&config.log_dir, "lorascrub.log");
        non_blocking(file_appender)
    } else {
        non_blocking(std::io::sink())
    };

    Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    info!("lorascrub logging initialized");
    info!("Log level: {}", config.level);
    if config.enable_file_logging {
        info!("File logging enabled: {}", config.log_dir.display());
    }

    Ok(guard)
}

/// Remove the oldest rolled log files once more than `max_log_files` exist.
pub fn cleanup_old_logs(config: &LoggingConfig) -> ScrubResult<()> {
    if !config.enable_file_logging {
        return Ok(());
    }

    let entries = match fs::read_dir(&config.log_dir) {
        Ok(entries) => entries,
        // Nothing to clean before the first run
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(ScrubError::file_io(config.log_dir.to_string_lossy(), e)),
    };

    let mut log_files = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| ScrubError::file_io(config.log_dir.to_string_lossy(), e))?;
        let path = entry.path();
        let is_log = path
            .file_name()
            .and_then(|s| s.to_str())
            .is_some_and(|name| name.starts_with("lorascrub.log"));
        if is_log {
            if let Ok(metadata) = fs::metadata(&path) {
                let modified = metadata
                    .modified()
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                log_files.push((path, modified));
            }
        }
    }

    // Newest first, then drop everything past the limit
    log_files.sort_by(|a, b| b.1.cmp(&a.1));

    if log_files.len() > config.max_log_files {
        for (path, _) in &log_files[config.max_log_files..] {
            if let Err(e) = fs::remove_file(path) {
                warn!("Failed to remove old log file {}: {}", path.display(), e);
            } else {
                info!("Removed old log file: {}", path.display());
            }
        }
    }

    Ok(())
}
