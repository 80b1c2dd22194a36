//! Logging setup with rotation support

use crate::error::{AppError, Result};
use log::LevelFilter;
use simplelog::{CombinedLogger, ConfigBuilder, SharedLogger, WriteLogger};
#[cfg(debug_assertions)]
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// Default log filename
const LOG_FILENAME: &str = "adhan_times.log";

/// Logging configuration
pub struct LoggingSetup {
    pub level: LevelFilter,
    pub log_dir: PathBuf,
    pub max_file_size: u64,
    pub max_files: u32,
}

impl Default for LoggingSetup {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            log_dir: PathBuf::from("."),
            max_file_size: 2 * 1024 * 1024, // 2MB
            max_files: 2,
        }
    }
}

/// Initialize the logging system
pub fn init_logging(setup: LoggingSetup) -> Result<()> {
    fs::create_dir_all(&setup.log_dir)?;

    let log_path = setup.log_dir.join(LOG_FILENAME);

    rotate_logs(&log_path, setup.max_file_size, setup.max_files)?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(AppError::IoError)?;

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Debug)
        .set_thread_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    // Terminal logger (for debug builds)
    #[cfg(debug_assertions)]
    {
        loggers.push(TermLogger::new(
            setup.level,
            log_config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    loggers.push(WriteLogger::new(setup.level, log_config, log_file));

    CombinedLogger::init(loggers)
        .map_err(|e| AppError::ConfigError(format!("Logger init failed: {}", e)))?;

    log::debug!("Logging initialized at level {:?}", setup.level);

    Ok(())
}

/// Rotate log files if the current log exceeds max size
fn rotate_logs(log_path: &PathBuf, max_size: u64, max_files: u32) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let metadata = fs::metadata(log_path)?;
    if metadata.len() < max_size {
        return Ok(());
    }

    let oldest = log_path.with_extension(format!("log.{}", max_files));
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }

    for i in (1..max_files).rev() {
        let old_name = log_path.with_extension(format!("log.{}", i));
        let new_name = log_path.with_extension(format!("log.{}", i + 1));
        if old_name.exists() {
            fs::rename(&old_name, &new_name)?;
        }
    }

    let backup = log_path.with_extension("log.1");
    fs::rename(log_path, &backup)?;

    Ok(())
}

/// Parse log level from string
pub fn parse_log_level(level_str: &str) -> LevelFilter {
    match level_str.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}
