//! Logger utility for application-wide logging
//!
//! This module provides a file-backed logger that records extraction
//! operations and can also serve as the backend of the log crate.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Location of the log file
    path: PathBuf,
    /// Whether records are echoed to stderr
    echo: bool,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, truncated if it exists
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let path = log_file.as_ref().to_path_buf();
        let file = File::create(&path)?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            path,
            echo: false,
        })
    }

    /// Creates a logger that discards operation records
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            path: PathBuf::new(),
            echo: false,
        }
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Installs a logger writing to `log_file` as the log crate backend
    ///
    /// Every record up to `Debug` goes to the file, and is echoed to stderr
    /// when `verbose` is set.
    pub fn init_global_logger<P: AsRef<Path>>(log_file: P, verbose: bool) -> io::Result<()> {
        let mut global_logger = Logger::new(log_file)?;
        global_logger.echo = verbose;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            if self.echo {
                eprintln!("{}", message);
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_messages_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ops.log");
        let logger = Logger::new(&path).unwrap();

        logger.log("first").unwrap();
        logger.log("second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_records_are_formatted_with_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.log");
        let logger = Logger::new(&path).unwrap();

        Log::log(
            &logger,
            &Record::builder()
                .level(Level::Info)
                .args(format_args!("saved {}", "avatar_1.png"))
                .build(),
        );
        Log::log(
            &logger,
            &Record::builder()
                .level(Level::Trace)
                .args(format_args!("dropped"))
                .build(),
        );

        assert_eq!(fs::read_to_string(&path).unwrap(), "[INFO] saved avatar_1.png\n");
    }

    #[test]
    fn test_disabled_logger_accepts_messages() {
        let logger = Logger::disabled();
        assert!(logger.log("ignored").is_ok());
        assert_eq!(logger.path(), Path::new(""));
    }

    #[test]
    fn test_unwritable_location_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Logger::new(dir.path().join("missing").join("x.log")).is_err());
    }
}
