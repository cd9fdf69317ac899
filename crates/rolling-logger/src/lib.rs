//! Rolling Logger
//!
//! `log` backend that keeps the most recent lines in a circular buffer and
//! echoes every line to the platform console (browser console on wasm32,
//! stderr elsewhere).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
}

/// Fixed-capacity line buffer, oldest lines drop first
#[derive(Debug)]
pub struct RollingBuffer {
    capacity: usize,
    lines: VecDeque<String>,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    buffer: Mutex<RollingBuffer>,
}

impl RollingLogger {
    pub fn new(capacity: usize, app_name: &str, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            buffer: Mutex::new(RollingBuffer::new(capacity)),
        }
    }

    fn format_line(&self, record: &Record) -> String {
        format!(
            "[{}] [{}] {:<5} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            self.app_name,
            record.level(),
            record.target(),
            record.args()
        )
    }

    pub fn recent_lines(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.snapshot(),
            Err(poisoned) => poisoned.into_inner().snapshot(),
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_line(record);
        console_write(record.level(), &line);
        match self.buffer.lock() {
            Ok(mut buffer) => buffer.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn console_write(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn console_write(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Debug builds log at debug level, release at info.
pub fn init_logger(capacity: usize, app_name: &str) -> Result<(), LoggerError> {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    LOGGER
        .set(RollingLogger::new(capacity, app_name, level))
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    let logger = LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines currently held by the global logger, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::recent_lines).unwrap_or_default()
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    let logger = LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    log::info!(target: logger.app_name.as_str(), "{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    let logger = LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    log::error!(target: logger.app_name.as_str(), "{}", msg);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_rolls_over() {
        let mut buffer = RollingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.snapshot(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let mut buffer = RollingBuffer::new(0);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        assert_eq!(buffer.snapshot(), vec!["b"]);
    }

    #[test]
    fn test_logger_filters_and_formats() {
        let logger = RollingLogger::new(10, "KmccAdmin", LevelFilter::Info);
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("reorder")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("reorder")
                .args(format_args!("persist failed"))
                .build(),
        );
        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[KmccAdmin] WARN  reorder: persist failed"));
    }

    #[test]
    fn test_global_init_once() {
        assert_eq!(info("before init"), Err(LoggerError::NotInitialized));
        init_logger(50, "KmccAdmin").unwrap();
        assert_eq!(init_logger(50, "KmccAdmin"), Err(LoggerError::AlreadyInitialized));
        info("admin started").unwrap();
        error("something broke").unwrap();
        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.contains("admin started")));
        assert!(lines.iter().any(|l| l.contains("ERROR") && l.contains("something broke")));
    }
}
