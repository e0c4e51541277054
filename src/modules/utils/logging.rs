use colored::{ColoredString, Colorize};
use env_logger::{Builder, WriteStyle};
use log::{info, LevelFilter};
use std::cell::RefCell;
use std::fs::OpenOptions;
use std::path::Path;

use super::time::current_timestamp_prefix;

/// Severity of a console message, which also picks its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
    /// Anything that is not one of the known labels
    Plain,
}

impl LogLevel {
    /// Parse a free-form label such as "info" or "WARNING"
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "info" => LogLevel::Info,
            "success" => LogLevel::Success,
            "warning" => LogLevel::Warning,
            "error" => LogLevel::Error,
            _ => LogLevel::Plain,
        }
    }

    fn paint(self, line: &str) -> ColoredString {
        match self {
            LogLevel::Info => line.cyan(),
            LogLevel::Success => line.green(),
            LogLevel::Warning => line.yellow(),
            LogLevel::Error => line.red(),
            LogLevel::Plain => line.white(),
        }
    }

    fn record_level(self) -> log::Level {
        match self {
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
            _ => log::Level::Info,
        }
    }
}

/// Receives leveled messages meant for the person at the terminal
pub trait LogSink {
    fn emit(&self, level: LogLevel, message: &str);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn emit(&self, level: LogLevel, message: &str) {
        (**self).emit(level, message)
    }
}

/// Colored stdout sink with an optional timestamp and a fixed prefix
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    prefix: String,
    show_time: bool,
}

impl ConsoleSink {
    pub fn new(prefix: impl Into<String>, show_time: bool) -> Self {
        Self {
            prefix: prefix.into(),
            show_time,
        }
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn set_show_time(&mut self, show_time: bool) {
        self.show_time = show_time;
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn show_time(&self) -> bool {
        self.show_time
    }

    /// Build the uncolored line: optional timestamp, prefix, message
    pub fn format_line(&self, message: &str) -> String {
        let timestamp = if self.show_time {
            current_timestamp_prefix()
        } else {
            String::new()
        };
        format!("{}{}{}", timestamp, self.prefix, message)
    }

    /// Print with a textual level; unknown labels are printed in white.
    ///
    /// Returns the level the label resolved to.
    pub fn print_labeled(&self, text: &str, label: &str) -> LogLevel {
        let level = LogLevel::from_label(label);
        self.emit(level, text);
        level
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new("[TKX] ", true)
    }
}

impl LogSink for ConsoleSink {
    fn emit(&self, level: LogLevel, message: &str) {
        let line = self.format_line(message);
        println!("{}", level.paint(&line));
        log::log!(level.record_level(), "{}{}", self.prefix, message);
    }
}

/// Sink that keeps every message in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: RefCell<Vec<(LogLevel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.borrow().clone()
    }

    pub fn last(&self) -> Option<(LogLevel, String)> {
        self.entries.borrow().last().cloned()
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(entry_level, _)| *entry_level == level)
            .count()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl LogSink for MemorySink {
    fn emit(&self, level: LogLevel, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}

/// Initialize the diagnostic log, appending to `log_file`.
///
/// `RUST_LOG` overrides the default `Info` filter.
pub fn initialize_logging(log_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .write_style(WriteStyle::Never)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    info!("Logging system initialized");
    Ok(())
}
