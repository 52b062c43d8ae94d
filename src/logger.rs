use std::fs::File;
use std::io::Write;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Minimal log backend: colored lines on stderr, plus an optional plain
/// file sink enabled through `FOLIO_LOG_FILE`.
pub struct Logger {
    severity: Level,
    enable_colors: bool,
    file: Option<Mutex<File>>,
}

impl Logger {
    /// Install the logger, reading severity from `FOLIO_LOG` (or `RUST_LOG`)
    /// and honoring `NO_COLOR`.
    pub fn init() -> Result<(), log::SetLoggerError> {
        let severity = std::env::var("FOLIO_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string())
            .parse::<Level>()
            .unwrap_or(Level::Info);
        let enable_colors = std::env::var("NO_COLOR").is_err();
        let file = std::env::var("FOLIO_LOG_FILE")
            .ok()
            .and_then(|path| File::create(path).ok())
            .map(Mutex::new);

        let logger = Logger {
            severity,
            enable_colors,
            file,
        };
        log::set_max_level(LevelFilter::Trace);
        log::set_logger(Box::leak(Box::new(logger)))
    }

    /// Wall-clock HH:MM:SS, good enough for interactive log lines.
    fn timestamp() -> String {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            (secs / 3600) % 24,
            (secs / 60) % 60,
            secs % 60
        )
    }

    fn color(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[36m",
            Level::Debug => "\x1b[35m",
            Level::Trace => "\x1b[37m",
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.severity
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Self::timestamp();
        let level = record.level().as_str();
        let args = record.args();

        let line = if self.enable_colors {
            let color = Self::color(record.level());
            format!("{color}[{timestamp}] {level}\x1b[0m {args}\n")
        } else {
            format!("[{timestamp}] {level} {args}\n")
        };
        let _ = std::io::stderr().write_all(line.as_bytes());

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "[{timestamp}] {level} {args}");
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
