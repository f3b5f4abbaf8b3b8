//! Logging bootstrap.
//!
//! Configure once, then use the standard `log` macros everywhere. Backed
//! by `env_logger`; `RUST_LOG` still overrides the configured level.

use std::sync::Once;

static INIT: Once = Once::new();

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Declarative logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Include module paths and timestamps in output.
    pub verbose_format: bool,
}

impl LoggingConfig {
    /// Chatty output for local development.
    pub fn development() -> Self {
        Self { level: LogLevel::Debug, verbose_format: true }
    }

    /// Quieter defaults for production.
    pub fn production() -> Self {
        Self { level: LogLevel::Info, verbose_format: false }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::production()
    }
}

/// Initialize the global logger. Safe to call more than once; only the
/// first call takes effect.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(config.level.filter());
        if !config.verbose_format {
            builder.format_timestamp_secs().format_target(false);
        }
        // RUST_LOG wins when present
        builder.parse_default_env();
        let _ = builder.try_init();
    });
}
