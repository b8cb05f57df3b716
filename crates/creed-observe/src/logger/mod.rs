mod config;
mod error;
mod log;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone, format_offset, init_local_offset};

/// Installs the global tracing subscriber described by `cfg`.
///
/// With [`LoggerTimeZone::Local`], call [`init_local_offset`] first, before any
/// thread is spawned; otherwise timestamps fall back to UTC.
///
/// # Examples
/// ```rust
/// use creed_observe::{LoggerConfig, init_logger};
///
/// fn main() {
///     let config = LoggerConfig::default();
///     init_logger(&config).expect("Failed to initialize logger");
///
///     tracing::info!("Logger initialized successfully");
/// }
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => log::logger_text(cfg),
        LoggerFormat::Json => log::logger_json(cfg),
        LoggerFormat::Journald => log::logger_journald(cfg),
    }
}
