pub mod clock;
pub use clock::LoggerClock;

pub mod format;
pub use format::LoggerFormat;

pub mod level;
pub use level::LoggerLevel;

pub mod timezone;
pub use timezone::{LoggerTimeZone, format_offset, init_local_offset};
