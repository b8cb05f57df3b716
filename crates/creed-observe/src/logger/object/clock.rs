use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use crate::logger::object::timezone::{LoggerTimeZone, local_offset};

/// RFC 3339 timestamp formatter for log lines.
#[derive(Debug, Clone, Copy)]
pub struct LoggerClock {
    tz: LoggerTimeZone,
}

impl LoggerClock {
    pub fn new(tz: LoggerTimeZone) -> Self {
        Self { tz }
    }

    fn now(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();
        match self.tz {
            LoggerTimeZone::Utc => now,
            LoggerTimeZone::Local => now.to_offset(local_offset()),
        }
    }
}

impl FormatTime for LoggerClock {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        match self.now().format(&Rfc3339) {
            Ok(ts) => write!(w, "{} ", ts),
            Err(_) => write!(w, "<invalid-time> "),
        }
    }
}
