//! Source of the request instant.
use std::sync::Arc;

use time::{OffsetDateTime, UtcOffset};

/// Provides "now" for chart requests.
pub trait Clock: Send + Sync + 'static {
    /// Current instant. Sampled once per request.
    fn now(&self) -> OffsetDateTime;
}

/// Shared handle to a clock.
pub type ClockHandle = Arc<dyn Clock>;

/// Wall clock reporting time in a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    /// Clock reporting UTC.
    pub const fn utc() -> Self {
        Self {
            offset: UtcOffset::UTC,
        }
    }

    /// Clock reporting the given offset.
    pub const fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Clock reporting the system's local offset.
    ///
    /// The offset is detected once, here. Call before the async runtime starts:
    /// detection fails in multi-threaded processes on most Unix platforms,
    /// in which case UTC is used.
    pub fn local() -> Self {
        Self::with_offset(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
