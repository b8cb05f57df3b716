use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::Budget;

/// Whether a milestone is already behind the request instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentStatus {
    /// Finish date lies strictly before `now`.
    Complete,
    /// Finish date is at or after `now`.
    Pending,
}

impl SegmentStatus {
    /// Classify a finish date against the request instant.
    ///
    /// The finish date is taken at midnight in `now`'s offset and compared
    /// strictly: a milestone finishing exactly at `now` is still pending.
    pub fn classify(finish: Date, now: OffsetDateTime) -> Self {
        let finish_at = finish.midnight().assume_offset(now.offset());
        if finish_at < now {
            SegmentStatus::Complete
        } else {
            SegmentStatus::Pending
        }
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentStatus::Complete => "complete",
            SegmentStatus::Pending => "pending",
        }
    }
}

/// Hover data attached to a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub finish: Date,
    pub duration_days: u32,
    pub budget: Budget,
}

/// Request-scoped display data for one milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSegment {
    /// Text shown on the category axis.
    pub label: String,
    /// Bare task name.
    pub task: String,
    pub start: Date,
    pub finish: Date,
    /// Inclusive day count, always `>= 1`.
    pub duration_days: u32,
    pub status: SegmentStatus,
    /// Fill color resolved from the palette.
    pub color: String,
    pub tooltip: Tooltip,
}

impl RenderSegment {
    /// Exclusive end of the drawn bar: midnight after the finish date.
    ///
    /// Bars drawn from `start` to this date have a length of `duration_days`.
    pub fn bar_end(&self) -> Date {
        self.finish.next_day().unwrap_or(self.finish)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    #[test]
    fn finish_before_now_is_complete() {
        let status = SegmentStatus::classify(date!(2025 - 07 - 14), datetime!(2025-07-20 0:00 UTC));
        assert_eq!(status, SegmentStatus::Complete);
    }

    #[test]
    fn finish_after_now_is_pending() {
        let status = SegmentStatus::classify(date!(2025 - 07 - 14), datetime!(2025-07-12 0:00 UTC));
        assert_eq!(status, SegmentStatus::Pending);
    }

    #[test]
    fn finish_exactly_at_now_is_pending() {
        let status = SegmentStatus::classify(date!(2025 - 07 - 14), datetime!(2025-07-14 0:00 UTC));
        assert_eq!(status, SegmentStatus::Pending);
    }

    #[test]
    fn finish_day_is_complete_once_it_has_begun() {
        let status =
            SegmentStatus::classify(date!(2025 - 07 - 14), datetime!(2025-07-14 0:00:01 UTC));
        assert_eq!(status, SegmentStatus::Complete);
    }

    #[test]
    fn comparison_uses_the_offset_of_now() {
        // 2025-07-13 23:30 in UTC-5 is still before local midnight of the 14th.
        let status =
            SegmentStatus::classify(date!(2025 - 07 - 14), datetime!(2025-07-13 23:30 -5));
        assert_eq!(status, SegmentStatus::Pending);
    }

    #[test]
    fn bar_end_is_day_after_finish() {
        let seg = RenderSegment {
            label: "X".into(),
            task: "X".into(),
            start: date!(2025 - 07 - 10),
            finish: date!(2025 - 07 - 31),
            duration_days: 22,
            status: SegmentStatus::Pending,
            color: "#ff8311".into(),
            tooltip: Tooltip {
                finish: date!(2025 - 07 - 31),
                duration_days: 22,
                budget: Budget::new("$1"),
            },
        };

        assert_eq!(seg.bar_end(), date!(2025 - 08 - 01));
        assert_eq!((seg.bar_end() - seg.start).whole_days(), 22);
    }

    #[test]
    fn status_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&SegmentStatus::Complete).unwrap(),
            r#""complete""#
        );
    }
}
