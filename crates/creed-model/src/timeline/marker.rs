use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::NOW_LABEL;

/// Vertical reference line at the request instant, spanning the full chart height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowMarker {
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
    pub label: String,
    /// Stroke color of the line.
    pub color: String,
}

impl NowMarker {
    /// Marker labeled "Now".
    pub fn new(at: OffsetDateTime, color: impl Into<String>) -> Self {
        Self {
            at,
            label: NOW_LABEL.to_string(),
            color: color.into(),
        }
    }
}
