use serde::{Deserialize, Serialize};

use crate::{COMPLETE_COLOR, MARKER_COLOR, PENDING_COLOR, SegmentStatus};

/// Colors used to paint a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Fill for complete segments.
    pub complete: String,
    /// Fill for pending segments.
    pub pending: String,
    /// Stroke for the "Now" marker.
    pub marker: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            complete: COMPLETE_COLOR.to_string(),
            pending: PENDING_COLOR.to_string(),
            marker: MARKER_COLOR.to_string(),
        }
    }
}

impl Palette {
    /// Fill color for a segment in the given status.
    pub fn color_for(&self, status: SegmentStatus) -> &str {
        match status {
            SegmentStatus::Complete => &self.complete,
            SegmentStatus::Pending => &self.pending,
        }
    }
}
