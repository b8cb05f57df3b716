mod marker;
pub use marker::NowMarker;

mod segment;
pub use segment::{RenderSegment, SegmentStatus, Tooltip};

use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub title: String,
    /// Segments in display order, first one topmost.
    pub segments: Vec<RenderSegment>,
    pub now: NowMarker,
}

impl Timeline {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}
