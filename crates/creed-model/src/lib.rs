mod domain;
pub use domain::{
    Budget, COMPLETE_COLOR, CREED_TITLE, MARKER_COLOR, Milestone, MilestoneSpec, NOW_LABEL,
    PENDING_COLOR,
};

mod error;
pub use error::{ModelError, ModelResult};

mod style;
pub use style::{LabelStyle, Palette};

mod timeline;
pub use timeline::{NowMarker, RenderSegment, SegmentStatus, Timeline, Tooltip};
