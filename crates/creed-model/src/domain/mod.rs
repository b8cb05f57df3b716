mod budget;
pub use budget::Budget;

mod milestone;
pub use milestone::{Milestone, MilestoneSpec};

mod constants;
pub use constants::{COMPLETE_COLOR, CREED_TITLE, MARKER_COLOR, NOW_LABEL, PENDING_COLOR};
