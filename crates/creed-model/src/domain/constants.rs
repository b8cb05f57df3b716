//! Presentation constants shared by the transform and the renderers.

/// Fill color for milestones whose finish date lies before the request instant.
pub const COMPLETE_COLOR: &str = "green";

/// Fill color for milestones that finish at or after the request instant.
pub const PENDING_COLOR: &str = "#ff8311";

/// Stroke color of the vertical "Now" line.
pub const MARKER_COLOR: &str = "red";

/// Text attached to the "Now" line.
pub const NOW_LABEL: &str = "Now";

/// Title of the built-in CREED chart.
pub const CREED_TITLE: &str = "CREED Timeline: Renaissance-Inspired Strategy";
