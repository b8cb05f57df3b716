pub mod catalog;
pub mod clock;
pub mod error;
pub mod render;
pub mod service;
pub mod timeline;

pub use catalog::{CREED_MILESTONES, MilestoneCatalog};
pub use clock::{Clock, ClockHandle, FixedClock, SystemClock};
pub use error::CoreError;
pub use render::{ChartMarkup, ChartRenderer, RenderError, RendererHandle};
pub use service::{ChartService, RenderedChart};
pub use timeline::TimelineBuilder;

pub mod prelude {
    pub use crate::catalog::MilestoneCatalog;
    pub use crate::clock::{Clock, SystemClock};
    pub use crate::error::CoreError;
    pub use crate::render::{ChartMarkup, ChartRenderer, RenderError};
    pub use crate::service::ChartService;
    pub use crate::timeline::TimelineBuilder;
}
