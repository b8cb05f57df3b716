//! Chart renderers for CREED timelines.
//!
//! Two [`creed_core::ChartRenderer`] implementations are provided:
//! - [`PlotlyRenderer`]: a Plotly.js figure drawn in the browser, script loaded from the CDN.
//! - [`SvgRenderer`]: a self-contained inline SVG drawn on the server.
//!
//! ## Example
//! ```rust
//! use creed_core::{ChartRenderer, MilestoneCatalog, TimelineBuilder};
//! use creed_render::{RendererKind, renderer_for};
//! use time::OffsetDateTime;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = MilestoneCatalog::creed()?;
//! let timeline = TimelineBuilder::new().build(catalog.milestones(), OffsetDateTime::now_utc());
//!
//! let renderer = renderer_for(RendererKind::Svg);
//! let markup = renderer.render(&timeline)?;
//! assert!(markup.html.starts_with("<svg"));
//! # Ok(())
//! # }
//! ```

mod kind;
pub use kind::{RendererKind, UnknownRenderer, renderer_for};

mod plotly;
pub use plotly::{PLOTLY_CDN, PlotlyRenderer};

mod svg;
pub use svg::SvgRenderer;

/// Height of the chart area in pixels.
pub const CHART_HEIGHT: u32 = 500;

/// Axis titles.
pub(crate) const X_AXIS_TITLE: &str = "Date";
pub(crate) const Y_AXIS_TITLE: &str = "Milestone";
