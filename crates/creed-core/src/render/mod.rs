//! Chart rendering abstraction.
//!
//! A renderer turns a [`creed_model::Timeline`] into HTML markup. Implementations
//! (Plotly, inline SVG, ...) live outside this crate and are injected as a [`RendererHandle`].
mod renderer;
pub use renderer::{ChartMarkup, ChartRenderer, RenderError, RendererHandle};
