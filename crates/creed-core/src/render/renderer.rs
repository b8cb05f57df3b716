use std::sync::Arc;

use creed_model::Timeline;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode chart data: {0}")]
    Encode(String),

    #[error("cannot render chart: {0}")]
    Layout(String),
}

/// Output of a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartMarkup {
    /// External scripts the page must load before the fragment runs.
    pub scripts: Vec<String>,
    /// HTML fragment placed in the page body.
    pub html: String,
}

impl ChartMarkup {
    /// Markup that needs no external scripts.
    pub fn inline(html: impl Into<String>) -> Self {
        Self {
            scripts: Vec::new(),
            html: html.into(),
        }
    }

    /// Add an external script.
    pub fn with_script(mut self, src: impl Into<String>) -> Self {
        self.scripts.push(src.into());
        self
    }
}

/// Strategy turning a timeline into chart markup.
pub trait ChartRenderer: Send + Sync + 'static {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Render the timeline.
    ///
    /// Segments must be drawn in order, the first one topmost.
    fn render(&self, timeline: &Timeline) -> Result<ChartMarkup, RenderError>;
}

/// Shared handle to a renderer.
pub type RendererHandle = Arc<dyn ChartRenderer>;
