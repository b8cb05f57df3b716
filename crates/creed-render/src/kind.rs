use std::{fmt, str::FromStr, sync::Arc};

use creed_core::RendererHandle;
use thiserror::Error;

use crate::{PlotlyRenderer, SvgRenderer};

#[derive(Debug, Error)]
#[error("unknown renderer: {0} (expected: plotly|svg)")]
pub struct UnknownRenderer(pub String);

/// Renderer selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RendererKind {
    /// Browser-side Plotly.js chart (default).
    #[default]
    Plotly,
    /// Server-side inline SVG.
    Svg,
}

impl FromStr for RendererKind {
    type Err = UnknownRenderer;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plotly" => Ok(Self::Plotly),
            "svg" => Ok(Self::Svg),
            _ => Err(UnknownRenderer(s.to_string())),
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RendererKind::Plotly => "plotly",
            RendererKind::Svg => "svg",
        };
        f.write_str(s)
    }
}

/// Build a renderer with default settings.
pub fn renderer_for(kind: RendererKind) -> RendererHandle {
    match kind {
        RendererKind::Plotly => Arc::new(PlotlyRenderer::default()),
        RendererKind::Svg => Arc::new(SvgRenderer::default()),
    }
}
