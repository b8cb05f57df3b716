//! Request-facing pipeline: catalog → transform → renderer.
use creed_model::Timeline;
use tracing::{debug, instrument};

use crate::{
    catalog::MilestoneCatalog,
    clock::ClockHandle,
    error::CoreError,
    render::{ChartMarkup, RendererHandle},
    timeline::TimelineBuilder,
};

/// A rendered chart ready to be placed in a page.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub title: String,
    pub markup: ChartMarkup,
}

/// Immutable per-process chart pipeline.
///
/// Every field is fixed at startup; requests only read it, so one instance is
/// shared behind an `Arc` without locking.
pub struct ChartService {
    catalog: MilestoneCatalog,
    builder: TimelineBuilder,
    clock: ClockHandle,
    renderer: RendererHandle,
}

impl ChartService {
    pub fn new(
        catalog: MilestoneCatalog,
        builder: TimelineBuilder,
        clock: ClockHandle,
        renderer: RendererHandle,
    ) -> Self {
        Self {
            catalog,
            builder,
            clock,
            renderer,
        }
    }

    pub fn catalog(&self) -> &MilestoneCatalog {
        &self.catalog
    }

    pub fn renderer_name(&self) -> &'static str {
        self.renderer.name()
    }

    /// Build a fresh timeline, sampling the clock once.
    pub fn timeline(&self) -> Timeline {
        let now = self.clock.now();
        self.builder.build(self.catalog.milestones(), now)
    }

    /// Build and render a fresh timeline.
    #[instrument(level = "debug", skip(self), fields(renderer = self.renderer.name()))]
    pub fn render(&self) -> Result<RenderedChart, CoreError> {
        let timeline = self.timeline();
        debug!(
            segments = timeline.len(),
            now = %timeline.now.at,
            "timeline built"
        );

        let markup = self.renderer.render(&timeline)?;

        Ok(RenderedChart {
            title: timeline.title,
            markup,
        })
    }
}
