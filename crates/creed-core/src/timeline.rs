//! Milestone → segment transform.
use creed_model::{
    CREED_TITLE, LabelStyle, Milestone, NowMarker, Palette, RenderSegment, SegmentStatus,
    Timeline, Tooltip,
};
use time::OffsetDateTime;

/// Presentation settings fixed at startup, plus the transform itself.
///
/// [`TimelineBuilder::build`] is pure: the same milestones and instant always
/// produce the same timeline.
#[derive(Debug, Clone)]
pub struct TimelineBuilder {
    title: String,
    palette: Palette,
    label_style: LabelStyle,
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self {
            title: CREED_TITLE.to_string(),
            palette: Palette::default(),
            label_style: LabelStyle::default(),
        }
    }
}

impl TimelineBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[inline]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[inline]
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }

    pub fn label_style(&self) -> LabelStyle {
        self.label_style
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Build one segment per milestone, in input order, plus the "Now" marker.
    pub fn build(&self, milestones: &[Milestone], now: OffsetDateTime) -> Timeline {
        let segments = milestones.iter().map(|m| self.segment(m, now)).collect();

        Timeline {
            title: self.title.clone(),
            segments,
            now: NowMarker::new(now, self.palette.marker.as_str()),
        }
    }

    fn segment(&self, m: &Milestone, now: OffsetDateTime) -> RenderSegment {
        let status = SegmentStatus::classify(m.finish(), now);
        let duration_days = m.duration_days();

        RenderSegment {
            label: self.label_style.compose(m.task(), m.budget()),
            task: m.task().to_string(),
            start: m.start(),
            finish: m.finish(),
            duration_days,
            status,
            color: self.palette.color_for(status).to_string(),
            tooltip: Tooltip {
                finish: m.finish(),
                duration_days,
                budget: m.budget().clone(),
            },
        }
    }
}
