use std::fmt::{self, Write};

use creed_core::{ChartMarkup, ChartRenderer, RenderError};
use creed_model::{RenderSegment, Timeline};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use time::{Date, Duration, OffsetDateTime, UtcOffset, macros::format_description};

use crate::{CHART_HEIGHT, X_AXIS_TITLE, Y_AXIS_TITLE};

const MARGIN_LEFT: f64 = 280.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 60.0;
const BAR_FILL_RATIO: f64 = 0.6;
const TICK_STEP_DAYS: i64 = 7;
const GRID_COLOR: &str = "#e5e5e5";
const TEXT_COLOR: &str = "#2a3f5f";

/// Renders a timeline as a self-contained inline SVG.
///
/// Rows follow segment order from the top. Hovering a bar shows its tooltip
/// through the SVG `<title>` element, so no script is needed.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: u32,
    height: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            width: 1000,
            height: CHART_HEIGHT,
        }
    }
}

/// Horizontal scale mapping instants to x coordinates.
struct TimeScale {
    lo: i64,
    hi: i64,
    x0: f64,
    span: f64,
    offset: UtcOffset,
}

impl TimeScale {
    fn x_at(&self, t: OffsetDateTime) -> f64 {
        let secs = t.unix_timestamp().clamp(self.lo, self.hi);
        self.x0 + (secs - self.lo) as f64 / (self.hi - self.lo) as f64 * self.span
    }

    fn x_date(&self, d: Date) -> f64 {
        self.x_at(d.midnight().assume_offset(self.offset))
    }
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Visible date range: every bar plus the "Now" marker, padded by a day on each side.
    fn date_range(timeline: &Timeline) -> (Date, Date) {
        let today = timeline.now.at.date();
        let lo = timeline
            .segments
            .iter()
            .map(|s| s.start)
            .fold(today, Date::min);
        let hi = timeline
            .segments
            .iter()
            .map(RenderSegment::bar_end)
            .fold(today.next_day().unwrap_or(today), Date::max);

        (lo.saturating_sub(Duration::DAY), hi.saturating_add(Duration::DAY))
    }

    fn draw(&self, timeline: &Timeline, out: &mut String) -> Result<(), RenderError> {
        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;
        if plot_w <= 0.0 || plot_h <= 0.0 {
            return Err(RenderError::Layout(format!(
                "{}x{} leaves no room for the plot area",
                self.width, self.height
            )));
        }

        let offset = timeline.now.at.offset();
        let (first, last) = Self::date_range(timeline);
        let scale = TimeScale {
            lo: first.midnight().assume_offset(offset).unix_timestamp(),
            hi: last.midnight().assume_offset(offset).unix_timestamp(),
            x0: MARGIN_LEFT,
            span: plot_w,
            offset,
        };
        let bottom = MARGIN_TOP + plot_h;

        self.frame(timeline, out, width, height, plot_h)
            .map_err(encode_err)?;
        ticks(&scale, first, last, bottom, out)?;
        rows(timeline, &scale, plot_h, out).map_err(encode_err)?;

        // now marker
        let x = scale.x_at(timeline.now.at);
        write!(
            out,
            r#"<line class="now" x1="{x:.1}" y1="{MARGIN_TOP:.1}" x2="{x:.1}" y2="{bottom:.1}" stroke="{color}" stroke-width="2" stroke-dasharray="6,4"/><text x="{tx:.1}" y="{ty:.1}" text-anchor="end" fill="{TEXT_COLOR}" font-size="12">{label}</text>"#,
            color = attr(&timeline.now.color),
            tx = x - 4.0,
            ty = MARGIN_TOP - 6.0,
            label = text(&timeline.now.label),
        )
        .map_err(encode_err)?;

        out.push_str("</svg>");
        Ok(())
    }

    fn frame(
        &self,
        timeline: &Timeline,
        out: &mut String,
        width: f64,
        height: f64,
        plot_h: f64,
    ) -> fmt::Result {
        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="creed-chart" viewBox="0 0 {w} {h}" width="100%" height="{h}" font-family="sans-serif" role="img">"#,
            w = self.width,
            h = self.height,
        )?;
        write!(
            out,
            r#"<text x="{cx:.1}" y="30" text-anchor="middle" font-size="18" fill="{TEXT_COLOR}">{title}</text>"#,
            cx = width / 2.0,
            title = text(&timeline.title),
        )?;
        write!(
            out,
            r#"<text x="{cx:.1}" y="{y:.1}" text-anchor="middle" font-size="14" fill="{TEXT_COLOR}">{X_AXIS_TITLE}</text>"#,
            cx = MARGIN_LEFT + (width - MARGIN_LEFT - MARGIN_RIGHT) / 2.0,
            y = height - 15.0,
        )?;
        let cy = MARGIN_TOP + plot_h / 2.0;
        write!(
            out,
            r#"<text x="16" y="{cy:.1}" text-anchor="middle" font-size="14" fill="{TEXT_COLOR}" transform="rotate(-90 16 {cy:.1})">{Y_AXIS_TITLE}</text>"#,
        )
    }
}

fn ticks(
    scale: &TimeScale,
    first: Date,
    last: Date,
    bottom: f64,
    out: &mut String,
) -> Result<(), RenderError> {
    let step = Duration::days(TICK_STEP_DAYS);
    let mut day = first;

    while day <= last {
        let x = scale.x_date(day);
        let label = day
            .format(format_description!("[month repr:short] [day]"))
            .map_err(|e| RenderError::Encode(e.to_string()))?;

        write!(
            out,
            r#"<line x1="{x:.1}" y1="{MARGIN_TOP:.1}" x2="{x:.1}" y2="{bottom:.1}" stroke="{GRID_COLOR}"/><text x="{x:.1}" y="{ty:.1}" text-anchor="middle" font-size="11" fill="{TEXT_COLOR}">{label}</text>"#,
            ty = bottom + 16.0,
        )
        .map_err(encode_err)?;

        day = match day.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(())
}

fn rows(timeline: &Timeline, scale: &TimeScale, plot_h: f64, out: &mut String) -> fmt::Result {
    if timeline.is_empty() {
        return Ok(());
    }

    let row_h = plot_h / timeline.len() as f64;
    let bar_h = row_h * BAR_FILL_RATIO;

    for (i, seg) in timeline.segments.iter().enumerate() {
        let row_top = MARGIN_TOP + i as f64 * row_h;
        let center = row_top + row_h / 2.0;
        let x = scale.x_date(seg.start);
        let w = (scale.x_date(seg.bar_end()) - x).max(1.0);

        write!(
            out,
            r#"<text x="{lx:.1}" y="{center:.1}" text-anchor="end" dominant-baseline="middle" font-size="12" fill="{TEXT_COLOR}">{label}</text>"#,
            lx = MARGIN_LEFT - 8.0,
            label = text(&seg.label),
        )?;
        write!(
            out,
            r#"<rect class="segment {status}" x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{bar_h:.1}" fill="{fill}"><title>{tip}</title></rect>"#,
            status = seg.status.as_str(),
            y = center - bar_h / 2.0,
            fill = attr(&seg.color),
            tip = text(&tooltip(seg)),
        )?;
    }
    Ok(())
}

fn tooltip(seg: &RenderSegment) -> String {
    format!(
        "{}\nStart: {}\nEnd: {}\nDuration: {} days\nBudget: {}",
        seg.label, seg.start, seg.tooltip.finish, seg.tooltip.duration_days, seg.tooltip.budget
    )
}

fn encode_err(e: fmt::Error) -> RenderError {
    RenderError::Encode(e.to_string())
}

impl ChartRenderer for SvgRenderer {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn render(&self, timeline: &Timeline) -> Result<ChartMarkup, RenderError> {
        let mut out = String::with_capacity(4096);
        self.draw(timeline, &mut out)?;
        Ok(ChartMarkup::inline(out))
    }
}
