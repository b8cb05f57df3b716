use creed_core::{ChartMarkup, ChartRenderer, RenderError};
use creed_model::{RenderSegment, Timeline};
use serde_json::{Value, json};
use time::macros::format_description;

use crate::{CHART_HEIGHT, X_AXIS_TITLE, Y_AXIS_TITLE};

/// Plotly.js bundle loaded by pages using [`PlotlyRenderer`].
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const DIV_ID: &str = "creed-chart";
const MS_PER_DAY: u64 = 86_400_000;

const HOVER_TEMPLATE: &str = "<b>%{y}</b><br>\
Start: %{customdata[0]}<br>\
End: %{customdata[1]}<br>\
Duration: %{customdata[2]} days<br>\
Budget: %{customdata[3]}<br>\
<extra></extra>";

/// Renders a timeline as a Plotly.js figure.
///
/// Each segment becomes one horizontal bar on a date axis (`base` = start date,
/// `x` = bar length in milliseconds). The figure is embedded as JSON in an inline
/// `<script>`, and the Plotly bundle is requested through [`ChartMarkup::scripts`].
#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    cdn_url: String,
    height: u32,
}

impl Default for PlotlyRenderer {
    fn default() -> Self {
        Self {
            cdn_url: PLOTLY_CDN.to_string(),
            height: CHART_HEIGHT,
        }
    }
}

impl PlotlyRenderer {
    pub fn new(cdn_url: impl Into<String>, height: u32) -> Self {
        Self {
            cdn_url: cdn_url.into(),
            height,
        }
    }

    /// Plotly `data` and `layout` objects for a timeline.
    pub fn figure(&self, timeline: &Timeline) -> Result<(Value, Value), RenderError> {
        let now = timeline
            .now
            .at
            .format(format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second]"
            ))
            .map_err(|e| RenderError::Encode(e.to_string()))?;

        let data: Vec<Value> = timeline.segments.iter().map(bar).collect();
        let categories: Vec<&str> = timeline.segments.iter().map(|s| s.label.as_str()).collect();

        let layout = json!({
            "title": { "text": timeline.title },
            "height": self.height,
            "showlegend": false,
            "barmode": "overlay",
            "xaxis": {
                "type": "date",
                "title": { "text": X_AXIS_TITLE },
            },
            "yaxis": {
                "type": "category",
                "title": { "text": Y_AXIS_TITLE },
                "categoryorder": "array",
                "categoryarray": categories,
                "autorange": "reversed",
            },
            "shapes": [{
                "type": "line",
                "x0": now,
                "x1": now,
                "y0": 0,
                "y1": 1,
                "yref": "paper",
                "line": { "color": timeline.now.color, "width": 2, "dash": "dash" },
            }],
            "annotations": [{
                "x": now,
                "y": 1,
                "yref": "paper",
                "text": timeline.now.label,
                "showarrow": false,
                "xanchor": "right",
                "yanchor": "bottom",
            }],
        });

        Ok((Value::Array(data), layout))
    }
}

fn bar(s: &RenderSegment) -> Value {
    let length_ms = u64::from(s.duration_days) * MS_PER_DAY;

    json!({
        "type": "bar",
        "orientation": "h",
        "name": s.label,
        "y": [s.label],
        "base": [s.start.to_string()],
        "x": [length_ms],
        "marker": { "color": s.color },
        "customdata": [[
            s.start.to_string(),
            s.tooltip.finish.to_string(),
            s.tooltip.duration_days,
            s.tooltip.budget.as_str(),
        ]],
        "hovertemplate": HOVER_TEMPLATE,
        "showlegend": false,
    })
}

/// Serialize for inclusion inside `<script>`.
///
/// `<` only occurs inside JSON strings, where `\u003c` is equivalent, so the
/// payload can never close the surrounding tag.
fn script_json(value: &Value) -> Result<String, RenderError> {
    serde_json::to_string(value)
        .map(|s| s.replace('<', "\\u003c"))
        .map_err(|e| RenderError::Encode(e.to_string()))
}

impl ChartRenderer for PlotlyRenderer {
    fn name(&self) -> &'static str {
        "plotly"
    }

    fn render(&self, timeline: &Timeline) -> Result<ChartMarkup, RenderError> {
        let (data, layout) = self.figure(timeline)?;
        let data = script_json(&data)?;
        let layout = script_json(&layout)?;

        let html = format!(
            r#"<div id="{DIV_ID}" class="plotly-graph-div" style="height:{height}px; width:100%;"></div>
<script type="text/javascript">
  Plotly.newPlot("{DIV_ID}", {data}, {layout}, {{"responsive": true}});
</script>"#,
            height = self.height,
        );

        Ok(ChartMarkup::inline(html).with_script(self.cdn_url.clone()))
    }
}

#[cfg(test)]
mod tests {
    use creed_core::{MilestoneCatalog, TimelineBuilder};
    use time::macros::datetime;

    use super::*;

    fn creed_timeline() -> Timeline {
        let catalog = MilestoneCatalog::creed().unwrap();
        TimelineBuilder::new().build(catalog.milestones(), datetime!(2025-07-22 9:30 UTC))
    }

    #[test]
    fn one_bar_per_segment_in_order() {
        let tl = creed_timeline();
        let (data, _) = PlotlyRenderer::default().figure(&tl).unwrap();
        let bars = data.as_array().unwrap();

        assert_eq!(bars.len(), 5);
        for (bar, seg) in bars.iter().zip(&tl.segments) {
            assert_eq!(bar["y"][0], seg.label.as_str());
            assert_eq!(bar["marker"]["color"], seg.color.as_str());
            assert_eq!(bar["base"][0], seg.start.to_string());
        }
    }

    #[test]
    fn bar_length_matches_inclusive_duration() {
        let tl = creed_timeline();
        let (data, _) = PlotlyRenderer::default().figure(&tl).unwrap();

        // 2025-07-10 ..= 2025-07-14
        assert_eq!(data[0]["x"][0], 5 * MS_PER_DAY);
        assert_eq!(data[0]["customdata"][0][1], "2025-07-14");
        assert_eq!(data[0]["customdata"][0][2], 5);
        assert_eq!(data[0]["customdata"][0][3], "$80");
    }

    #[test]
    fn layout_carries_now_marker() {
        let tl = creed_timeline();
        let (_, layout) = PlotlyRenderer::default().figure(&tl).unwrap();

        let shape = &layout["shapes"][0];
        assert_eq!(shape["x0"], "2025-07-22 09:30:00");
        assert_eq!(shape["yref"], "paper");
        assert_eq!(shape["line"]["color"], "red");
        assert_eq!(shape["line"]["dash"], "dash");

        let note = &layout["annotations"][0];
        assert_eq!(note["text"], "Now");
        assert_eq!(note["xanchor"], "right");
        assert_eq!(layout["height"], 500);
        assert_eq!(layout["showlegend"], false);
        assert_eq!(layout["yaxis"]["autorange"], "reversed");
    }

    #[test]
    fn render_embeds_figure_and_requests_bundle() {
        let markup = PlotlyRenderer::default().render(&creed_timeline()).unwrap();

        assert_eq!(markup.scripts, vec![PLOTLY_CDN.to_string()]);
        assert!(markup.html.contains(r#"Plotly.newPlot("creed-chart""#));
        assert!(markup.html.contains("Mean-Reversion Engine (Déjà Vu)"));
        assert!(markup.html.contains("Regime Detection & Forecasting"));
    }

    #[test]
    fn script_payload_cannot_close_tag() {
        let catalog = MilestoneCatalog::new(vec![
            creed_model::Milestone::new(
                "</script><b>x",
                time::macros::date!(2025 - 07 - 10),
                time::macros::date!(2025 - 07 - 11),
                "$1",
            )
            .unwrap(),
        ]);
        let tl = TimelineBuilder::new().build(catalog.milestones(), datetime!(2025-07-22 9:30 UTC));
        let markup = PlotlyRenderer::default().render(&tl).unwrap();

        assert_eq!(markup.html.matches("</script>").count(), 1);
        assert!(markup.html.contains(r"\u003c/script>\u003cb>x"));
    }
}
