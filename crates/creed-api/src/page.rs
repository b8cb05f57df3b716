use askama::Template;
use creed_core::RenderedChart;

/// Full HTML document wrapping a rendered chart.
#[derive(Template)]
#[template(path = "chart.html")]
pub struct ChartPage<'a> {
    pub title: &'a str,
    pub scripts: &'a [String],
    pub chart: &'a str,
}

impl<'a> From<&'a RenderedChart> for ChartPage<'a> {
    fn from(chart: &'a RenderedChart) -> Self {
        Self {
            title: &chart.title,
            scripts: &chart.markup.scripts,
            chart: &chart.markup.html,
        }
    }
}

#[cfg(test)]
mod tests {
    use creed_core::ChartMarkup;

    use super::*;

    #[test]
    fn wraps_fragment_in_document() {
        let chart = RenderedChart {
            title: "Plan".into(),
            markup: ChartMarkup::inline("<svg id=\"x\"></svg>").with_script("https://cdn.example/lib.js"),
        };
        let html = ChartPage::from(&chart).render().unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Plan</title>"));
        assert!(html.contains(r#"<script src="https://cdn.example/lib.js""#));
        assert!(html.contains("<svg id=\"x\"></svg>"));
    }

    #[test]
    fn title_is_escaped() {
        let chart = RenderedChart {
            title: "R&D <plan>".into(),
            markup: ChartMarkup::default(),
        };
        let html = ChartPage::from(&chart).render().unwrap();

        assert!(html.contains("<title>R&amp;D &lt;plan&gt;</title>"));
        assert!(!html.contains("<script src="));
    }
}
