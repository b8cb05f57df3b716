use std::sync::Arc;

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tracing::debug;

use crate::{error::ApiError, handler::ChartHandler, page::ChartPage};

/// HTTP API service builder.
pub struct HttpApi<H> {
    handler: Arc<H>,
}

impl<H> HttpApi<H>
where
    H: ChartHandler,
{
    /// Create new HTTP API with the given handler.
    pub fn new(handler: Arc<H>) -> Self {
        Self { handler }
    }

    /// Build axum router with mounted endpoints.
    ///
    /// Routes:
    /// - GET /health - Liveness check
    /// - GET /creed - Timeline chart page
    pub fn router(self) -> Router {
        Router::new()
            .route("/health", get(health::<H>))
            .route("/creed", get(chart_page::<H>))
            .with_state(self.handler)
    }
}

/// GET /health
async fn health<H>(State(handler): State<Arc<H>>) -> Result<impl IntoResponse, ApiError>
where
    H: ChartHandler,
{
    let status = handler.health().await?;
    Ok(Json(status))
}

/// GET /creed
async fn chart_page<H>(State(handler): State<Arc<H>>) -> Result<impl IntoResponse, ApiError>
where
    H: ChartHandler,
{
    let chart = handler.render_chart().await?;
    let page = ChartPage::from(&chart).render()?;
    debug!(bytes = page.len(), "chart page rendered");

    Ok(Html(page))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use creed_core::{
        ChartService, CoreError, FixedClock, MilestoneCatalog, RenderError, RenderedChart,
        TimelineBuilder,
    };
    use creed_model::LabelStyle;
    use creed_render::{RendererKind, renderer_for};
    use time::macros::datetime;
    use tower::ServiceExt;

    use super::*;
    use crate::{ChartServiceAdapter, HealthStatus};

    fn app(kind: RendererKind, style: LabelStyle) -> Router {
        let service = ChartService::new(
            MilestoneCatalog::creed().unwrap(),
            TimelineBuilder::new().with_label_style(style),
            Arc::new(FixedClock(datetime!(2025-07-22 9:30 UTC))),
            renderer_for(kind),
        );
        let handler = Arc::new(ChartServiceAdapter::new(Arc::new(service)));
        HttpApi::new(handler).router()
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let res = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = res.status();
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();

        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_returns_ok_json() {
        let (status, content_type, body) =
            send(app(RendererKind::Plotly, LabelStyle::Bare), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"status": "ok", "message": "Timeline server running"})
        );
    }

    #[tokio::test]
    async fn plotly_page_contains_every_task() {
        let (status, content_type, body) =
            send(app(RendererKind::Plotly, LabelStyle::Bare), "/creed").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("cdn.plot.ly"));

        for spec in creed_core::CREED_MILESTONES {
            assert!(body.contains(spec.task), "missing task {:?}", spec.task);
        }
    }

    #[tokio::test]
    async fn svg_page_contains_five_distinct_labels() {
        let (status, _, body) = send(app(RendererKind::Svg, LabelStyle::WithBudget), "/creed").await;
        assert_eq!(status, StatusCode::OK);

        let labels: Vec<String> = creed_core::CREED_MILESTONES
            .iter()
            .map(|s| format!("{} ({})", s.task, s.budget).replace('&', "&amp;"))
            .collect();

        for label in &labels {
            assert_eq!(body.matches(&format!(">{label}</text>")).count(), 1, "{label}");
        }
        assert!(!body.contains("cdn.plot.ly"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (status, _, _) = send(app(RendererKind::Svg, LabelStyle::Bare), "/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    struct FailingHandler;

    #[async_trait]
    impl ChartHandler for FailingHandler {
        async fn health(&self) -> Result<HealthStatus, ApiError> {
            Ok(HealthStatus::ok("still alive"))
        }

        async fn render_chart(&self) -> Result<RenderedChart, ApiError> {
            Err(CoreError::from(RenderError::Encode("boom".into())).into())
        }
    }

    #[tokio::test]
    async fn renderer_failure_is_500() {
        let router = HttpApi::new(Arc::new(FailingHandler)).router();
        let (status, _, body) = send(router, "/creed").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(value["error"].as_str().unwrap().contains("boom"));
    }

    #[tokio::test]
    async fn health_does_not_depend_on_renderer() {
        let router = HttpApi::new(Arc::new(FailingHandler)).router();
        let (status, _, body) = send(router, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("still alive"));
    }
}
