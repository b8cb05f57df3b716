mod config;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use time::UtcOffset;
use tower_http::trace::TraceLayer;
use tracing::info;

use creed_api::{ChartServiceAdapter, HttpApi};
use creed_core::{ChartService, CoreError, MilestoneCatalog, SystemClock, TimelineBuilder};
use creed_observe::{format_offset, init_local_offset, init_logger};
use creed_render::renderer_for;

use crate::config::{AppConfig, ChartConfig, HttpConfig};

fn main() -> anyhow::Result<()> {
    // 1) environment + local offset, before any thread exists
    dotenvy::dotenv().ok();
    let offset = init_local_offset();

    // 2) logger
    let cfg = AppConfig::from_env()?;
    init_logger(&cfg.logger)?;
    info!(offset = %format_offset(offset), "logger initialized");

    // 3) chart pipeline; bad milestone data stops the process here
    let service = build_service(&cfg.chart, offset)?;
    info!(
        milestones = service.catalog().len(),
        renderer = service.renderer_name(),
        label_style = %cfg.chart.label_style,
        "chart service ready"
    );

    // 4) serve
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(serve(cfg.http, service))
}

fn build_service(chart: &ChartConfig, offset: UtcOffset) -> Result<Arc<ChartService>, CoreError> {
    let catalog = MilestoneCatalog::creed()?;
    let builder = TimelineBuilder::new().with_label_style(chart.label_style);

    Ok(Arc::new(ChartService::new(
        catalog,
        builder,
        Arc::new(SystemClock::with_offset(offset)),
        renderer_for(chart.renderer),
    )))
}

fn app(service: Arc<ChartService>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency_ms = latency.as_millis() as u64,
                status = res.status().as_u16(),
                "finished processing request"
            );
        });

    let handler = Arc::new(ChartServiceAdapter::new(service));
    HttpApi::new(handler).router().layer(trace_layer)
}

async fn serve(http: HttpConfig, service: Arc<ChartService>) -> anyhow::Result<()> {
    let addr = http.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("starting timeline server on {}", addr);

    axum::serve(listener, app(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown requested (OS signal)");
}
