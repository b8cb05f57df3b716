use async_trait::async_trait;
use creed_core::RenderedChart;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }
}

/// Chart API backend.
///
/// Abstracts the pipeline behind the routes so tests and embedders can plug in
/// their own implementation. [`crate::ChartServiceAdapter`] is the stock one.
#[async_trait]
pub trait ChartHandler: Send + Sync + 'static {
    /// Liveness report.
    async fn health(&self) -> Result<HealthStatus, ApiError>;

    /// Render the chart for the current instant.
    async fn render_chart(&self) -> Result<RenderedChart, ApiError>;
}
