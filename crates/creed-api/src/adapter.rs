use std::sync::Arc;

use async_trait::async_trait;
use creed_core::{ChartService, RenderedChart};

use crate::error::ApiError;
use crate::handler::{ChartHandler, HealthStatus};

const HEALTH_MESSAGE: &str = "Timeline server running";

/// Adapter that bridges [`ChartService`] to [`ChartHandler`].
pub struct ChartServiceAdapter {
    service: Arc<ChartService>,
}

impl ChartServiceAdapter {
    pub fn new(service: Arc<ChartService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ChartHandler for ChartServiceAdapter {
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        Ok(HealthStatus::ok(HEALTH_MESSAGE))
    }

    async fn render_chart(&self) -> Result<RenderedChart, ApiError> {
        self.service.render().map_err(ApiError::from)
    }
}
