//! HTTP surface for the CREED timeline.
//!
//! Routes:
//! - `GET /health`: liveness JSON
//! - `GET /creed`: HTML page with the rendered chart
mod adapter;
pub use adapter::ChartServiceAdapter;

mod error;
pub use error::ApiError;

mod handler;
pub use handler::{ChartHandler, HealthStatus};

mod http;
pub use http::HttpApi;

mod page;
pub use page::ChartPage;
