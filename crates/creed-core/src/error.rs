use creed_model::ModelError;
use thiserror::Error;

use crate::render::RenderError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid milestone #{index}: {source}")]
    Catalog {
        index: usize,
        #[source]
        source: ModelError,
    },

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}
