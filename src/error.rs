use thiserror::Error;

/// Errors surfaced by the chart pipeline.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Input that cannot be charted: empty sequence, duplicate label, bad `time`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Backend failure reported by plotters.
    #[error("drawing failed: {0}")]
    Drawing(String),
}

impl ChartError {
    pub(crate) fn drawing<E: std::fmt::Debug>(e: E) -> Self {
        ChartError::Drawing(format!("{:?}", e))
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
